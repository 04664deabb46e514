use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{
    error::ServiceError,
    models::adherent::{Adherent, CreateAdherentRequest, UpdateAdherentRequest},
};

pub struct AdherentService;

impl AdherentService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Adherent>, ServiceError> {
        let adherents =
            sqlx::query_as::<_, Adherent>("SELECT * FROM adherents ORDER BY last_name, first_name")
                .fetch_all(pool)
                .await?;
        Ok(adherents)
    }

    pub async fn get(pool: &SqlitePool, id: Uuid) -> Result<Adherent, ServiceError> {
        sqlx::query_as::<_, Adherent>("SELECT * FROM adherents WHERE id = ?1")
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(ServiceError::NotFound { entity: "adherent", id })
    }

    pub async fn create(
        pool: &SqlitePool,
        req: &CreateAdherentRequest,
    ) -> Result<Adherent, ServiceError> {
        let adherent = sqlx::query_as::<_, Adherent>(
            "INSERT INTO adherents (id, first_name, last_name, email, phone, birth_date, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(req.birth_date)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;
        Ok(adherent)
    }

    pub async fn update(
        pool: &SqlitePool,
        id: Uuid,
        req: &UpdateAdherentRequest,
    ) -> Result<Adherent, ServiceError> {
        sqlx::query_as::<_, Adherent>(
            "UPDATE adherents
             SET first_name = COALESCE(?1, first_name),
                 last_name  = COALESCE(?2, last_name),
                 email      = COALESCE(?3, email),
                 phone      = COALESCE(?4, phone),
                 birth_date = COALESCE(?5, birth_date)
             WHERE id = ?6
             RETURNING *",
        )
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(req.birth_date)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(ServiceError::NotFound { entity: "adherent", id })
    }
}
