use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{
    error::ServiceError,
    models::coach::{Coach, CreateCoachRequest, UpdateCoachRequest},
};

pub struct CoachService;

impl CoachService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Coach>, ServiceError> {
        let coaches =
            sqlx::query_as::<_, Coach>("SELECT * FROM coaches ORDER BY last_name, first_name")
                .fetch_all(pool)
                .await?;
        Ok(coaches)
    }

    pub async fn get(pool: &SqlitePool, id: Uuid) -> Result<Coach, ServiceError> {
        sqlx::query_as::<_, Coach>("SELECT * FROM coaches WHERE id = ?1")
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(ServiceError::NotFound { entity: "coach", id })
    }

    pub async fn create(pool: &SqlitePool, req: &CreateCoachRequest) -> Result<Coach, ServiceError> {
        let coach = sqlx::query_as::<_, Coach>(
            "INSERT INTO coaches (id, first_name, last_name, email, phone, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;
        Ok(coach)
    }

    pub async fn update(
        pool: &SqlitePool,
        id: Uuid,
        req: &UpdateCoachRequest,
    ) -> Result<Coach, ServiceError> {
        sqlx::query_as::<_, Coach>(
            "UPDATE coaches
             SET first_name = COALESCE(?1, first_name),
                 last_name  = COALESCE(?2, last_name),
                 email      = COALESCE(?3, email),
                 phone      = COALESCE(?4, phone)
             WHERE id = ?5
             RETURNING *",
        )
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(ServiceError::NotFound { entity: "coach", id })
    }
}
