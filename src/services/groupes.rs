use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{
    error::ServiceError,
    models::{
        adherent::Adherent,
        coach::Coach,
        groupe::{CreateGroupeRequest, Groupe, UpdateGroupeRequest},
        location::Location,
    },
};

pub struct GroupeService;

impl GroupeService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Groupe>, ServiceError> {
        let groupes = sqlx::query_as::<_, Groupe>("SELECT * FROM groupes ORDER BY name")
            .fetch_all(pool)
            .await?;
        Ok(groupes)
    }

    pub async fn get(pool: &SqlitePool, id: Uuid) -> Result<Groupe, ServiceError> {
        sqlx::query_as::<_, Groupe>("SELECT * FROM groupes WHERE id = ?1")
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(ServiceError::NotFound { entity: "groupe", id })
    }

    pub async fn create(
        pool: &SqlitePool,
        req: &CreateGroupeRequest,
    ) -> Result<Groupe, ServiceError> {
        let groupe = sqlx::query_as::<_, Groupe>(
            "INSERT INTO groupes (id, name, description, school_id, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.school_id)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;
        Ok(groupe)
    }

    pub async fn update(
        pool: &SqlitePool,
        id: Uuid,
        req: &UpdateGroupeRequest,
    ) -> Result<Groupe, ServiceError> {
        sqlx::query_as::<_, Groupe>(
            "UPDATE groupes
             SET name        = COALESCE(?1, name),
                 description = COALESCE(?2, description),
                 school_id   = COALESCE(?3, school_id)
             WHERE id = ?4
             RETURNING *",
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.school_id)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(ServiceError::NotFound { entity: "groupe", id })
    }

    pub async fn locations(pool: &SqlitePool, id: Uuid) -> Result<Vec<Location>, ServiceError> {
        let locations = sqlx::query_as::<_, Location>(
            "SELECT l.* FROM locations l
             JOIN groupe_locations gl ON gl.location_id = l.id
             WHERE gl.groupe_id = ?1
             ORDER BY l.name",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;
        Ok(locations)
    }

    pub async fn coaches(pool: &SqlitePool, id: Uuid) -> Result<Vec<Coach>, ServiceError> {
        let coaches = sqlx::query_as::<_, Coach>(
            "SELECT c.* FROM coaches c
             JOIN groupe_coaches gc ON gc.coach_id = c.id
             WHERE gc.groupe_id = ?1
             ORDER BY c.last_name, c.first_name",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;
        Ok(coaches)
    }

    pub async fn adherents(pool: &SqlitePool, id: Uuid) -> Result<Vec<Adherent>, ServiceError> {
        let adherents = sqlx::query_as::<_, Adherent>(
            "SELECT a.* FROM adherents a
             JOIN groupe_adherents ga ON ga.adherent_id = a.id
             WHERE ga.groupe_id = ?1
             ORDER BY a.last_name, a.first_name",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;
        Ok(adherents)
    }
}
