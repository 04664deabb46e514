use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{
    error::ServiceError,
    models::location::{CreateLocationRequest, Location, UpdateLocationRequest},
};

pub struct LocationService;

impl LocationService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Location>, ServiceError> {
        let locations = sqlx::query_as::<_, Location>("SELECT * FROM locations ORDER BY name")
            .fetch_all(pool)
            .await?;
        Ok(locations)
    }

    pub async fn get(pool: &SqlitePool, id: Uuid) -> Result<Location, ServiceError> {
        sqlx::query_as::<_, Location>("SELECT * FROM locations WHERE id = ?1")
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(ServiceError::NotFound { entity: "location", id })
    }

    pub async fn create(
        pool: &SqlitePool,
        req: &CreateLocationRequest,
    ) -> Result<Location, ServiceError> {
        let location = sqlx::query_as::<_, Location>(
            "INSERT INTO locations
                 (id, name, price_per_session, session_minutes, field_count,
                  status, kind, opens_on, closes_on, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&req.name)
        .bind(req.price_per_session.unwrap_or(0))
        .bind(req.session_minutes.unwrap_or(60))
        .bind(req.field_count.unwrap_or(1))
        .bind(req.status.as_deref().unwrap_or("open"))
        .bind(req.kind.as_deref().unwrap_or("outdoor"))
        .bind(req.opens_on)
        .bind(req.closes_on)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;
        Ok(location)
    }

    pub async fn update(
        pool: &SqlitePool,
        id: Uuid,
        req: &UpdateLocationRequest,
    ) -> Result<Location, ServiceError> {
        sqlx::query_as::<_, Location>(
            "UPDATE locations
             SET name              = COALESCE(?1, name),
                 price_per_session = COALESCE(?2, price_per_session),
                 session_minutes   = COALESCE(?3, session_minutes),
                 field_count       = COALESCE(?4, field_count),
                 status            = COALESCE(?5, status),
                 kind              = COALESCE(?6, kind),
                 opens_on          = COALESCE(?7, opens_on),
                 closes_on         = COALESCE(?8, closes_on)
             WHERE id = ?9
             RETURNING *",
        )
        .bind(&req.name)
        .bind(req.price_per_session)
        .bind(req.session_minutes)
        .bind(req.field_count)
        .bind(&req.status)
        .bind(&req.kind)
        .bind(req.opens_on)
        .bind(req.closes_on)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(ServiceError::NotFound { entity: "location", id })
    }
}
