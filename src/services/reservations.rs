use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{
    error::ServiceError,
    models::reservation::{CreateReservationRequest, Reservation},
};

pub struct ReservationService;

impl ReservationService {
    pub async fn list_for_location(
        pool: &SqlitePool,
        location_id: Uuid,
    ) -> Result<Vec<Reservation>, ServiceError> {
        let reservations = sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations WHERE location_id = ?1 ORDER BY day, time_slot",
        )
        .bind(location_id)
        .fetch_all(pool)
        .await?;
        Ok(reservations)
    }

    pub async fn get(pool: &SqlitePool, id: Uuid) -> Result<Reservation, ServiceError> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = ?1")
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(ServiceError::NotFound { entity: "reservation", id })
    }

    pub async fn create(
        pool: &SqlitePool,
        req: &CreateReservationRequest,
    ) -> Result<Reservation, ServiceError> {
        let location_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM locations WHERE id = ?1)")
                .bind(req.location_id)
                .fetch_one(pool)
                .await?;
        if !location_exists {
            return Err(ServiceError::NotFound {
                entity: "location",
                id: req.location_id,
            });
        }

        let reservation = sqlx::query_as::<_, Reservation>(
            "INSERT INTO reservations
                 (id, location_id, day, time_slot, court, kind, status, client_name, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, 'booked', ?7, ?8)
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(req.location_id)
        .bind(req.day)
        .bind(&req.time_slot)
        .bind(req.court)
        .bind(&req.kind)
        .bind(&req.client_name)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;
        Ok(reservation)
    }
}
