use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{
    error::ServiceError,
    models::presence::{MarkPresenceRequest, Presence, PresenceSheetEntry},
};

pub struct PresenceService;

impl PresenceService {
    /// The attendance sheet for a reservation: one line per recorded
    /// adherent, joined with their identity.
    pub async fn sheet(
        pool: &SqlitePool,
        reservation_id: Uuid,
    ) -> Result<Vec<PresenceSheetEntry>, ServiceError> {
        Self::ensure_reservation(pool, reservation_id).await?;
        let entries = sqlx::query_as::<_, PresenceSheetEntry>(
            "SELECT p.adherent_id, a.first_name, a.last_name, p.present
             FROM presences p
             JOIN adherents a ON a.id = p.adherent_id
             WHERE p.reservation_id = ?1
             ORDER BY a.last_name, a.first_name",
        )
        .bind(reservation_id)
        .fetch_all(pool)
        .await?;
        Ok(entries)
    }

    /// Record one adherent's presence flag for a reservation. Upserts on the
    /// (reservation, adherent) pair so re-submitting a sheet line is safe.
    pub async fn mark(
        pool: &SqlitePool,
        reservation_id: Uuid,
        req: &MarkPresenceRequest,
    ) -> Result<Presence, ServiceError> {
        Self::ensure_reservation(pool, reservation_id).await?;

        let adherent_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM adherents WHERE id = ?1)")
                .bind(req.adherent_id)
                .fetch_one(pool)
                .await?;
        if !adherent_exists {
            return Err(ServiceError::NotFound {
                entity: "adherent",
                id: req.adherent_id,
            });
        }

        let presence = sqlx::query_as::<_, Presence>(
            "INSERT INTO presences (reservation_id, adherent_id, groupe_id, present)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT (reservation_id, adherent_id)
             DO UPDATE SET present = excluded.present, groupe_id = excluded.groupe_id
             RETURNING *",
        )
        .bind(reservation_id)
        .bind(req.adherent_id)
        .bind(req.groupe_id)
        .bind(req.present)
        .fetch_one(pool)
        .await?;
        Ok(presence)
    }

    async fn ensure_reservation(pool: &SqlitePool, id: Uuid) -> Result<(), ServiceError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM reservations WHERE id = ?1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        if exists {
            Ok(())
        } else {
            Err(ServiceError::NotFound { entity: "reservation", id })
        }
    }
}
