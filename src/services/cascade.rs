use sqlx::{SqliteConnection, SqlitePool};
use uuid::Uuid;

use crate::error::ServiceError;

pub struct CascadeService;

impl CascadeService {
    /// Delete a group and everything that transitively depends on it.
    ///
    /// Order within one transaction:
    /// 1. presences of reservations at the group's associated locations,
    ///    plus presences tagged with the group directly
    /// 2. reservations at those locations
    /// 3. group-location rows
    /// 4. group-coach rows
    /// 5. group-adherent rows
    /// 6. the group row
    pub async fn delete_group(pool: &SqlitePool, groupe_id: Uuid) -> Result<(), ServiceError> {
        let mut tx = pool.begin().await?;
        ensure_exists(&mut tx, "groupes", "groupe", groupe_id).await?;

        sqlx::query(
            "DELETE FROM presences WHERE reservation_id IN (
                 SELECT r.id FROM reservations r
                 JOIN groupe_locations gl ON gl.location_id = r.location_id
                 WHERE gl.groupe_id = ?1
             )",
        )
        .bind(groupe_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM presences WHERE groupe_id = ?1")
            .bind(groupe_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            "DELETE FROM reservations WHERE location_id IN (
                 SELECT location_id FROM groupe_locations WHERE groupe_id = ?1
             )",
        )
        .bind(groupe_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM groupe_locations WHERE groupe_id = ?1")
            .bind(groupe_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM groupe_coaches WHERE groupe_id = ?1")
            .bind(groupe_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM groupe_adherents WHERE groupe_id = ?1")
            .bind(groupe_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM groupes WHERE id = ?1")
            .bind(groupe_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Delete a school: its association rows, then the school row. Schools do
    /// not own reservations, so there is no deeper cascade.
    pub async fn delete_school(pool: &SqlitePool, school_id: Uuid) -> Result<(), ServiceError> {
        let mut tx = pool.begin().await?;
        ensure_exists(&mut tx, "schools", "school", school_id).await?;

        sqlx::query("DELETE FROM school_locations WHERE school_id = ?1")
            .bind(school_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM school_coaches WHERE school_id = ?1")
            .bind(school_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM schools WHERE id = ?1")
            .bind(school_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Delete a location and the reservations it owns (an attendance row
    /// never outlives its reservation, so those go first). Association rows
    /// pointing at the location are NOT scrubbed here: owners are expected to
    /// re-submit their sets via the association replace.
    pub async fn delete_location(pool: &SqlitePool, location_id: Uuid) -> Result<(), ServiceError> {
        let mut tx = pool.begin().await?;
        ensure_exists(&mut tx, "locations", "location", location_id).await?;

        sqlx::query(
            "DELETE FROM presences WHERE reservation_id IN (
                 SELECT id FROM reservations WHERE location_id = ?1
             )",
        )
        .bind(location_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM reservations WHERE location_id = ?1")
            .bind(location_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM locations WHERE id = ?1")
            .bind(location_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}

async fn ensure_exists(
    conn: &mut SqliteConnection,
    table: &str,
    entity: &'static str,
    id: Uuid,
) -> Result<(), ServiceError> {
    let exists: bool =
        sqlx::query_scalar(&format!("SELECT EXISTS(SELECT 1 FROM {table} WHERE id = ?1)"))
            .bind(id)
            .fetch_one(conn)
            .await?;
    if exists {
        Ok(())
    } else {
        Err(ServiceError::NotFound { entity, id })
    }
}
