use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{
    error::ServiceError,
    models::abonnement::{Abonnement, AbonnementView, CreateAbonnementRequest},
    money,
};

pub struct AbonnementService;

impl AbonnementService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<AbonnementView>, ServiceError> {
        let rows = sqlx::query_as::<_, Abonnement>(
            "SELECT * FROM abonnements ORDER BY created_at DESC",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(AbonnementView::from).collect())
    }

    pub async fn list_for_adherent(
        pool: &SqlitePool,
        adherent_id: Uuid,
    ) -> Result<Vec<AbonnementView>, ServiceError> {
        let rows = sqlx::query_as::<_, Abonnement>(
            "SELECT * FROM abonnements WHERE adherent_id = ?1 ORDER BY created_at DESC",
        )
        .bind(adherent_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(AbonnementView::from).collect())
    }

    pub async fn get(pool: &SqlitePool, id: Uuid) -> Result<AbonnementView, ServiceError> {
        let row = sqlx::query_as::<_, Abonnement>("SELECT * FROM abonnements WHERE id = ?1")
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(ServiceError::NotFound { entity: "abonnement", id })?;
        Ok(row.into())
    }

    /// Create a subscription. `price_due` is fixed at creation; the running
    /// total starts at zero and is only moved by the payment ledger.
    pub async fn create(
        pool: &SqlitePool,
        req: &CreateAbonnementRequest,
    ) -> Result<AbonnementView, ServiceError> {
        let price_due = money::parse(&req.price_due).map_err(ServiceError::Validation)?;
        if price_due < 0 {
            return Err(ServiceError::Validation(format!(
                "price due must not be negative, got {}",
                money::format(price_due)
            )));
        }

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

        let row = sqlx::query_as::<_, Abonnement>(
            "INSERT INTO abonnements
                 (id, adherent_id, school_id, groupe_id, price_due, amount_paid, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6)
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(req.adherent_id)
        .bind(req.school_id)
        .bind(req.groupe_id)
        .bind(price_due)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;
        Ok(row.into())
    }
}
