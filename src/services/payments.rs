use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{
    error::ServiceError,
    models::abonnement::{PaymentReceipt, PaymentStatus, RecordPaymentRequest},
    money,
};

/// How many times the read-check-write cycle runs before a concurrent-update
/// conflict is surfaced: the initial attempt plus one internal retry.
const CAS_ATTEMPTS: u32 = 2;

pub struct PaymentService;

impl PaymentService {
    /// Apply an incremental payment to a subscription's running total.
    ///
    /// Lost updates are prevented with an optimistic compare-and-swap: the
    /// UPDATE is guarded on the `amount_paid` value read just before, so two
    /// concurrent payments can never both count against the same stale
    /// balance. The guarded UPDATE is a single statement and therefore atomic
    /// on its own. A payment that lost the race is retried once against the
    /// fresh balance; if it then exceeds what remains it is rejected with
    /// `Overpayment`, so `amount_paid` can never exceed `price_due`.
    pub async fn record(
        pool: &SqlitePool,
        abonnement_id: Uuid,
        req: &RecordPaymentRequest,
    ) -> Result<PaymentReceipt, ServiceError> {
        let amount = money::parse(&req.amount).map_err(ServiceError::Validation)?;
        if amount <= 0 {
            return Err(ServiceError::Validation(format!(
                "payment amount must be positive, got {}",
                money::format(amount)
            )));
        }

        for _ in 0..CAS_ATTEMPTS {
            let row: Option<(i64, i64)> =
                sqlx::query_as("SELECT price_due, amount_paid FROM abonnements WHERE id = ?1")
                    .bind(abonnement_id)
                    .fetch_optional(pool)
                    .await?;
            let (price_due, amount_paid) = row.ok_or(ServiceError::NotFound {
                entity: "abonnement",
                id: abonnement_id,
            })?;

            let remaining = price_due - amount_paid;
            if amount > remaining {
                return Err(ServiceError::Overpayment {
                    attempted: amount,
                    remaining,
                });
            }

            let new_paid = amount_paid + amount;
            let result = sqlx::query(
                "UPDATE abonnements
                 SET amount_paid = ?1,
                     payment_method = ?2,
                     bank_name = COALESCE(?3, bank_name),
                     account_ref = COALESCE(?4, account_ref),
                     payment_note = COALESCE(?5, payment_note)
                 WHERE id = ?6 AND amount_paid = ?7",
            )
            .bind(new_paid)
            .bind(&req.method)
            .bind(&req.bank_name)
            .bind(&req.account_ref)
            .bind(&req.note)
            .bind(abonnement_id)
            .bind(amount_paid)
            .execute(pool)
            .await?;

            if result.rows_affected() == 1 {
                return Ok(PaymentReceipt {
                    amount_paid: money::format(new_paid),
                    remaining: money::format(price_due - new_paid),
                    status: PaymentStatus::derive(new_paid, price_due),
                });
            }
            // A concurrent payment moved the balance between our read and
            // write; loop once more against the fresh value.
        }

        Err(ServiceError::Storage(format!(
            "concurrent update conflict on abonnement {abonnement_id}"
        )))
    }
}
