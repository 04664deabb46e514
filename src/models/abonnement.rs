use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::money;

/// Raw subscription row. `price_due` and `amount_paid` are integer cents and
/// are only ever mutated through the payment ledger.
#[derive(Debug, Clone, FromRow)]
pub struct Abonnement {
    pub id: Uuid,
    pub adherent_id: Uuid,
    pub school_id: Option<Uuid>,
    pub groupe_id: Option<Uuid>,
    pub price_due: i64,
    pub amount_paid: i64,
    pub payment_method: Option<String>,
    pub bank_name: Option<String>,
    pub account_ref: Option<String>,
    pub payment_note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Pure function of (paid, due) — never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    PartialPaid,
    Unpaid,
}

impl PaymentStatus {
    pub fn derive(amount_paid: i64, price_due: i64) -> Self {
        if amount_paid >= price_due {
            PaymentStatus::Paid
        } else if amount_paid > 0 {
            PaymentStatus::PartialPaid
        } else {
            PaymentStatus::Unpaid
        }
    }
}

/// Read-side view of a subscription with the derived balance fields.
#[derive(Debug, Clone, Serialize)]
pub struct AbonnementView {
    pub id: Uuid,
    pub adherent_id: Uuid,
    pub school_id: Option<Uuid>,
    pub groupe_id: Option<Uuid>,
    pub price_due: String,
    pub amount_paid: String,
    pub remaining: String,
    pub status: PaymentStatus,
    pub payment_method: Option<String>,
    pub bank_name: Option<String>,
    pub account_ref: Option<String>,
    pub payment_note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Abonnement> for AbonnementView {
    fn from(a: Abonnement) -> Self {
        Self {
            id: a.id,
            adherent_id: a.adherent_id,
            school_id: a.school_id,
            groupe_id: a.groupe_id,
            price_due: money::format(a.price_due),
            amount_paid: money::format(a.amount_paid),
            remaining: money::format(a.price_due - a.amount_paid),
            status: PaymentStatus::derive(a.amount_paid, a.price_due),
            payment_method: a.payment_method,
            bank_name: a.bank_name,
            account_ref: a.account_ref,
            payment_note: a.payment_note,
            created_at: a.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateAbonnementRequest {
    pub adherent_id: Uuid,
    pub school_id: Option<Uuid>,
    pub groupe_id: Option<Uuid>,
    /// Two-decimal amount, e.g. "1000.00".
    pub price_due: String,
}

#[derive(Debug, Deserialize)]
pub struct RecordPaymentRequest {
    /// Two-decimal amount, e.g. "400.00".
    pub amount: String,
    pub method: String,
    pub bank_name: Option<String>,
    pub account_ref: Option<String>,
    pub note: Option<String>,
}

/// Outcome of a successful payment: the new running total, what is still
/// owed, and the derived status.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub amount_paid: String,
    pub remaining: String,
    pub status: PaymentStatus,
}
