use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    pub id: Uuid,
    pub location_id: Uuid,
    pub day: NaiveDate,
    pub time_slot: String,
    pub court: Option<i64>,
    pub kind: Option<String>,
    pub status: String,
    pub client_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateReservationRequest {
    pub location_id: Uuid,
    pub day: NaiveDate,
    pub time_slot: String,
    pub court: Option<i64>,
    pub kind: Option<String>,
    pub client_name: Option<String>,
}
