use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A training location (court, pitch, hall). `price_per_session` is integer
/// cents.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    pub price_per_session: i64,
    pub session_minutes: i64,
    pub field_count: i64,
    pub status: String,
    pub kind: String,
    pub opens_on: Option<NaiveDate>,
    pub closes_on: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateLocationRequest {
    pub name: String,
    pub price_per_session: Option<i64>,
    pub session_minutes: Option<i64>,
    pub field_count: Option<i64>,
    pub status: Option<String>,
    pub kind: Option<String>,
    pub opens_on: Option<NaiveDate>,
    pub closes_on: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateLocationRequest {
    pub name: Option<String>,
    pub price_per_session: Option<i64>,
    pub session_minutes: Option<i64>,
    pub field_count: Option<i64>,
    pub status: Option<String>,
    pub kind: Option<String>,
    pub opens_on: Option<NaiveDate>,
    pub closes_on: Option<NaiveDate>,
}
