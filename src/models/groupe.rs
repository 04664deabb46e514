use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Groupe {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub school_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateGroupeRequest {
    pub name: String,
    pub description: Option<String>,
    pub school_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateGroupeRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub school_id: Option<Uuid>,
}
