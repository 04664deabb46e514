use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One row per (reservation, adherent). `groupe_id` records which group the
/// adherent attended with.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Presence {
    pub reservation_id: Uuid,
    pub adherent_id: Uuid,
    pub groupe_id: Option<Uuid>,
    pub present: bool,
}

/// Attendance-sheet line: presence joined with the adherent's identity.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PresenceSheetEntry {
    pub adherent_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub present: bool,
}

#[derive(Debug, Deserialize)]
pub struct MarkPresenceRequest {
    pub adherent_id: Uuid,
    pub groupe_id: Option<Uuid>,
    pub present: bool,
}
