use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::{
    error::ServiceError,
    models::presence::{MarkPresenceRequest, Presence, PresenceSheetEntry},
    services::presences::PresenceService,
    AppState,
};

pub async fn get_presence_sheet(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<PresenceSheetEntry>>, ServiceError> {
    Ok(Json(PresenceService::sheet(&state.db, id).await?))
}

pub async fn mark_presence(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<MarkPresenceRequest>,
) -> Result<Json<Presence>, ServiceError> {
    Ok(Json(PresenceService::mark(&state.db, id, &body).await?))
}
