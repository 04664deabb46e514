use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::ServiceError,
    models::coach::{Coach, CreateCoachRequest, UpdateCoachRequest},
    services::coaches::CoachService,
    AppState,
};

pub async fn list_coaches(State(state): State<AppState>) -> Result<Json<Vec<Coach>>, ServiceError> {
    Ok(Json(CoachService::list(&state.db).await?))
}

pub async fn get_coach(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Coach>, ServiceError> {
    Ok(Json(CoachService::get(&state.db, id).await?))
}

pub async fn create_coach(
    State(state): State<AppState>,
    Json(body): Json<CreateCoachRequest>,
) -> Result<(StatusCode, Json<Coach>), ServiceError> {
    let coach = CoachService::create(&state.db, &body).await?;
    Ok((StatusCode::CREATED, Json(coach)))
}

pub async fn update_coach(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateCoachRequest>,
) -> Result<Json<Coach>, ServiceError> {
    Ok(Json(CoachService::update(&state.db, id, &body).await?))
}
