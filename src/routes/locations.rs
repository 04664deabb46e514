use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::ServiceError,
    models::location::{CreateLocationRequest, Location, UpdateLocationRequest},
    services::{cascade::CascadeService, locations::LocationService},
    AppState,
};

pub async fn list_locations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Location>>, ServiceError> {
    Ok(Json(LocationService::list(&state.db).await?))
}

pub async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Location>, ServiceError> {
    Ok(Json(LocationService::get(&state.db, id).await?))
}

pub async fn create_location(
    State(state): State<AppState>,
    Json(body): Json<CreateLocationRequest>,
) -> Result<(StatusCode, Json<Location>), ServiceError> {
    let location = LocationService::create(&state.db, &body).await?;
    Ok((StatusCode::CREATED, Json(location)))
}

pub async fn update_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateLocationRequest>,
) -> Result<Json<Location>, ServiceError> {
    Ok(Json(LocationService::update(&state.db, id, &body).await?))
}

pub async fn delete_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServiceError> {
    CascadeService::delete_location(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
