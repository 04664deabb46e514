use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::ServiceError,
    models::reservation::{CreateReservationRequest, Reservation},
    services::reservations::ReservationService,
    AppState,
};

pub async fn list_location_reservations(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Reservation>>, ServiceError> {
    Ok(Json(ReservationService::list_for_location(&state.db, id).await?))
}

pub async fn get_reservation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Reservation>, ServiceError> {
    Ok(Json(ReservationService::get(&state.db, id).await?))
}

pub async fn create_reservation(
    State(state): State<AppState>,
    Json(body): Json<CreateReservationRequest>,
) -> Result<(StatusCode, Json<Reservation>), ServiceError> {
    let reservation = ReservationService::create(&state.db, &body).await?;
    Ok((StatusCode::CREATED, Json(reservation)))
}
