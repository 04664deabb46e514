use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::ServiceError,
    models::abonnement::{
        AbonnementView, CreateAbonnementRequest, PaymentReceipt, RecordPaymentRequest,
    },
    services::{abonnements::AbonnementService, payments::PaymentService},
    AppState,
};

pub async fn list_abonnements(
    State(state): State<AppState>,
) -> Result<Json<Vec<AbonnementView>>, ServiceError> {
    Ok(Json(AbonnementService::list(&state.db).await?))
}

pub async fn get_abonnement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AbonnementView>, ServiceError> {
    Ok(Json(AbonnementService::get(&state.db, id).await?))
}

pub async fn create_abonnement(
    State(state): State<AppState>,
    Json(body): Json<CreateAbonnementRequest>,
) -> Result<(StatusCode, Json<AbonnementView>), ServiceError> {
    let abonnement = AbonnementService::create(&state.db, &body).await?;
    Ok((StatusCode::CREATED, Json(abonnement)))
}

pub async fn record_payment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<RecordPaymentRequest>,
) -> Result<Json<PaymentReceipt>, ServiceError> {
    Ok(Json(PaymentService::record(&state.db, id, &body).await?))
}
