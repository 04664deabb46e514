use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::ServiceError,
    models::{
        abonnement::AbonnementView,
        adherent::{Adherent, CreateAdherentRequest, UpdateAdherentRequest},
    },
    services::{abonnements::AbonnementService, adherents::AdherentService},
    AppState,
};

pub async fn list_adherents(
    State(state): State<AppState>,
) -> Result<Json<Vec<Adherent>>, ServiceError> {
    Ok(Json(AdherentService::list(&state.db).await?))
}

pub async fn get_adherent(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Adherent>, ServiceError> {
    Ok(Json(AdherentService::get(&state.db, id).await?))
}

pub async fn create_adherent(
    State(state): State<AppState>,
    Json(body): Json<CreateAdherentRequest>,
) -> Result<(StatusCode, Json<Adherent>), ServiceError> {
    let adherent = AdherentService::create(&state.db, &body).await?;
    Ok((StatusCode::CREATED, Json(adherent)))
}

pub async fn update_adherent(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateAdherentRequest>,
) -> Result<Json<Adherent>, ServiceError> {
    Ok(Json(AdherentService::update(&state.db, id, &body).await?))
}

pub async fn list_adherent_abonnements(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<AbonnementView>>, ServiceError> {
    Ok(Json(AbonnementService::list_for_adherent(&state.db, id).await?))
}
