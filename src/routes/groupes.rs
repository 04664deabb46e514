use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    error::ServiceError,
    models::{
        adherent::Adherent,
        coach::Coach,
        groupe::{CreateGroupeRequest, Groupe, UpdateGroupeRequest},
        location::Location,
    },
    services::{
        associations::{AssociationKind, AssociationService},
        cascade::CascadeService,
        groupes::GroupeService,
    },
    AppState,
};

#[derive(Deserialize)]
pub struct SetLocationsRequest {
    pub location_ids: Vec<Uuid>,
}

#[derive(Deserialize)]
pub struct SetCoachesRequest {
    pub coach_ids: Vec<Uuid>,
}

#[derive(Deserialize)]
pub struct SetAdherentsRequest {
    pub adherent_ids: Vec<Uuid>,
}

pub async fn list_groupes(State(state): State<AppState>) -> Result<Json<Vec<Groupe>>, ServiceError> {
    Ok(Json(GroupeService::list(&state.db).await?))
}

pub async fn get_groupe(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Groupe>, ServiceError> {
    Ok(Json(GroupeService::get(&state.db, id).await?))
}

pub async fn create_groupe(
    State(state): State<AppState>,
    Json(body): Json<CreateGroupeRequest>,
) -> Result<(StatusCode, Json<Groupe>), ServiceError> {
    let groupe = GroupeService::create(&state.db, &body).await?;
    Ok((StatusCode::CREATED, Json(groupe)))
}

pub async fn update_groupe(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateGroupeRequest>,
) -> Result<Json<Groupe>, ServiceError> {
    Ok(Json(GroupeService::update(&state.db, id, &body).await?))
}

pub async fn delete_groupe(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServiceError> {
    CascadeService::delete_group(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_groupe_locations(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Location>>, ServiceError> {
    Ok(Json(GroupeService::locations(&state.db, id).await?))
}

pub async fn set_groupe_locations(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<SetLocationsRequest>,
) -> Result<StatusCode, ServiceError> {
    AssociationService::replace(&state.db, AssociationKind::GroupLocation, id, &body.location_ids)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_groupe_coaches(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Coach>>, ServiceError> {
    Ok(Json(GroupeService::coaches(&state.db, id).await?))
}

pub async fn set_groupe_coaches(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<SetCoachesRequest>,
) -> Result<StatusCode, ServiceError> {
    AssociationService::replace(&state.db, AssociationKind::GroupCoach, id, &body.coach_ids)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_groupe_adherents(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Adherent>>, ServiceError> {
    Ok(Json(GroupeService::adherents(&state.db, id).await?))
}

pub async fn set_groupe_adherents(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<SetAdherentsRequest>,
) -> Result<StatusCode, ServiceError> {
    AssociationService::replace(&state.db, AssociationKind::GroupAdherent, id, &body.adherent_ids)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
