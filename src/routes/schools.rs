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
        coach::Coach,
        location::Location,
        school::{CreateSchoolRequest, School, UpdateSchoolRequest},
    },
    services::{
        associations::{AssociationKind, AssociationService},
        cascade::CascadeService,
        schools::SchoolService,
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

pub async fn list_schools(State(state): State<AppState>) -> Result<Json<Vec<School>>, ServiceError> {
    Ok(Json(SchoolService::list(&state.db).await?))
}

pub async fn get_school(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<School>, ServiceError> {
    Ok(Json(SchoolService::get(&state.db, id).await?))
}

pub async fn create_school(
    State(state): State<AppState>,
    Json(body): Json<CreateSchoolRequest>,
) -> Result<(StatusCode, Json<School>), ServiceError> {
    let school = SchoolService::create(&state.db, &body).await?;
    Ok((StatusCode::CREATED, Json(school)))
}

pub async fn update_school(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateSchoolRequest>,
) -> Result<Json<School>, ServiceError> {
    Ok(Json(SchoolService::update(&state.db, id, &body).await?))
}

pub async fn delete_school(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServiceError> {
    CascadeService::delete_school(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_school_locations(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Location>>, ServiceError> {
    Ok(Json(SchoolService::locations(&state.db, id).await?))
}

pub async fn set_school_locations(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<SetLocationsRequest>,
) -> Result<StatusCode, ServiceError> {
    AssociationService::replace(&state.db, AssociationKind::SchoolLocation, id, &body.location_ids)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_school_coaches(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Coach>>, ServiceError> {
    Ok(Json(SchoolService::coaches(&state.db, id).await?))
}

pub async fn set_school_coaches(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<SetCoachesRequest>,
) -> Result<StatusCode, ServiceError> {
    AssociationService::replace(&state.db, AssociationKind::SchoolCoach, id, &body.coach_ids)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
