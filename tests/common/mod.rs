#![allow(dead_code)]

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use uuid::Uuid;

use clubdesk_api::models::{
    abonnement::CreateAbonnementRequest,
    adherent::CreateAdherentRequest,
    coach::CreateCoachRequest,
    groupe::CreateGroupeRequest,
    location::CreateLocationRequest,
    reservation::CreateReservationRequest,
    school::CreateSchoolRequest,
};
use clubdesk_api::services::{
    abonnements::AbonnementService, adherents::AdherentService, coaches::CoachService,
    groupes::GroupeService, locations::LocationService, reservations::ReservationService,
    schools::SchoolService,
};

/// Fresh named shared-cache in-memory database with the schema applied. The
/// name is unique per call so tests never see each other's data; the shared
/// cache makes every pooled connection hit the same database.
pub async fn test_pool() -> SqlitePool {
    let url = format!(
        "sqlite:file:{}?mode=memory&cache=shared",
        Uuid::new_v4().simple()
    );
    let pool = SqlitePoolOptions::new()
        .min_connections(1)
        .max_connections(4)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect(&url)
        .await
        .expect("open in-memory database");
    clubdesk_api::db::run_migrations(&pool)
        .await
        .expect("apply migrations");
    pool
}

pub async fn seed_school(pool: &SqlitePool, name: &str) -> Uuid {
    SchoolService::create(pool, &CreateSchoolRequest { name: name.into() })
        .await
        .expect("create school")
        .id
}

pub async fn seed_groupe(pool: &SqlitePool, name: &str, school_id: Option<Uuid>) -> Uuid {
    GroupeService::create(
        pool,
        &CreateGroupeRequest {
            name: name.into(),
            description: None,
            school_id,
        },
    )
    .await
    .expect("create groupe")
    .id
}

pub async fn seed_location(pool: &SqlitePool, name: &str) -> Uuid {
    LocationService::create(
        pool,
        &CreateLocationRequest {
            name: name.into(),
            price_per_session: Some(2_500),
            session_minutes: Some(90),
            field_count: Some(2),
            status: None,
            kind: None,
            opens_on: None,
            closes_on: None,
        },
    )
    .await
    .expect("create location")
    .id
}

pub async fn seed_coach(pool: &SqlitePool, last_name: &str) -> Uuid {
    CoachService::create(
        pool,
        &CreateCoachRequest {
            first_name: "Test".into(),
            last_name: last_name.into(),
            email: None,
            phone: None,
        },
    )
    .await
    .expect("create coach")
    .id
}

pub async fn seed_adherent(pool: &SqlitePool, last_name: &str) -> Uuid {
    AdherentService::create(
        pool,
        &CreateAdherentRequest {
            first_name: "Test".into(),
            last_name: last_name.into(),
            email: None,
            phone: None,
            birth_date: None,
        },
    )
    .await
    .expect("create adherent")
    .id
}

pub async fn seed_abonnement(pool: &SqlitePool, adherent_id: Uuid, price_due: &str) -> Uuid {
    AbonnementService::create(
        pool,
        &CreateAbonnementRequest {
            adherent_id,
            school_id: None,
            groupe_id: None,
            price_due: price_due.into(),
        },
    )
    .await
    .expect("create abonnement")
    .id
}

pub async fn seed_reservation(pool: &SqlitePool, location_id: Uuid) -> Uuid {
    ReservationService::create(
        pool,
        &CreateReservationRequest {
            location_id,
            day: chrono::NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            time_slot: "18:00-19:30".into(),
            court: Some(1),
            kind: None,
            client_name: None,
        },
    )
    .await
    .expect("create reservation")
    .id
}

pub async fn count(pool: &SqlitePool, table: &str, column: &str, id: Uuid) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table} WHERE {column} = ?1"))
        .bind(id)
        .fetch_one(pool)
        .await
        .expect("count rows")
}
