mod common;

use uuid::Uuid;

use clubdesk_api::error::ServiceError;
use clubdesk_api::models::presence::MarkPresenceRequest;
use clubdesk_api::services::{
    associations::{AssociationKind, AssociationService},
    cascade::CascadeService,
    groupes::GroupeService,
    locations::LocationService,
    presences::PresenceService,
    schools::SchoolService,
};

use common::*;

#[tokio::test]
async fn delete_group_leaves_no_dependent_rows() {
    let pool = test_pool().await;
    let school = seed_school(&pool, "Nord").await;
    let groupe = seed_groupe(&pool, "U16", Some(school)).await;
    let location = seed_location(&pool, "Court A").await;
    let coach = seed_coach(&pool, "Durand").await;
    let adherent = seed_adherent(&pool, "Petit").await;

    AssociationService::replace(&pool, AssociationKind::GroupLocation, groupe, &[location])
        .await
        .unwrap();
    AssociationService::replace(&pool, AssociationKind::GroupCoach, groupe, &[coach])
        .await
        .unwrap();
    AssociationService::replace(&pool, AssociationKind::GroupAdherent, groupe, &[adherent])
        .await
        .unwrap();

    let reservation = seed_reservation(&pool, location).await;
    PresenceService::mark(
        &pool,
        reservation,
        &MarkPresenceRequest {
            adherent_id: adherent,
            groupe_id: Some(groupe),
            present: true,
        },
    )
    .await
    .unwrap();

    CascadeService::delete_group(&pool, groupe).await.unwrap();

    let err = GroupeService::get(&pool, groupe).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { entity: "groupe", .. }));

    assert_eq!(count(&pool, "groupe_locations", "groupe_id", groupe).await, 0);
    assert_eq!(count(&pool, "groupe_coaches", "groupe_id", groupe).await, 0);
    assert_eq!(count(&pool, "groupe_adherents", "groupe_id", groupe).await, 0);
    assert_eq!(count(&pool, "presences", "groupe_id", groupe).await, 0);
    assert_eq!(count(&pool, "presences", "reservation_id", reservation).await, 0);
    assert_eq!(count(&pool, "reservations", "location_id", location).await, 0);

    // The location itself is associated, not owned: it survives, as do the
    // coach and adherent rows.
    assert!(LocationService::get(&pool, location).await.is_ok());
    assert_eq!(count(&pool, "coaches", "id", coach).await, 1);
    assert_eq!(count(&pool, "adherents", "id", adherent).await, 1);
}

#[tokio::test]
async fn delete_group_not_found_changes_nothing() {
    let pool = test_pool().await;
    let groupe = seed_groupe(&pool, "U16", None).await;
    let location = seed_location(&pool, "Court A").await;
    AssociationService::replace(&pool, AssociationKind::GroupLocation, groupe, &[location])
        .await
        .unwrap();
    let reservation = seed_reservation(&pool, location).await;

    let err = CascadeService::delete_group(&pool, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { entity: "groupe", .. }));

    assert_eq!(count(&pool, "groupes", "id", groupe).await, 1);
    assert_eq!(count(&pool, "groupe_locations", "groupe_id", groupe).await, 1);
    assert_eq!(count(&pool, "reservations", "id", reservation).await, 1);
}

#[tokio::test]
async fn delete_school_removes_associations_only() {
    let pool = test_pool().await;
    let school = seed_school(&pool, "Sud").await;
    let location = seed_location(&pool, "Court B").await;
    let coach = seed_coach(&pool, "Martin").await;

    AssociationService::replace(&pool, AssociationKind::SchoolLocation, school, &[location])
        .await
        .unwrap();
    AssociationService::replace(&pool, AssociationKind::SchoolCoach, school, &[coach])
        .await
        .unwrap();
    let reservation = seed_reservation(&pool, location).await;

    CascadeService::delete_school(&pool, school).await.unwrap();

    let err = SchoolService::get(&pool, school).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { entity: "school", .. }));
    assert_eq!(count(&pool, "school_locations", "school_id", school).await, 0);
    assert_eq!(count(&pool, "school_coaches", "school_id", school).await, 0);

    // Schools do not own reservations: no deeper cascade.
    assert_eq!(count(&pool, "reservations", "id", reservation).await, 1);
    assert!(LocationService::get(&pool, location).await.is_ok());
}

#[tokio::test]
async fn delete_location_cascades_into_reservations_but_not_associations() {
    let pool = test_pool().await;
    let school = seed_school(&pool, "Nord").await;
    let location = seed_location(&pool, "Court C").await;
    let adherent = seed_adherent(&pool, "Moreau").await;

    AssociationService::replace(&pool, AssociationKind::SchoolLocation, school, &[location])
        .await
        .unwrap();
    let reservation = seed_reservation(&pool, location).await;
    PresenceService::mark(
        &pool,
        reservation,
        &MarkPresenceRequest {
            adherent_id: adherent,
            groupe_id: None,
            present: false,
        },
    )
    .await
    .unwrap();

    CascadeService::delete_location(&pool, location).await.unwrap();

    let err = LocationService::get(&pool, location).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { entity: "location", .. }));
    assert_eq!(count(&pool, "reservations", "location_id", location).await, 0);
    assert_eq!(count(&pool, "presences", "reservation_id", reservation).await, 0);

    // Association rows pointing at the deleted location are deliberately left
    // behind; owners clean them up with a fresh replace.
    assert_eq!(count(&pool, "school_locations", "location_id", location).await, 1);
}

#[tokio::test]
async fn delete_location_not_found() {
    let pool = test_pool().await;
    let err = CascadeService::delete_location(&pool, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { entity: "location", .. }));
}
