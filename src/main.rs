use std::sync::Arc;

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clubdesk_api::{config::Config, db, routes, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let config = Arc::new(config);

    let pool = db::create_pool(&config.database_url).await?;
    db::run_migrations(&pool).await?;
    info!("Database connected and migrations applied");

    let state = AppState {
        db: pool,
        config: config.clone(),
    };

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
        .allow_origin(Any);

    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        // Schools
        .route("/schools", get(routes::schools::list_schools).post(routes::schools::create_school))
        .route(
            "/schools/{id}",
            get(routes::schools::get_school)
                .put(routes::schools::update_school)
                .delete(routes::schools::delete_school),
        )
        .route(
            "/schools/{id}/locations",
            get(routes::schools::list_school_locations).put(routes::schools::set_school_locations),
        )
        .route(
            "/schools/{id}/coaches",
            get(routes::schools::list_school_coaches).put(routes::schools::set_school_coaches),
        )
        // Groups
        .route("/groupes", get(routes::groupes::list_groupes).post(routes::groupes::create_groupe))
        .route(
            "/groupes/{id}",
            get(routes::groupes::get_groupe)
                .put(routes::groupes::update_groupe)
                .delete(routes::groupes::delete_groupe),
        )
        .route(
            "/groupes/{id}/locations",
            get(routes::groupes::list_groupe_locations).put(routes::groupes::set_groupe_locations),
        )
        .route(
            "/groupes/{id}/coaches",
            get(routes::groupes::list_groupe_coaches).put(routes::groupes::set_groupe_coaches),
        )
        .route(
            "/groupes/{id}/adherents",
            get(routes::groupes::list_groupe_adherents).put(routes::groupes::set_groupe_adherents),
        )
        // Locations
        .route(
            "/locations",
            get(routes::locations::list_locations).post(routes::locations::create_location),
        )
        .route(
            "/locations/{id}",
            get(routes::locations::get_location)
                .put(routes::locations::update_location)
                .delete(routes::locations::delete_location),
        )
        .route(
            "/locations/{id}/reservations",
            get(routes::reservations::list_location_reservations),
        )
        // Coaches
        .route("/coaches", get(routes::coaches::list_coaches).post(routes::coaches::create_coach))
        .route(
            "/coaches/{id}",
            get(routes::coaches::get_coach).put(routes::coaches::update_coach),
        )
        // Adherents
        .route(
            "/adherents",
            get(routes::adherents::list_adherents).post(routes::adherents::create_adherent),
        )
        .route(
            "/adherents/{id}",
            get(routes::adherents::get_adherent).put(routes::adherents::update_adherent),
        )
        .route(
            "/adherents/{id}/abonnements",
            get(routes::adherents::list_adherent_abonnements),
        )
        // Abonnements & payments
        .route(
            "/abonnements",
            get(routes::abonnements::list_abonnements).post(routes::abonnements::create_abonnement),
        )
        .route("/abonnements/{id}", get(routes::abonnements::get_abonnement))
        .route("/abonnements/{id}/payments", post(routes::abonnements::record_payment))
        // Reservations & presence sheets
        .route("/reservations", post(routes::reservations::create_reservation))
        .route("/reservations/{id}", get(routes::reservations::get_reservation))
        .route(
            "/reservations/{id}/presences",
            get(routes::presences::get_presence_sheet).put(routes::presences::mark_presence),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("clubdesk API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
