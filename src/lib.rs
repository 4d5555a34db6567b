//! HTTP API serving pre-computed football match analytics from JSON fixtures.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;

use config::Config;
use store::FixtureStore;

/// Build the full application router for `config`.
pub fn app(config: &Config) -> Router {
    let store = FixtureStore::new(config.fixtures_dir.clone());

    // CORS configuration for the web frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let tactical = Router::new()
        .route("/heatmap", get(routes::tactical::get_heatmap))
        .route("/pass-network", get(routes::tactical::get_pass_network))
        .route("/tracking", get(routes::tactical::get_tracking));

    let decisions = Router::new()
        .route("/offside", get(routes::decisions::get_offside))
        .route("/fouls", get(routes::decisions::get_fouls))
        .route("/goal-prediction", get(routes::decisions::get_goal_prediction));

    Router::new()
        // Root, health and docs
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::health_check))
        .route("/ready", get(routes::health::readiness))
        .route("/docs", get(routes::health::docs))

        // Data endpoints
        .nest("/api/tactical", tactical)
        .nest("/api/decisions", decisions)

        // Upload
        .route(
            "/api/upload-video",
            post(routes::upload::upload_video)
                .layer(DefaultBodyLimit::max(config.max_upload_bytes)),
        )

        .fallback(routes::health::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(store)
}
