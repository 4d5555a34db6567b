use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use serde::Serialize;
use std::collections::BTreeMap;
use crate::error::ApiError;
use crate::models::{HealthResponse, RootResponse};
use crate::store::FixtureStore;

pub const API_TITLE: &str = "Football Analytics API";
pub const API_VERSION: &str = "1.0.0";

// GET / - Welcome message and API information
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("Welcome to {}", API_TITLE),
        version: API_VERSION.to_string(),
        docs: "/docs".to_string(),
    })
}

// GET /health - Liveness
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

#[derive(Serialize)]
pub struct ReadinessResponse {
    status: String,
    fixtures_dir: String,
    fixtures: BTreeMap<String, bool>,
    timestamp: i64,
}

// GET /ready - Readiness: the fixture directory must exist
pub async fn readiness(
    State(store): State<FixtureStore>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let (dir_ok, fixtures) = store.status().await;

    let (status, label) = if dir_ok {
        (StatusCode::OK, "ready")
    } else {
        tracing::warn!("Fixture directory {} is missing", store.root().display());
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    };

    let response = ReadinessResponse {
        status: label.to_string(),
        fixtures_dir: store.root().display().to_string(),
        fixtures,
        timestamp: chrono::Utc::now().timestamp(),
    };

    (status, Json(response))
}

#[derive(Serialize)]
pub struct EndpointInfo {
    method: &'static str,
    path: &'static str,
    description: &'static str,
}

#[derive(Serialize)]
pub struct DocsResponse {
    title: &'static str,
    version: &'static str,
    endpoints: Vec<EndpointInfo>,
}

const ENDPOINTS: [(&str, &str, &str); 11] = [
    ("GET", "/", "API information"),
    ("GET", "/health", "Liveness check"),
    ("GET", "/ready", "Readiness check and fixture availability"),
    ("GET", "/docs", "This endpoint catalogue"),
    ("GET", "/api/tactical/heatmap", "Heatmap points with x, y and intensity"),
    ("GET", "/api/tactical/pass-network", "Pass counts between pairs of players"),
    ("GET", "/api/tactical/tracking", "Player positions and speed over time"),
    ("GET", "/api/decisions/offside", "Offside events and whether each call was correct"),
    ("GET", "/api/decisions/fouls", "Foul events with severity and call correctness"),
    ("GET", "/api/decisions/goal-prediction", "Expected goals (xG) for a shot"),
    ("POST", "/api/upload-video", "Upload a video (multipart field \"video\")"),
];

// GET /docs - Endpoint catalogue
pub async fn docs() -> Json<DocsResponse> {
    Json(DocsResponse {
        title: API_TITLE,
        version: API_VERSION,
        endpoints: ENDPOINTS
            .iter()
            .map(|&(method, path, description)| EndpointInfo { method, path, description })
            .collect(),
    })
}

// Fallback for unmatched routes
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
