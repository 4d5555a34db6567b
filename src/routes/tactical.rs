use axum::{
    extract::State,
    response::Json,
};
use serde_json::Value;
use crate::error::ApiError;
use crate::store::FixtureStore;

// GET /api/tactical/heatmap - Where players spent their time on the pitch
pub async fn get_heatmap(
    State(store): State<FixtureStore>,
) -> Result<Json<Value>, ApiError> {
    let heatmap = store.heatmap().await?;
    Ok(Json(heatmap))
}

// GET /api/tactical/pass-network - Pass counts between pairs of players
pub async fn get_pass_network(
    State(store): State<FixtureStore>,
) -> Result<Json<Value>, ApiError> {
    let network = store.pass_network().await?;
    Ok(Json(network))
}

// GET /api/tactical/tracking - Player positions and speed over time
pub async fn get_tracking(
    State(store): State<FixtureStore>,
) -> Result<Json<Value>, ApiError> {
    let tracking = store.tracking().await?;
    Ok(Json(tracking))
}
