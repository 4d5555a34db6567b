use axum::{
    extract::State,
    response::Json,
};
use serde_json::Value;
use crate::error::ApiError;
use crate::store::FixtureStore;

// GET /api/decisions/offside - Offside events and whether each call was correct
pub async fn get_offside(
    State(store): State<FixtureStore>,
) -> Result<Json<Value>, ApiError> {
    let events = store.offside().await?;
    Ok(Json(events))
}

// GET /api/decisions/fouls - Foul events with severity and call correctness
pub async fn get_fouls(
    State(store): State<FixtureStore>,
) -> Result<Json<Value>, ApiError> {
    let fouls = store.fouls().await?;
    Ok(Json(fouls))
}

// GET /api/decisions/goal-prediction - Expected goals (xG) for a shot
pub async fn get_goal_prediction(
    State(store): State<FixtureStore>,
) -> Result<Json<Value>, ApiError> {
    let prediction = store.goal_prediction().await?;
    Ok(Json(prediction))
}
