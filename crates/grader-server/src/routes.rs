use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use grader_core::{GradingRequest, RewardBreakdown};
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::server::AppState;

#[derive(Debug, Serialize)]
pub struct GradeResponse {
    pub reward: f64,
}

#[derive(Debug, Serialize)]
pub struct BreakdownResponse {
    pub reward: f64,
    pub components: RewardBreakdown,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[tracing::instrument(level = "debug", skip_all)]
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/grade", post(grade))
        .route("/grade/breakdown", post(grade_breakdown))
        .route("/health", get(health))
}

/// Body goes through schema validation before deserialization so clients
/// see every violation at once.
fn parse_request(body: Value) -> Result<GradingRequest, ApiError> {
    Ok(GradingRequest::from_json_value(body)?)
}

#[tracing::instrument(level = "info", skip_all)]
pub async fn grade(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<GradeResponse>, ApiError> {
    let request = parse_request(body)?;
    let reward = state.composer.reward(&request);
    Ok(Json(GradeResponse { reward }))
}

#[tracing::instrument(level = "info", skip_all)]
pub async fn grade_breakdown(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<BreakdownResponse>, ApiError> {
    let request = parse_request(body)?;
    let components = state.composer.breakdown(&request);
    Ok(Json(BreakdownResponse {
        reward: components.total(),
        components,
    }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
