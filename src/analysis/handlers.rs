use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::{error, instrument, warn};

use super::dto::{
    HealthInsightRequest, HealthInsightResult, NutrientAnalysisRequest, NutrientAnalysisResult,
};
use super::error::AnalysisError;
use super::services::{analyze_food_nutrients, generate_health_insight};
use crate::state::AppState;

pub const ANALYSIS_FAILED: &str =
    "Could not retrieve nutritional information. Please try again.";

pub fn analysis_routes() -> Router<AppState> {
    Router::new()
        .route("/analysis", post(analyze))
        .route("/analysis/insight", post(insight))
}

#[instrument(skip(state, payload))]
pub async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<NutrientAnalysisRequest>,
) -> Result<Json<NutrientAnalysisResult>, (StatusCode, String)> {
    analyze_food_nutrients(&state, &payload)
        .await
        .map(Json)
        .map_err(reject)
}

#[instrument(skip(state, payload))]
pub async fn insight(
    State(state): State<AppState>,
    Json(payload): Json<HealthInsightRequest>,
) -> Result<Json<HealthInsightResult>, (StatusCode, String)> {
    generate_health_insight(&state, &payload)
        .await
        .map(Json)
        .map_err(reject)
}

/// Maps an analysis failure onto the HTTP edge; upstream details stay in the logs.
pub(crate) fn reject(e: AnalysisError) -> (StatusCode, String) {
    if e.is_upstream() {
        error!(error = %e, "analysis failed");
        return (StatusCode::BAD_GATEWAY, ANALYSIS_FAILED.into());
    }
    warn!(error = %e, "invalid analysis input");
    (StatusCode::BAD_REQUEST, e.to_string())
}
