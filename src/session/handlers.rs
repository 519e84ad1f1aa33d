use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, post, put},
    Json, Router,
};
use tracing::{instrument, warn};

use super::dto::{ChangeQuantityRequest, CreatedSessionResponse, SelectFoodRequest, SessionView};
use super::error::SessionError;
use super::extractors::{SessionId, SESSION_HEADER};
use super::services;
use crate::analysis::dto::NutrientAnalysisResult;
use crate::intake::dto::{DailyIntakeView, DailyLogEntry};
use crate::state::AppState;

pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/sessions", post(create_session))
        .route("/session", get(get_session).delete(end_session))
        .route("/session/selection", put(select_food))
        .route("/session/quantity", put(change_quantity))
        .route("/session/analyze", post(analyze))
        .route("/session/intake", get(get_intake).post(add_to_intake))
        .route("/session/intake/:id", delete(remove_from_intake))
}

fn rejected(e: SessionError) -> (StatusCode, String) {
    if !matches!(e, SessionError::Analysis(_)) {
        warn!(error = %e, "session request rejected");
    }
    e.into_rejection()
}

#[instrument(skip(state))]
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, HeaderMap, Json<CreatedSessionResponse>), (StatusCode, String)> {
    let session = services::create_session(&state).await.map_err(rejected)?;

    let mut headers = HeaderMap::new();
    if let Ok(v) = session.id.to_string().parse() {
        headers.insert(SESSION_HEADER, v);
    }

    Ok((
        StatusCode::CREATED,
        headers,
        Json(CreatedSessionResponse {
            id: session.id,
            created_at: session.created_at,
        }),
    ))
}

#[instrument(skip(state))]
pub async fn get_session(
    State(state): State<AppState>,
    SessionId(id): SessionId,
) -> Result<Json<SessionView>, (StatusCode, String)> {
    let session = services::get_session(&state, id).await.map_err(rejected)?;
    Ok(Json(SessionView::from(&session)))
}

#[instrument(skip(state))]
pub async fn end_session(
    State(state): State<AppState>,
    SessionId(id): SessionId,
) -> Result<StatusCode, (StatusCode, String)> {
    services::end_session(&state, id).await.map_err(rejected)?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state))]
pub async fn select_food(
    State(state): State<AppState>,
    SessionId(id): SessionId,
    Json(payload): Json<SelectFoodRequest>,
) -> Result<Json<SessionView>, (StatusCode, String)> {
    let session = services::select_food(&state, id, &payload.food_id)
        .await
        .map_err(rejected)?;
    Ok(Json(SessionView::from(&session)))
}

#[instrument(skip(state))]
pub async fn change_quantity(
    State(state): State<AppState>,
    SessionId(id): SessionId,
    Json(payload): Json<ChangeQuantityRequest>,
) -> Result<Json<SessionView>, (StatusCode, String)> {
    let session = services::change_quantity(&state, id, &payload.quantity)
        .await
        .map_err(rejected)?;
    Ok(Json(SessionView::from(&session)))
}

#[instrument(skip(state))]
pub async fn analyze(
    State(state): State<AppState>,
    SessionId(id): SessionId,
) -> Result<Json<NutrientAnalysisResult>, (StatusCode, String)> {
    services::analyze_selection(&state, id)
        .await
        .map(Json)
        .map_err(rejected)
}

#[instrument(skip(state))]
pub async fn get_intake(
    State(state): State<AppState>,
    SessionId(id): SessionId,
) -> Result<Json<DailyIntakeView>, (StatusCode, String)> {
    services::daily_intake(&state, id)
        .await
        .map(Json)
        .map_err(rejected)
}

#[instrument(skip(state))]
pub async fn add_to_intake(
    State(state): State<AppState>,
    SessionId(id): SessionId,
) -> Result<(StatusCode, Json<DailyLogEntry>), (StatusCode, String)> {
    let entry = services::add_to_intake(&state, id)
        .await
        .map_err(rejected)?;
    Ok((StatusCode::CREATED, Json(entry)))
}

#[instrument(skip(state))]
pub async fn remove_from_intake(
    State(state): State<AppState>,
    SessionId(id): SessionId,
    Path(entry_id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    services::remove_from_intake(&state, id, &entry_id)
        .await
        .map_err(rejected)?;
    Ok(StatusCode::NO_CONTENT)
}
