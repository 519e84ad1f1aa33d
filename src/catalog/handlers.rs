use axum::{
    extract::{Path, Query},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{debug, instrument};

use super::dto::{FoodView, SearchQuery};
use super::repo;
use super::services::{search, with_image};
use crate::state::AppState;

pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/foods", get(list_foods))
        .route("/foods/:id", get(get_food))
}

#[instrument]
pub async fn list_foods(Query(p): Query<SearchQuery>) -> Json<Vec<FoodView>> {
    let hits = search(repo::all(), p.q.as_deref().unwrap_or(""));
    debug!(count = hits.len(), "catalog search");
    Json(hits.into_iter().map(with_image).collect())
}

#[instrument]
pub async fn get_food(Path(id): Path<String>) -> Result<Json<FoodView>, (StatusCode, String)> {
    repo::find_by_id(&id)
        .map(|f| Json(with_image(f)))
        .ok_or((StatusCode::NOT_FOUND, "Food not found".into()))
}
