pub mod dto;
pub mod error;
pub mod extractors;
mod handlers;
pub mod model;
pub mod repo;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::session_routes())
}
