pub mod dto;
pub mod error;
pub mod handlers;
mod prompts;
pub mod schema;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::analysis_routes())
}
