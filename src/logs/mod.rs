mod dto;
pub mod handlers;
pub mod repo;
mod repo_types;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/log", get(handlers::day_log).post(handlers::log_meal))
}
