mod dto;
pub mod handlers;
pub mod repo;
mod repo_types;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/plan", get(handlers::get_plan).post(handlers::save_plan))
}
