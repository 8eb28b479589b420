mod dto;
pub mod handlers;
pub mod repo;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/scores/:day", get(handlers::get_score))
        .route("/scores/:day/recompute", post(handlers::recompute_score))
}
