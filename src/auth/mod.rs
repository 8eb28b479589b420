use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub mod credentials;
mod dto;
pub mod handlers;
pub mod jwt;
pub mod repo;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::register))
        .route("/auth/login", post(handlers::login))
        .route("/auth/refresh", post(handlers::refresh))
        .route("/me", get(handlers::get_me))
}
