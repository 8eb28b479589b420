use axum::{
    extract::{FromRef, State},
    Json,
};
use tracing::{info, instrument, warn};

use super::{
    credentials::{hash_password, normalize_email, verify_password, MIN_PASSWORD_LEN},
    dto::{AuthResponse, LoginRequest, PublicUser, RefreshRequest, RegisterRequest},
    jwt::{AuthUser, JwtKeys},
    repo::User,
};
use crate::{
    error::{AppError, AppResult},
    state::AppState,
};

fn issue_tokens(state: &AppState, user: User) -> AppResult<Json<AuthResponse>> {
    let keys = JwtKeys::from_ref(state);
    Ok(Json(AuthResponse {
        access_token: keys.sign_access(user.id)?,
        refresh_token: keys.sign_refresh(user.id)?,
        user: PublicUser {
            id: user.id,
            email: user.email,
        },
    }))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<Json<AuthResponse>> {
    let Some(email) = normalize_email(&payload.email) else {
        warn!(email = %payload.email, "invalid email");
        return Err(AppError::bad_request("Invalid email"));
    };

    if payload.password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::bad_request("Password too short"));
    }

    let hash = hash_password(&payload.password)?;
    let Some(user) = User::create(&state.db, &email, &hash).await? else {
        warn!(%email, "email already registered");
        return Err(AppError::Conflict("Email already registered".into()));
    };

    info!(user_id = %user.id, "user registered");
    issue_tokens(&state, user)
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let invalid = || AppError::unauthorized("Invalid credentials");

    let email = normalize_email(&payload.email)
        .ok_or_else(|| AppError::bad_request("Invalid email"))?;

    let Some(user) = User::find_by_email(&state.db, &email).await? else {
        warn!(%email, "login unknown email");
        return Err(invalid());
    };

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(user_id = %user.id, "login invalid password");
        return Err(invalid());
    }

    info!(user_id = %user.id, "user logged in");
    issue_tokens(&state, user)
}

#[instrument(skip(state, payload))]
pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    let claims = JwtKeys::from_ref(&state)
        .verify_refresh(&payload.refresh_token)
        .map_err(|e| AppError::unauthorized(e.to_string()))?;

    let user = User::find_by_id(&state.db, claims.sub)
        .await?
        .ok_or_else(|| AppError::unauthorized("User not found"))?;

    issue_tokens(&state, user)
}

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<PublicUser>> {
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::unauthorized("User not found"))?;

    Ok(Json(PublicUser {
        id: user.id,
        email: user.email,
    }))
}
