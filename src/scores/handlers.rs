use axum::{
    extract::{Path, State},
    Json,
};
use time::Date;
use tracing::{info, instrument};

use super::dto::{RecomputeResponse, StoredScoreResponse};
use crate::{
    auth::jwt::AuthUser,
    error::{AppError, AppResult},
    scoring::day::parse_day,
    state::AppState,
};

fn day_param(raw: &str) -> AppResult<Date> {
    parse_day(raw).map_err(|_| AppError::bad_request("day must be YYYY-MM-DD"))
}

#[instrument(skip(state))]
pub async fn get_score(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(day): Path<String>,
) -> AppResult<Json<StoredScoreResponse>> {
    let day = day_param(&day)?;
    let points = state.engine.stored_score(user_id, day).await?;
    Ok(Json(StoredScoreResponse { day, points }))
}

#[instrument(skip(state))]
pub async fn recompute_score(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(day): Path<String>,
) -> AppResult<Json<RecomputeResponse>> {
    let day = day_param(&day)?;
    let outcome = state.engine.compute_daily_score(user_id, day).await?;
    info!(%user_id, %day, points = outcome.points(), "score recomputed");
    Ok(Json(RecomputeResponse {
        day,
        points: outcome.points(),
        has_plan: outcome.has_plan(),
    }))
}
