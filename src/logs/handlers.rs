use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use time::OffsetDateTime;
use tracing::{info, instrument};

use super::dto::{DayLogResponse, DayQuery, LogMealRequest, LoggedMealResponse};
use crate::{
    auth::jwt::AuthUser,
    error::{AppError, AppResult},
    scoring::{
        day::parse_day,
        model::{Category, CategoryCounts},
    },
    state::AppState,
};

/// A day's portions (today unless `?day=YYYY-MM-DD`), tallied, with the
/// cached score.
#[instrument(skip(state))]
pub async fn day_log(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(q): Query<DayQuery>,
) -> AppResult<Json<DayLogResponse>> {
    let day = match q.day.as_deref() {
        Some(raw) => parse_day(raw).map_err(|_| AppError::bad_request("day must be YYYY-MM-DD"))?,
        None => state.engine.day_of(OffsetDateTime::now_utc())?,
    };

    let logs = state.engine.events_for_day(user_id, day).await?;
    let score = state.engine.stored_score(user_id, day).await?.unwrap_or(0.0);
    let counts = CategoryCounts::from_events(&logs).to_map();

    Ok(Json(DayLogResponse {
        day,
        logs,
        counts,
        score,
    }))
}

#[instrument(skip(state, body))]
pub async fn log_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<LogMealRequest>,
) -> AppResult<(StatusCode, Json<LoggedMealResponse>)> {
    let raw = body
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::bad_request("Category is required"))?;
    let category: Category = raw.parse().map_err(|e| AppError::bad_request(format!("{e}")))?;
    let logged_at = body.logged_at.unwrap_or_else(OffsetDateTime::now_utc);

    let (log, outcome) = state
        .engine
        .record_meal_event(user_id, category, logged_at)
        .await?;

    info!(%user_id, %category, score = outcome.points(), "meal logged");
    Ok((
        StatusCode::CREATED,
        Json(LoggedMealResponse {
            log,
            score: outcome.points(),
            has_plan: outcome.has_plan(),
        }),
    ))
}
