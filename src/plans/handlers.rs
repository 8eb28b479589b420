use axum::{extract::State, Json};
use tracing::{info, instrument};

use super::dto::PlanRequest;
use crate::{
    auth::jwt::AuthUser, error::AppResult, scoring::model::GoalPlan, scoring::ScoringError,
    state::AppState,
};

/// The caller's plan, or `null` before one has been saved.
#[instrument(skip(state))]
pub async fn get_plan(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<Option<GoalPlan>>> {
    let plan = state
        .plans
        .get(user_id)
        .await
        .map_err(ScoringError::StoreUnavailable)?;
    Ok(Json(plan))
}

#[instrument(skip(state, body))]
pub async fn save_plan(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<PlanRequest>,
) -> AppResult<Json<GoalPlan>> {
    let plan = state
        .plans
        .upsert(user_id, body.into())
        .await
        .map_err(ScoringError::StoreUnavailable)?;
    info!(%user_id, ?plan, "plan saved");
    Ok(Json(plan))
}
