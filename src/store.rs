use async_trait::async_trait;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::scoring::model::{GoalPlan, MealLogEvent, NewMealLog};

#[async_trait]
pub trait PlanStore: Send + Sync {
    async fn get(&self, user_id: Uuid) -> anyhow::Result<Option<GoalPlan>>;
    async fn upsert(&self, user_id: Uuid, plan: GoalPlan) -> anyhow::Result<GoalPlan>;
}

/// Append-only meal log.
#[async_trait]
pub trait LogStore: Send + Sync {
    async fn append(&self, entry: NewMealLog) -> anyhow::Result<MealLogEvent>;

    /// Events with `start <= logged_at < end`, oldest first.
    async fn query_range(
        &self,
        user_id: Uuid,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> anyhow::Result<Vec<MealLogEvent>>;
}

/// One score per (user, day); `upsert` replaces whatever was there.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    async fn upsert(&self, user_id: Uuid, day: Date, points: f64) -> anyhow::Result<()>;
    async fn get(&self, user_id: Uuid, day: Date) -> anyhow::Result<Option<f64>>;
}
