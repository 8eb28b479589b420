use std::sync::Arc;

use time::{Date, OffsetDateTime, UtcOffset};
use tracing::{debug, instrument};
use uuid::Uuid;

use super::{
    day::{day_of, DayWindow},
    locks::DayLocks,
    model::{Category, CategoryCounts, MealLogEvent, NewMealLog, UnknownCategory},
    points::score_day,
    ScoringError,
};
use crate::store::{LogStore, PlanStore, ScoreStore};

/// Result of a daily scoring pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreOutcome {
    Scored(f64),
    /// The user has no plan; nothing was written.
    NoPlan,
}

impl ScoreOutcome {
    pub fn points(self) -> f64 {
        match self {
            ScoreOutcome::Scored(points) => points,
            ScoreOutcome::NoPlan => 0.0,
        }
    }

    pub fn has_plan(self) -> bool {
        matches!(self, ScoreOutcome::Scored(_))
    }
}

pub struct ScoringEngine {
    plans: Arc<dyn PlanStore>,
    logs: Arc<dyn LogStore>,
    scores: Arc<dyn ScoreStore>,
    day_offset: UtcOffset,
    locks: DayLocks,
}

impl ScoringEngine {
    pub fn new(
        plans: Arc<dyn PlanStore>,
        logs: Arc<dyn LogStore>,
        scores: Arc<dyn ScoreStore>,
        day_offset: UtcOffset,
    ) -> Self {
        Self {
            plans,
            logs,
            scores,
            day_offset,
            locks: DayLocks::default(),
        }
    }

    pub fn day_of(&self, instant: OffsetDateTime) -> Result<Date, ScoringError> {
        day_of(instant, self.day_offset).ok_or(ScoringError::DayOutOfRange)
    }

    pub fn day_window(&self, day: Date) -> Result<DayWindow, ScoringError> {
        DayWindow::new(day, self.day_offset).ok_or(ScoringError::DayOutOfRange)
    }

    /// Events of one local day, oldest first.
    pub async fn events_for_day(
        &self,
        user_id: Uuid,
        day: Date,
    ) -> Result<Vec<MealLogEvent>, ScoringError> {
        let window = self.day_window(day)?;
        let events = self
            .logs
            .query_range(user_id, window.start, window.end)
            .await
            .map_err(classify)?;
        debug_assert!(events.iter().all(|e| window.contains(e.logged_at)));
        Ok(events)
    }

    /// Recomputes and stores the score of `day` from the current plan and log.
    /// Safe to call any number of times.
    #[instrument(skip(self))]
    pub async fn compute_daily_score(
        &self,
        user_id: Uuid,
        day: Date,
    ) -> Result<ScoreOutcome, ScoringError> {
        self.day_window(day)?;
        let _slot = self.locks.acquire(user_id, day).await;

        let Some(plan) = self.plans.get(user_id).await.map_err(classify)? else {
            debug!(%user_id, %day, "no plan; score not stored");
            return Ok(ScoreOutcome::NoPlan);
        };

        let events = self.events_for_day(user_id, day).await?;
        let counts = CategoryCounts::from_events(&events);
        let points = score_day(&plan, &counts);

        self.scores
            .upsert(user_id, day, points)
            .await
            .map_err(classify)?;

        debug!(%user_id, %day, events = events.len(), points, "daily score stored");
        Ok(ScoreOutcome::Scored(points))
    }

    /// Appends one portion and brings the cached score of its day up to date.
    /// An instant whose day cannot be scored is rejected before anything is
    /// written.
    #[instrument(skip(self))]
    pub async fn record_meal_event(
        &self,
        user_id: Uuid,
        category: Category,
        logged_at: OffsetDateTime,
    ) -> Result<(MealLogEvent, ScoreOutcome), ScoringError> {
        let day = self.day_of(logged_at)?;
        self.day_window(day)?;

        let event = self
            .logs
            .append(NewMealLog {
                user_id,
                category,
                logged_at,
            })
            .await
            .map_err(classify)?;

        let outcome = self.compute_daily_score(user_id, day).await?;
        Ok((event, outcome))
    }

    pub async fn stored_score(&self, user_id: Uuid, day: Date) -> Result<Option<f64>, ScoringError> {
        self.scores.get(user_id, day).await.map_err(classify)
    }
}

fn classify(err: anyhow::Error) -> ScoringError {
    match err.downcast::<UnknownCategory>() {
        Ok(UnknownCategory(raw)) => ScoringError::InvalidCategory(raw),
        Err(err) => ScoringError::StoreUnavailable(err),
    }
}
