use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use super::repo_types::MealLogRow;
use crate::{
    scoring::model::{MealLogEvent, NewMealLog},
    store::LogStore,
};

pub struct PgLogStore {
    db: PgPool,
}

impl PgLogStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LogStore for PgLogStore {
    async fn append(&self, entry: NewMealLog) -> anyhow::Result<MealLogEvent> {
        let row = sqlx::query_as::<_, MealLogRow>(
            r#"
            INSERT INTO meal_logs (id, user_id, category, logged_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, category, logged_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(entry.user_id)
        .bind(entry.category.as_str())
        .bind(entry.logged_at)
        .fetch_one(&self.db)
        .await
        .context("insert meal log")?;
        Ok(MealLogEvent::try_from(row)?)
    }

    async fn query_range(
        &self,
        user_id: Uuid,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> anyhow::Result<Vec<MealLogEvent>> {
        let rows = sqlx::query_as::<_, MealLogRow>(
            r#"
            SELECT id, user_id, category, logged_at
              FROM meal_logs
             WHERE user_id = $1
               AND logged_at >= $2
               AND logged_at < $3
             ORDER BY logged_at ASC, created_at ASC
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.db)
        .await
        .context("select meal logs for range")?;

        let events = rows
            .into_iter()
            .map(MealLogEvent::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(events)
    }
}
