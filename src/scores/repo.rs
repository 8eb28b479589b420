use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use time::Date;
use uuid::Uuid;

use crate::store::ScoreStore;

pub struct PgScoreStore {
    db: PgPool,
}

impl PgScoreStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ScoreStore for PgScoreStore {
    async fn upsert(&self, user_id: Uuid, day: Date, points: f64) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO daily_scores (user_id, day, points)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, day) DO UPDATE
               SET points = EXCLUDED.points,
                   updated_at = now()
            "#,
        )
        .bind(user_id)
        .bind(day)
        .bind(points)
        .execute(&self.db)
        .await
        .context("upsert daily score")?;
        Ok(())
    }

    async fn get(&self, user_id: Uuid, day: Date) -> anyhow::Result<Option<f64>> {
        let points = sqlx::query_scalar::<_, f64>(
            r#"
            SELECT points
              FROM daily_scores
             WHERE user_id = $1 AND day = $2
            "#,
        )
        .bind(user_id)
        .bind(day)
        .fetch_optional(&self.db)
        .await
        .context("select daily score")?;
        Ok(points)
    }
}
