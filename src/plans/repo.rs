use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::PlanRow;
use crate::{scoring::model::GoalPlan, store::PlanStore};

pub struct PgPlanStore {
    db: PgPool,
}

impl PgPlanStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PlanStore for PgPlanStore {
    async fn get(&self, user_id: Uuid) -> anyhow::Result<Option<GoalPlan>> {
        let row = sqlx::query_as::<_, PlanRow>(
            r#"
            SELECT carbs_goal, lactose_animal_goal, fruits_goal, veggies_goal, good_fats_goal
            FROM plans
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await
        .context("select plan")?;
        Ok(row.map(GoalPlan::from))
    }

    async fn upsert(&self, user_id: Uuid, plan: GoalPlan) -> anyhow::Result<GoalPlan> {
        let cols = PlanRow::from(plan);
        let row = sqlx::query_as::<_, PlanRow>(
            r#"
            INSERT INTO plans (user_id, carbs_goal, lactose_animal_goal, fruits_goal,
                               veggies_goal, good_fats_goal)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id) DO UPDATE
               SET carbs_goal = EXCLUDED.carbs_goal,
                   lactose_animal_goal = EXCLUDED.lactose_animal_goal,
                   fruits_goal = EXCLUDED.fruits_goal,
                   veggies_goal = EXCLUDED.veggies_goal,
                   good_fats_goal = EXCLUDED.good_fats_goal,
                   updated_at = now()
            RETURNING carbs_goal, lactose_animal_goal, fruits_goal, veggies_goal, good_fats_goal
            "#,
        )
        .bind(user_id)
        .bind(cols.carbs_goal)
        .bind(cols.lactose_animal_goal)
        .bind(cols.fruits_goal)
        .bind(cols.veggies_goal)
        .bind(cols.good_fats_goal)
        .fetch_one(&self.db)
        .await
        .context("upsert plan")?;
        Ok(row.into())
    }
}
