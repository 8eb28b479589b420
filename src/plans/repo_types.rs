use sqlx::FromRow;

use crate::scoring::model::GoalPlan;

#[derive(Debug, FromRow)]
pub struct PlanRow {
    pub carbs_goal: i32,
    pub lactose_animal_goal: i32,
    pub fruits_goal: i32,
    pub veggies_goal: i32,
    pub good_fats_goal: i32,
}

fn non_negative(goal: i32) -> u32 {
    u32::try_from(goal).unwrap_or(0)
}

fn to_column(goal: u32) -> i32 {
    i32::try_from(goal).unwrap_or(i32::MAX)
}

impl From<PlanRow> for GoalPlan {
    fn from(r: PlanRow) -> Self {
        Self {
            carbs_goal: non_negative(r.carbs_goal),
            lactose_animal_goal: non_negative(r.lactose_animal_goal),
            fruits_goal: non_negative(r.fruits_goal),
            veggies_goal: non_negative(r.veggies_goal),
            good_fats_goal: non_negative(r.good_fats_goal),
        }
    }
}

impl From<GoalPlan> for PlanRow {
    fn from(p: GoalPlan) -> Self {
        Self {
            carbs_goal: to_column(p.carbs_goal),
            lactose_animal_goal: to_column(p.lactose_animal_goal),
            fruits_goal: to_column(p.fruits_goal),
            veggies_goal: to_column(p.veggies_goal),
            good_fats_goal: to_column(p.good_fats_goal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_columns_read_back_as_zero() {
        let row = PlanRow {
            carbs_goal: -2,
            lactose_animal_goal: 1,
            fruits_goal: 0,
            veggies_goal: 5,
            good_fats_goal: i32::MIN,
        };
        let plan = GoalPlan::from(row);
        assert_eq!(plan.carbs_goal, 0);
        assert_eq!(plan.lactose_animal_goal, 1);
        assert_eq!(plan.veggies_goal, 5);
        assert_eq!(plan.good_fats_goal, 0);
    }

    #[test]
    fn oversized_goals_saturate_the_column() {
        let row = PlanRow::from(GoalPlan {
            carbs_goal: u32::MAX,
            ..GoalPlan::default()
        });
        assert_eq!(row.carbs_goal, i32::MAX);
        assert_eq!(row.fruits_goal, 0);
    }
}
