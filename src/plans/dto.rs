use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::scoring::model::GoalPlan;

/// Body of `POST /plan`. Goals arrive from a form, so anything that is not a
/// positive number becomes 0 instead of failing the request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    #[serde(default, deserialize_with = "lenient_goal")]
    pub carbs_goal: u32,
    #[serde(default, deserialize_with = "lenient_goal")]
    pub lactose_animal_goal: u32,
    #[serde(default, deserialize_with = "lenient_goal")]
    pub fruits_goal: u32,
    #[serde(default, deserialize_with = "lenient_goal")]
    pub veggies_goal: u32,
    #[serde(default, deserialize_with = "lenient_goal")]
    pub good_fats_goal: u32,
}

impl From<PlanRequest> for GoalPlan {
    fn from(r: PlanRequest) -> Self {
        Self {
            carbs_goal: r.carbs_goal,
            lactose_animal_goal: r.lactose_animal_goal,
            fruits_goal: r.fruits_goal,
            veggies_goal: r.veggies_goal,
            good_fats_goal: r.good_fats_goal,
        }
    }
}

fn lenient_goal<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_goal(&value))
}

/// Non-negative whole portion count; fractions truncate and the ceiling is
/// what an INTEGER column holds.
pub fn coerce_goal(value: &Value) -> u32 {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match number {
        Some(n) if n.is_finite() && n >= 1.0 => n.trunc().min(f64::from(i32::MAX)) as u32,
        _ => 0,
    }
}
