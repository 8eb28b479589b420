use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::scoring::{
    day::iso_day,
    model::{Category, MealLogEvent},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogMealRequest {
    /// Raw category name; parsed in the handler so unknown names get a 400.
    pub category: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub logged_at: Option<OffsetDateTime>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedMealResponse {
    pub log: MealLogEvent,
    pub score: f64,
    pub has_plan: bool,
}

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub day: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DayLogResponse {
    #[serde(with = "iso_day")]
    pub day: Date,
    pub logs: Vec<MealLogEvent>,
    pub counts: BTreeMap<Category, u32>,
    pub score: f64,
}
