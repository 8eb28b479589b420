use serde::Serialize;
use time::Date;

use crate::scoring::day::iso_day;

#[derive(Debug, Serialize)]
pub struct StoredScoreResponse {
    #[serde(with = "iso_day")]
    pub day: Date,
    /// `None` until a score has been computed for the day.
    pub points: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecomputeResponse {
    #[serde(with = "iso_day")]
    pub day: Date,
    pub points: f64,
    pub has_plan: bool,
}
