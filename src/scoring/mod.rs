//! Daily adherence scoring: per-category points from a goal plan and one
//! day's meal log, averaged, then penalised for prohibited portions.

pub mod day;
pub mod engine;
mod locks;
pub mod model;
pub mod points;

pub use engine::ScoringEngine;

#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    /// A stored event carries a category outside the fixed six.
    #[error("invalid meal category `{0}`")]
    InvalidCategory(String),

    /// The day, or the instant's day, has no full window in the supported
    /// calendar range.
    #[error("day out of range")]
    DayOutOfRange,

    #[error("store unavailable: {0:#}")]
    StoreUnavailable(anyhow::Error),
}
