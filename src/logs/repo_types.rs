use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::scoring::model::{MealLogEvent, UnknownCategory};

/// `meal_logs` row as stored; the category is plain text until parsed.
#[derive(Debug, FromRow)]
pub struct MealLogRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category: String,
    pub logged_at: OffsetDateTime,
}

impl TryFrom<MealLogRow> for MealLogEvent {
    type Error = UnknownCategory;

    fn try_from(r: MealLogRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: r.id,
            user_id: r.user_id,
            category: r.category.parse()?,
            logged_at: r.logged_at,
        })
    }
}
