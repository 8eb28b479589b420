use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Food category of a logged portion.
///
/// The wire and database spelling is the SCREAMING_SNAKE_CASE name; `as_str`,
/// `FromStr` and serde all agree on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Carbs,
    LactoseAnimal,
    Fruits,
    Veggies,
    GoodFats,
    Prohibited,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Carbs,
        Category::LactoseAnimal,
        Category::Fruits,
        Category::Veggies,
        Category::GoodFats,
        Category::Prohibited,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Carbs => "CARBS",
            Category::LactoseAnimal => "LACTOSE_ANIMAL",
            Category::Fruits => "FRUITS",
            Category::Veggies => "VEGGIES",
            Category::GoodFats => "GOOD_FATS",
            Category::Prohibited => "PROHIBITED",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown meal category `{0}`")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Daily portion targets for the five goal categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPlan {
    pub carbs_goal: u32,
    pub lactose_animal_goal: u32,
    pub fruits_goal: u32,
    pub veggies_goal: u32,
    pub good_fats_goal: u32,
}

impl GoalPlan {
    /// Every goal category paired with its target, in declaration order.
    pub fn goals(&self) -> [(Category, u32); 5] {
        [
            (Category::Carbs, self.carbs_goal),
            (Category::LactoseAnimal, self.lactose_animal_goal),
            (Category::Fruits, self.fruits_goal),
            (Category::Veggies, self.veggies_goal),
            (Category::GoodFats, self.good_fats_goal),
        ]
    }
}

/// A portion as it is handed to the log store, before it gets an id.
#[derive(Debug, Clone, Copy)]
pub struct NewMealLog {
    pub user_id: Uuid,
    pub category: Category,
    pub logged_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealLogEvent {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category: Category,
    #[serde(with = "time::serde::rfc3339")]
    pub logged_at: OffsetDateTime,
}

/// Per-category tally of one day's events; all six slots start at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts([u32; 6]);

impl CategoryCounts {
    pub fn from_events<'a>(events: impl IntoIterator<Item = &'a MealLogEvent>) -> Self {
        let mut counts = Self::default();
        for event in events {
            counts.record(event.category);
        }
        counts
    }

    pub fn record(&mut self, category: Category) {
        self.0[category.index()] += 1;
    }

    pub fn get(&self, category: Category) -> u32 {
        self.0[category.index()]
    }

    pub fn to_map(&self) -> BTreeMap<Category, u32> {
        Category::ALL.into_iter().map(|c| (c, self.get(c))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_spelling_is_identical_in_every_encoding() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
            let back: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(back, category);
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = "SWEETS".parse::<Category>().unwrap_err();
        assert_eq!(err, UnknownCategory("SWEETS".into()));
        assert!("carbs".parse::<Category>().is_err());
        assert!(serde_json::from_str::<Category>("\"SWEETS\"").is_err());
    }

    #[test]
    fn plan_covers_every_category_but_prohibited() {
        let planned: Vec<_> = GoalPlan::default().goals().iter().map(|(c, _)| *c).collect();
        let expected: Vec<_> = Category::ALL
            .into_iter()
            .filter(|c| *c != Category::Prohibited)
            .collect();
        assert_eq!(planned, expected);
    }

    #[test]
    fn counts_tally_each_category_independently() {
        let mut counts = CategoryCounts::default();
        counts.record(Category::Carbs);
        counts.record(Category::Carbs);
        counts.record(Category::Prohibited);

        assert_eq!(counts.get(Category::Carbs), 2);
        assert_eq!(counts.get(Category::Prohibited), 1);
        assert_eq!(counts.get(Category::Fruits), 0);

        let map = counts.to_map();
        assert_eq!(map.len(), 6);
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["CARBS"], 2);
        assert_eq!(json["GOOD_FATS"], 0);
    }

    #[test]
    fn plan_uses_camel_case_goal_names() {
        let plan = GoalPlan {
            carbs_goal: 3,
            fruits_goal: 2,
            ..GoalPlan::default()
        };
        let json = serde_json::to_value(plan).unwrap();
        assert_eq!(json["carbsGoal"], 3);
        assert_eq!(json["lactoseAnimalGoal"], 0);
        assert_eq!(json["goodFatsGoal"], 0);
    }
}
