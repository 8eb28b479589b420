use super::model::{Category, CategoryCounts, GoalPlan};

pub const MAX_POINTS: f64 = 100.0;

/// Points for one goal category: full marks at or under target, then a linear
/// deduction that bottoms out at twice the goal.
pub fn category_points(actual: u32, goal: u32) -> f64 {
    if goal == 0 || actual <= goal {
        return MAX_POINTS;
    }
    let overage = f64::from(actual - goal);
    let deduction = overage / f64::from(goal) * MAX_POINTS;
    (MAX_POINTS - deduction).max(0.0)
}

pub fn aggregate(points: &[f64]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    points.iter().sum::<f64>() / points.len() as f64
}

pub fn apply_prohibited_penalty(score: f64, prohibited: u32) -> f64 {
    match prohibited {
        0 => score,
        1 => score * 0.5,
        _ => 0.0,
    }
}

pub fn score_day(plan: &GoalPlan, counts: &CategoryCounts) -> f64 {
    let per_category: Vec<f64> = plan
        .goals()
        .iter()
        .map(|&(category, goal)| category_points(counts.get(category), goal))
        .collect();
    apply_prohibited_penalty(aggregate(&per_category), counts.get(Category::Prohibited))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(entries: &[(Category, u32)]) -> CategoryCounts {
        let mut c = CategoryCounts::default();
        for &(category, n) in entries {
            for _ in 0..n {
                c.record(category);
            }
        }
        c
    }

    fn scenario_plan() -> GoalPlan {
        GoalPlan {
            carbs_goal: 3,
            fruits_goal: 2,
            ..GoalPlan::default()
        }
    }

    #[test]
    fn at_or_under_goal_is_full_marks() {
        for goal in 1..20 {
            for actual in 0..=goal {
                assert_eq!(category_points(actual, goal), 100.0, "a={actual} g={goal}");
            }
        }
    }

    #[test]
    fn double_the_goal_zeroes_the_category() {
        for goal in 1..50 {
            assert_eq!(category_points(2 * goal, goal), 0.0);
            assert_eq!(category_points(2 * goal + 7, goal), 0.0);
        }
    }

    #[test]
    fn overage_is_linear_and_non_increasing() {
        let goal = 4;
        assert_eq!(category_points(5, goal), 75.0);
        assert_eq!(category_points(6, goal), 50.0);
        assert_eq!(category_points(7, goal), 25.0);

        let mut previous = f64::MAX;
        for actual in goal..=3 * goal {
            let p = category_points(actual, goal);
            assert!(p <= previous);
            assert!((0.0..=100.0).contains(&p));
            previous = p;
        }
    }

    #[test]
    fn zero_goal_is_unconstrained() {
        for actual in [0, 1, 10, 1_000] {
            assert_eq!(category_points(actual, 0), 100.0);
        }
    }

    #[test]
    fn aggregate_of_nothing_is_zero() {
        assert_eq!(aggregate(&[]), 0.0);
        assert_eq!(aggregate(&[0.0, 100.0]), 50.0);
    }

    #[test]
    fn prohibited_penalty_steps() {
        assert_eq!(apply_prohibited_penalty(80.0, 0), 80.0);
        assert_eq!(apply_prohibited_penalty(80.0, 1), 40.0);
        assert_eq!(apply_prohibited_penalty(80.0, 2), 0.0);
        assert_eq!(apply_prohibited_penalty(80.0, 9), 0.0);
    }

    #[test]
    fn more_prohibited_never_scores_higher() {
        let plan = scenario_plan();
        for carbs in 0..8 {
            let base = [(Category::Carbs, carbs), (Category::Fruits, 1)];
            let scores: Vec<f64> = (0..3)
                .map(|p| {
                    let mut entries = base.to_vec();
                    entries.push((Category::Prohibited, p));
                    score_day(&plan, &counts(&entries))
                })
                .collect();
            assert!(scores[2] <= scores[1] && scores[1] <= scores[0], "{scores:?}");
        }
    }

    #[test]
    fn scenario_a_on_target_scores_100() {
        let c = counts(&[(Category::Carbs, 3), (Category::Fruits, 1)]);
        assert_eq!(score_day(&scenario_plan(), &c), 100.0);
    }

    #[test]
    fn scenario_b_double_carbs_scores_80() {
        let c = counts(&[(Category::Carbs, 6)]);
        assert_eq!(score_day(&scenario_plan(), &c), 80.0);
    }

    #[test]
    fn scenario_c_one_prohibited_halves() {
        let c = counts(&[
            (Category::Carbs, 3),
            (Category::Fruits, 1),
            (Category::Prohibited, 1),
        ]);
        assert_eq!(score_day(&scenario_plan(), &c), 50.0);
    }

    #[test]
    fn scenario_d_two_prohibited_zeroes() {
        let c = counts(&[
            (Category::Carbs, 3),
            (Category::Fruits, 1),
            (Category::Prohibited, 2),
        ]);
        assert_eq!(score_day(&scenario_plan(), &c), 0.0);
    }

    #[test]
    fn empty_day_with_plan_is_full_marks() {
        assert_eq!(score_day(&scenario_plan(), &CategoryCounts::default()), 100.0);
    }
}
