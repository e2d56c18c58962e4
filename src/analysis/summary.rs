use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{DayOutcome, PlanSet};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlanSummary {
    pub school_count: usize,
    pub planning_period: u32,
    pub day_plan_count: usize,
    /// Meals across days that served something.
    pub meals_planned: u64,
    pub total_cost: f64,
    pub average_cost_per_meal: f64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub distinct_recipes: usize,
    /// Mean prep plus cook minutes over all selections.
    pub average_total_time: f64,
    pub empty_days: usize,
    pub degraded_days: usize,
}

pub fn summarize(plan_set: &PlanSet, planning_period: u32, average_cost_per_meal: f64) -> PlanSummary {
    let schools: HashSet<&str> = plan_set.iter().map(|p| p.school_id.as_str()).collect();
    let recipes: HashSet<&str> = plan_set.selections().map(|s| s.recipe_id.as_str()).collect();

    let times: Vec<f64> = plan_set.selections().map(|s| s.total_time as f64).collect();
    let average_total_time = if times.is_empty() {
        0.0
    } else {
        times.iter().sum::<f64>() / times.len() as f64
    };

    PlanSummary {
        school_count: schools.len(),
        planning_period,
        day_plan_count: plan_set.len(),
        meals_planned: plan_set
            .iter()
            .filter(|p| !p.is_empty())
            .map(|p| u64::from(p.meals_planned))
            .sum(),
        total_cost: plan_set.iter().map(|p| p.estimated_cost).sum(),
        average_cost_per_meal,
        start_date: plan_set.iter().map(|p| p.date).min(),
        end_date: plan_set.iter().map(|p| p.date).max(),
        distinct_recipes: recipes.len(),
        average_total_time,
        empty_days: plan_set.iter().filter(|p| p.is_empty()).count(),
        degraded_days: plan_set
            .iter()
            .filter(|p| matches!(p.outcome, DayOutcome::Degraded { .. }))
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayPlan, Nutrition, SelectedRecipe};

    #[test]
    fn test_summary_counts() {
        let d1 = NaiveDate::from_ymd_opt(2026, 5, 4).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2026, 5, 5).unwrap();
        let mut served = DayPlan::empty("s1", 1, d1, 40, DayOutcome::Planned);
        served.estimated_cost = 400.0;
        served.selected_recipes.push(SelectedRecipe {
            recipe_id: "r1".into(),
            name: "R1".into(),
            category: "main".into(),
            score: 0.7,
            cost_per_meal: 10.0,
            batch_cost: 400.0,
            nutrition: Nutrition::default(),
            total_time: 45,
        });
        let degraded = DayPlan::empty(
            "s1",
            2,
            d2,
            40,
            DayOutcome::Degraded {
                reason: "boom".into(),
            },
        );

        let summary = summarize(&PlanSet::new(vec![served, degraded]), 2, 10.0);
        assert_eq!(summary.school_count, 1);
        assert_eq!(summary.day_plan_count, 2);
        assert_eq!(summary.meals_planned, 40);
        assert_eq!(summary.total_cost, 400.0);
        assert_eq!(summary.start_date, Some(d1));
        assert_eq!(summary.end_date, Some(d2));
        assert_eq!(summary.distinct_recipes, 1);
        assert_eq!(summary.average_total_time, 45.0);
        assert_eq!(summary.empty_days, 1);
        assert_eq!(summary.degraded_days, 1);
    }
}
