use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::PlanSet;

/// Day-over-day movement of cost per meal within one school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CostTrend {
    Baseline,
    Increase,
    Decrease,
    Stable,
}

/// Compare against the school's previous day; changes within `tolerance`
/// (relative) are stable.
pub fn classify_trend(previous: Option<f64>, current: f64, tolerance: f64) -> CostTrend {
    let Some(previous) = previous else {
        return CostTrend::Baseline;
    };
    if previous <= 0.0 {
        return if current > 0.0 {
            CostTrend::Increase
        } else {
            CostTrend::Stable
        };
    }
    let change = (current - previous) / previous;
    if change > tolerance {
        CostTrend::Increase
    } else if change < -tolerance {
        CostTrend::Decrease
    } else {
        CostTrend::Stable
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyCost {
    pub school_id: String,
    pub day: u32,
    pub date: NaiveDate,
    pub total_cost: f64,
    pub cost_per_meal: f64,
    pub trend: CostTrend,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CostAnalysis {
    pub daily: Vec<DailyCost>,
    pub total_cost: f64,
    /// Mean cost per meal over days that served something.
    pub average_cost_per_meal: f64,
    /// Population standard deviation of cost per meal over served days.
    pub cost_std_dev: f64,
    pub min_cost_per_meal: f64,
    pub max_cost_per_meal: f64,
    pub target_cost_per_meal: f64,
    /// `average_cost_per_meal / target_cost_per_meal`.
    pub budget_utilization: f64,
}

pub fn analyze_costs(plan_set: &PlanSet, target_cost_per_meal: f64, tolerance: f64) -> CostAnalysis {
    let mut previous: HashMap<&str, f64> = HashMap::new();
    let daily: Vec<DailyCost> = plan_set
        .iter()
        .map(|plan| {
            let cost_per_meal = plan.cost_per_meal();
            let trend = classify_trend(
                previous.get(plan.school_id.as_str()).copied(),
                cost_per_meal,
                tolerance,
            );
            previous.insert(plan.school_id.as_str(), cost_per_meal);
            DailyCost {
                school_id: plan.school_id.clone(),
                day: plan.day,
                date: plan.date,
                total_cost: plan.estimated_cost,
                cost_per_meal,
                trend,
            }
        })
        .collect();

    let served: Vec<f64> = plan_set
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| p.cost_per_meal())
        .collect();

    let average = mean(&served);
    let budget_utilization = if target_cost_per_meal > 0.0 {
        average / target_cost_per_meal
    } else {
        0.0
    };

    CostAnalysis {
        total_cost: plan_set.iter().map(|p| p.estimated_cost).sum(),
        average_cost_per_meal: average,
        cost_std_dev: population_std_dev(&served),
        min_cost_per_meal: served.iter().copied().reduce(f64::min).unwrap_or(0.0),
        max_cost_per_meal: served.iter().copied().reduce(f64::max).unwrap_or(0.0),
        target_cost_per_meal,
        budget_utilization,
        daily,
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayOutcome, DayPlan, Nutrition, SelectedRecipe};

    fn plan(school: &str, day: u32, cost: f64, meals: u32) -> DayPlan {
        let date = NaiveDate::from_ymd_opt(2026, 1, 4 + day).unwrap();
        let mut plan = DayPlan::empty(school, day, date, meals, DayOutcome::Planned);
        if cost > 0.0 {
            plan.estimated_cost = cost;
            plan.selected_recipes.push(SelectedRecipe {
                recipe_id: "r".into(),
                name: "R".into(),
                category: "main".into(),
                score: 0.5,
                cost_per_meal: cost / meals as f64,
                batch_cost: cost,
                nutrition: Nutrition::default(),
                total_time: 0,
            });
        }
        plan
    }

    #[test]
    fn test_trend_classification() {
        assert_eq!(classify_trend(None, 10.0, 0.05), CostTrend::Baseline);
        assert_eq!(classify_trend(Some(100.0), 110.0, 0.05), CostTrend::Increase);
        assert_eq!(classify_trend(Some(100.0), 90.0, 0.05), CostTrend::Decrease);
        assert_eq!(classify_trend(Some(100.0), 103.0, 0.05), CostTrend::Stable);
        assert_eq!(classify_trend(Some(0.0), 5.0, 0.05), CostTrend::Increase);
    }

    #[test]
    fn test_population_std_dev() {
        let sd = population_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((sd - 2.0).abs() < 1e-9);
        assert_eq!(population_std_dev(&[]), 0.0);
    }

    #[test]
    fn test_analyze_costs_per_school_trend() {
        let plans = PlanSet::new(vec![
            plan("a", 1, 1000.0, 10),
            plan("a", 2, 1500.0, 10),
            plan("b", 1, 3000.0, 10),
            plan("b", 2, 0.0, 10),
        ]);
        let analysis = analyze_costs(&plans, 100.0, 0.05);

        let trends: Vec<CostTrend> = analysis.daily.iter().map(|d| d.trend).collect();
        assert_eq!(
            trends,
            vec![
                CostTrend::Baseline,
                CostTrend::Increase,
                CostTrend::Baseline,
                CostTrend::Decrease
            ]
        );
        assert_eq!(analysis.total_cost, 5500.0);
        // served days: 100, 150, 300
        assert!((analysis.average_cost_per_meal - 550.0 / 3.0).abs() < 1e-9);
        assert!((analysis.budget_utilization - 550.0 / 300.0).abs() < 1e-9);
        assert_eq!(analysis.min_cost_per_meal, 100.0);
        assert_eq!(analysis.max_cost_per_meal, 300.0);
    }
}
