use std::collections::HashMap;

use serde::Serialize;

use crate::analysis::compliance::{NutritionalAnalysis, analyze_nutrition};
use crate::analysis::cost::{CostAnalysis, analyze_costs};
use crate::analysis::diversity::{DiversityAnalysis, analyze_diversity};
use crate::analysis::recommendations::{
    Recommendation, RecommendationInputs, generate_recommendations,
};
use crate::analysis::summary::{PlanSummary, summarize};
use crate::config::AnalysisConfig;
use crate::models::{NutritionalGoals, PlanSet};

/// Everything derived from a finished plan set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanAnalysis {
    pub nutrition: NutritionalAnalysis,
    pub cost: CostAnalysis,
    pub diversity: DiversityAnalysis,
    pub average_feasibility: f64,
    pub recommendations: Vec<Recommendation>,
    pub summary: PlanSummary,
}

pub fn analyze_plan(
    plan_set: &PlanSet,
    goals_by_school: &HashMap<String, NutritionalGoals>,
    target_cost_per_meal: f64,
    planning_period: u32,
    config: &AnalysisConfig,
) -> PlanAnalysis {
    let nutrition = analyze_nutrition(plan_set, goals_by_school);
    let cost = analyze_costs(plan_set, target_cost_per_meal, config.cost_trend_tolerance);
    let diversity = analyze_diversity(plan_set);
    let average_feasibility = if plan_set.is_empty() {
        0.0
    } else {
        plan_set.iter().map(|p| p.feasibility_score).sum::<f64>() / plan_set.len() as f64
    };

    let inputs = RecommendationInputs {
        compliance: nutrition.average_compliance,
        average_cost_per_meal: cost.average_cost_per_meal,
        target_cost_per_meal,
        diversity: diversity.overall,
        average_feasibility,
    };
    let recommendations = generate_recommendations(&inputs, config);
    let summary = summarize(plan_set, planning_period, cost.average_cost_per_meal);

    PlanAnalysis {
        nutrition,
        cost,
        diversity,
        average_feasibility,
        recommendations,
        summary,
    }
}
