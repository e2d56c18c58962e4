use std::collections::HashMap;

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::analysis::{PlanAnalysis, analyze_plan};
use crate::config::PlannerConfig;
use crate::error::{PlannerError, Result};
use crate::models::{NutritionalGoals, PlanSet, PlanningRequest};
use crate::planner::{
    PlanningContext, SchoolFailure, plan_horizon, profile_recipes, resolve_schools,
    validate_request,
};
use crate::state::{ReferenceData, index_items};

/// Everything returned for one planning request.
#[derive(Debug, Clone, Serialize)]
pub struct PlanningResponse {
    pub plan_set: PlanSet,
    #[serde(flatten)]
    pub analysis: PlanAnalysis,
    pub failed_schools: Vec<SchoolFailure>,
}

/// Validate the config and request, plan every targeted school over the horizon and
/// analyze the result.
///
/// Reference data is only read. Nothing is returned until the whole plan
/// set is assembled.
pub fn generate_meal_plan<R: ReferenceData + ?Sized>(
    source: &R,
    request: &PlanningRequest,
    config: &PlannerConfig,
) -> Result<PlanningResponse> {
    config.validate()?;
    let schools = source.schools()?;
    let start_date = resolve_start_date(request);
    validate_request(request, schools, start_date)?;

    let recipes = source.recipes()?;
    let items = index_items(source.items()?);
    let inventory = source.inventory()?;

    let targets = resolve_schools(request, schools);
    tracing::info!(
        schools = targets.len(),
        days = request.planning_period,
        recipes = recipes.len(),
        start = %start_date,
        "planning started"
    );

    let profiles = profile_recipes(recipes, &items, inventory);
    let ctx = PlanningContext {
        profiles: &profiles,
        inventory,
        request,
        config,
        start_date,
    };
    let horizon = plan_horizon(ctx, &targets)?;

    if horizon.plan_set.is_empty() && !horizon.failed_schools.is_empty() {
        return Err(PlannerError::PlanningFailed(format!(
            "all {} schools failed",
            horizon.failed_schools.len()
        )));
    }

    let goals_by_school: HashMap<String, NutritionalGoals> = targets
        .iter()
        .map(|s| {
            (
                s.id.clone(),
                s.nutritional_requirement.overlay(&request.nutritional_goals),
            )
        })
        .collect();
    let target_cost = request
        .budget_constraints
        .max_cost_per_meal
        .unwrap_or(config.analysis.target_cost_per_meal);

    let analysis = analyze_plan(
        &horizon.plan_set,
        &goals_by_school,
        target_cost,
        request.planning_period,
        &config.analysis,
    );

    tracing::info!(
        day_plans = horizon.plan_set.len(),
        empty_days = analysis.summary.empty_days,
        compliance = analysis.nutrition.average_compliance,
        cost_per_meal = analysis.cost.average_cost_per_meal,
        "planning finished"
    );

    Ok(PlanningResponse {
        plan_set: horizon.plan_set,
        analysis,
        failed_schools: horizon.failed_schools,
    })
}

/// Day 1 of a request, today when unset.
pub fn resolve_start_date(request: &PlanningRequest) -> NaiveDate {
    request
        .start_date
        .unwrap_or_else(|| Local::now().date_naive())
}
