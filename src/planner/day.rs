use std::collections::HashSet;

use chrono::{Days, NaiveDate};

use crate::config::PlannerConfig;
use crate::error::Result;
use crate::models::{
    DayOutcome, DayPlan, InventorySnapshot, Nutrition, NutritionalGoals, PlanningRequest, School,
    SelectedRecipe,
};
use crate::planner::calculations::RecipeProfile;
use crate::planner::feasibility::{filter_feasible, ingredient_coverage};
use crate::planner::history::SchoolHistory;
use crate::planner::scoring::{ScoringContext, score_candidates};
use crate::planner::selection::{Selection, select_recipes};

/// Stages one (school, day) moves through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DayStage {
    NotStarted,
    Filtered,
    Scored,
    Selected,
    Finalized,
}

impl DayStage {
    pub fn next(self) -> DayStage {
        match self {
            DayStage::NotStarted => DayStage::Filtered,
            DayStage::Filtered => DayStage::Scored,
            DayStage::Scored => DayStage::Selected,
            DayStage::Selected | DayStage::Finalized => DayStage::Finalized,
        }
    }
}

/// Read-only inputs shared by every school of a run.
#[derive(Debug, Clone, Copy)]
pub struct PlanningContext<'a> {
    pub profiles: &'a [RecipeProfile<'a>],
    pub inventory: &'a InventorySnapshot,
    pub request: &'a PlanningRequest,
    pub config: &'a PlannerConfig,
    pub start_date: NaiveDate,
}

impl PlanningContext<'_> {
    pub fn max_cost_per_meal(&self) -> f64 {
        self.request
            .budget_constraints
            .max_cost_per_meal
            .unwrap_or(self.config.default_max_cost_per_meal)
    }

    pub fn date_for_day(&self, day: u32) -> NaiveDate {
        self.start_date + Days::new(u64::from(day.saturating_sub(1)))
    }
}

/// Plans single days for one school.
#[derive(Debug, Clone)]
pub struct DayPlanner<'a> {
    ctx: PlanningContext<'a>,
    school: &'a School,
    goals: NutritionalGoals,
}

impl<'a> DayPlanner<'a> {
    pub fn new(ctx: PlanningContext<'a>, school: &'a School) -> Self {
        let goals = school
            .nutritional_requirement
            .overlay(&ctx.request.nutritional_goals);
        Self { ctx, school, goals }
    }

    pub fn school(&self) -> &School {
        self.school
    }

    /// Effective goals: school requirement overlaid with request overrides.
    pub fn goals(&self) -> &NutritionalGoals {
        &self.goals
    }

    /// Plan one day. Computation failures degrade to an empty plan instead
    /// of failing the horizon.
    pub fn plan_day(&self, history: &SchoolHistory, day: u32) -> DayPlan {
        match self.try_plan_day(history, day) {
            Ok(plan) => plan,
            Err(err) => {
                tracing::warn!(
                    school = %self.school.id,
                    day,
                    error = %err,
                    "day planning failed, emitting empty plan"
                );
                DayPlan::empty(
                    &self.school.id,
                    day,
                    self.ctx.date_for_day(day),
                    self.school.meals_needed(),
                    DayOutcome::Degraded {
                        reason: err.to_string(),
                    },
                )
            }
        }
    }

    fn try_plan_day(&self, history: &SchoolHistory, day: u32) -> Result<DayPlan> {
        let meals_needed = self.school.meals_needed();
        let date = self.ctx.date_for_day(day);
        let mut stage = DayStage::NotStarted;

        let feasible = filter_feasible(self.ctx.profiles, self.ctx.inventory);
        stage = self.advance(stage, day, feasible.len());

        if feasible.is_empty() {
            tracing::info!(school = %self.school.id, day, "no feasible recipe");
            return Ok(DayPlan::empty(
                &self.school.id,
                day,
                date,
                meals_needed,
                DayOutcome::NoFeasibleRecipe,
            ));
        }

        let scoring = ScoringContext {
            school_id: &self.school.id,
            day,
            goals: self.goals,
            max_cost_per_meal: self.ctx.max_cost_per_meal(),
            meals_needed,
            preferences: &self.ctx.request.preferences,
            history,
            diversity_enabled: self.ctx.request.include_diversity_optimization,
            weights: &self.ctx.config.weights,
        };
        let scored = score_candidates(&feasible, &scoring)?;
        stage = self.advance(stage, day, scored.len());

        let budget_cap = self.ctx.max_cost_per_meal() * meals_needed as f64;
        let selection = select_recipes(scored, budget_cap, self.ctx.config.max_recipes_per_day);
        stage = self.advance(stage, day, selection.recipes.len());

        let plan = self.finalize(selection, history, day, date);
        self.advance(stage, day, plan.selected_recipes.len());
        Ok(plan)
    }

    fn advance(&self, stage: DayStage, day: u32, count: usize) -> DayStage {
        let next = stage.next();
        tracing::debug!(school = %self.school.id, day, stage = ?next, count, "day stage");
        next
    }

    fn finalize(
        &self,
        selection: Selection,
        history: &SchoolHistory,
        day: u32,
        date: NaiveDate,
    ) -> DayPlan {
        let diversity_score = selection_diversity(&selection, history);
        let feasibility_score = selection_feasibility(&selection, self.ctx.inventory);

        let selected_recipes: Vec<SelectedRecipe> = selection
            .recipes
            .iter()
            .map(|s| SelectedRecipe {
                recipe_id: s.profile.recipe.id.clone(),
                name: s.profile.recipe.name.clone(),
                category: s.profile.recipe.category.clone(),
                score: s.score(),
                cost_per_meal: s.profile.cost_per_serving,
                batch_cost: s.batch_cost,
                nutrition: s.profile.per_serving,
                total_time: s.profile.recipe.total_time(),
            })
            .collect();

        let nutritional_profile: Nutrition = selected_recipes.iter().map(|r| r.nutrition).sum();

        DayPlan {
            school_id: self.school.id.clone(),
            day,
            date,
            estimated_cost: selection.total_cost,
            meals_planned: self.school.meals_needed(),
            nutritional_profile: nutritional_profile.rounded(),
            diversity_score,
            feasibility_score,
            selected_recipes,
            outcome: DayOutcome::Planned,
        }
    }
}

/// `(unique categories / selection size + novelty) / 2`, where novelty is the
/// share of selections whose category the school has not been served yet.
pub fn selection_diversity(selection: &Selection, history: &SchoolHistory) -> f64 {
    if selection.is_empty() {
        return 0.0;
    }
    let size = selection.recipes.len() as f64;
    let unique: HashSet<&str> = selection.recipes.iter().map(|s| s.profile.category()).collect();
    let novel = selection
        .recipes
        .iter()
        .filter(|s| !history.has_category(s.profile.category()))
        .count();

    (unique.len() as f64 / size + novel as f64 / size) / 2.0
}

/// Mean stock coverage over every ingredient use in the selection.
pub fn selection_feasibility(selection: &Selection, inventory: &InventorySnapshot) -> f64 {
    if selection.is_empty() {
        return 0.0;
    }
    let coverage: Vec<f64> = selection
        .recipes
        .iter()
        .flat_map(|s| ingredient_coverage(s.profile.recipe, inventory))
        .collect();

    if coverage.is_empty() {
        1.0
    } else {
        coverage.iter().sum::<f64>() / coverage.len() as f64
    }
}
