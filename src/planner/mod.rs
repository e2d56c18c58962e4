pub mod calculations;
pub mod constants;
pub mod day;
pub mod feasibility;
pub mod history;
pub mod horizon;
pub mod scoring;
pub mod selection;
pub mod validation;

pub use calculations::{
    NutritionCost, Portion, RecipeProfile, calculate_nutrition_and_cost, estimate_complexity,
    profile_recipes,
};
pub use constants::*;
pub use day::{DayPlanner, DayStage, PlanningContext};
pub use feasibility::{FeasibilityEntry, feasibility_report, filter_feasible, is_feasible};
pub use history::SchoolHistory;
pub use horizon::{HorizonResult, SchoolFailure, plan_horizon, plan_school};
pub use scoring::{ScoreBreakdown, ScoredRecipe, ScoringContext, score_candidates, score_recipe};
pub use selection::{Selection, select_recipes};
pub use validation::{resolve_schools, validate_request};
