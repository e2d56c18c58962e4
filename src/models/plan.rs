use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Nutrition;

/// A recipe chosen for one school on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedRecipe {
    pub recipe_id: String,
    pub name: String,
    pub category: String,
    pub score: f64,
    /// Cost of one serving.
    pub cost_per_meal: f64,
    /// Cost of cooking this recipe for every meal of the day.
    pub batch_cost: f64,
    /// Nutrition of one serving.
    pub nutrition: Nutrition,
    /// Prep plus cook minutes.
    pub total_time: u32,
}

/// How a day plan came to be.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DayOutcome {
    Planned,
    NoFeasibleRecipe,
    Degraded { reason: String },
}

/// Selected recipes and derived metrics for one school on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub school_id: String,
    /// 1-based day within the horizon.
    pub day: u32,
    pub date: NaiveDate,
    pub selected_recipes: Vec<SelectedRecipe>,
    /// Total cost for the day (sum of batch costs).
    pub estimated_cost: f64,
    pub meals_planned: u32,
    /// Per-meal nutrition: one serving of each selected recipe.
    pub nutritional_profile: Nutrition,
    pub diversity_score: f64,
    pub feasibility_score: f64,
    pub outcome: DayOutcome,
}

impl DayPlan {
    /// A plan with nothing selected.
    pub fn empty(
        school_id: impl Into<String>,
        day: u32,
        date: NaiveDate,
        meals_planned: u32,
        outcome: DayOutcome,
    ) -> Self {
        Self {
            school_id: school_id.into(),
            day,
            date,
            selected_recipes: Vec::new(),
            estimated_cost: 0.0,
            meals_planned,
            nutritional_profile: Nutrition::default(),
            diversity_score: 0.0,
            feasibility_score: 0.0,
            outcome,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selected_recipes.is_empty()
    }

    pub fn cost_per_meal(&self) -> f64 {
        if self.meals_planned == 0 {
            0.0
        } else {
            self.estimated_cost / self.meals_planned as f64
        }
    }

    pub fn contains_recipe(&self, recipe_id: &str) -> bool {
        self.selected_recipes.iter().any(|r| r.recipe_id == recipe_id)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.selected_recipes.iter().map(|r| r.category.as_str())
    }
}

/// Every day plan of a horizon run, ordered by school then day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanSet {
    pub day_plans: Vec<DayPlan>,
}

impl PlanSet {
    pub fn new(day_plans: Vec<DayPlan>) -> Self {
        Self { day_plans }
    }

    pub fn len(&self) -> usize {
        self.day_plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.day_plans.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayPlan> {
        self.day_plans.iter()
    }

    pub fn for_school<'a>(&'a self, school_id: &'a str) -> impl Iterator<Item = &'a DayPlan> {
        self.day_plans.iter().filter(move |p| p.school_id == school_id)
    }

    pub fn get(&self, school_id: &str, day: u32) -> Option<&DayPlan> {
        self.day_plans
            .iter()
            .find(|p| p.school_id == school_id && p.day == day)
    }

    pub fn selections(&self) -> impl Iterator<Item = &SelectedRecipe> {
        self.day_plans.iter().flat_map(|p| p.selected_recipes.iter())
    }
}
