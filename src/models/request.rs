use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::NutritionalGoals;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetConstraints {
    pub max_cost_per_meal: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub preferred_categories: Vec<String>,
    pub avoided_ingredient_ids: Vec<String>,
}

impl Preferences {
    pub fn prefers(&self, category: &str) -> bool {
        self.preferred_categories
            .iter()
            .any(|c| c.eq_ignore_ascii_case(category))
    }

    pub fn avoids(&self, item_id: &str) -> bool {
        self.avoided_ingredient_ids.iter().any(|id| id == item_id)
    }
}

/// What the caller asks the planner to produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningRequest {
    /// Horizon length in days.
    pub planning_period: u32,
    /// School ids to plan for; empty plans every school.
    #[serde(default)]
    pub target_schools: Vec<String>,
    #[serde(default)]
    pub nutritional_goals: NutritionalGoals,
    #[serde(default)]
    pub budget_constraints: BudgetConstraints,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default = "default_true")]
    pub include_diversity_optimization: bool,
    /// Date of day 1; today when absent.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

fn default_true() -> bool {
    true
}

impl PlanningRequest {
    pub fn new(planning_period: u32) -> Self {
        Self {
            planning_period,
            target_schools: Vec::new(),
            nutritional_goals: NutritionalGoals::default(),
            budget_constraints: BudgetConstraints::default(),
            preferences: Preferences::default(),
            include_diversity_optimization: true,
            start_date: None,
        }
    }

    pub fn with_schools(mut self, ids: Vec<String>) -> Self {
        self.target_schools = ids;
        self
    }

    pub fn with_max_cost_per_meal(mut self, max_cost: f64) -> Self {
        self.budget_constraints.max_cost_per_meal = Some(max_cost);
        self
    }

    pub fn with_goals(mut self, goals: NutritionalGoals) -> Self {
        self.nutritional_goals = goals;
        self
    }

    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn with_diversity(mut self, enabled: bool) -> Self {
        self.include_diversity_optimization = enabled;
        self
    }
}
