use std::collections::HashSet;

use serde::Serialize;

use crate::models::PlanSet;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiversityAnalysis {
    pub total_selections: usize,
    pub unique_recipes: usize,
    pub unique_categories: usize,
    /// `unique_recipes / total_selections`.
    pub recipe_variety: f64,
    /// `unique_categories / total_selections`.
    pub category_variety: f64,
    /// Mean of recipe and category variety.
    pub overall: f64,
    /// Mean of the day plans' own diversity scores.
    pub average_day_diversity: f64,
}

pub fn analyze_diversity(plan_set: &PlanSet) -> DiversityAnalysis {
    let total_selections = plan_set.selections().count();
    if total_selections == 0 {
        return DiversityAnalysis::default();
    }

    let recipes: HashSet<&str> = plan_set.selections().map(|s| s.recipe_id.as_str()).collect();
    let categories: HashSet<&str> = plan_set.selections().map(|s| s.category.as_str()).collect();

    let total = total_selections as f64;
    let recipe_variety = recipes.len() as f64 / total;
    let category_variety = categories.len() as f64 / total;

    DiversityAnalysis {
        total_selections,
        unique_recipes: recipes.len(),
        unique_categories: categories.len(),
        recipe_variety,
        category_variety,
        overall: (recipe_variety + category_variety) / 2.0,
        average_day_diversity: plan_set.iter().map(|p| p.diversity_score).sum::<f64>()
            / plan_set.len() as f64,
    }
}
