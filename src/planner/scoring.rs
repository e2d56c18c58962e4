use serde::Serialize;

use crate::config::ScoreWeights;
use crate::error::{PlannerError, Result};
use crate::models::{Nutrition, NutritionalGoals, Preferences, Recipe};
use crate::planner::calculations::RecipeProfile;
use crate::planner::constants::*;
use crate::planner::history::SchoolHistory;

/// Everything a recipe is scored against for one (school, day).
#[derive(Debug, Clone)]
pub struct ScoringContext<'c> {
    pub school_id: &'c str,
    pub day: u32,
    pub goals: NutritionalGoals,
    pub max_cost_per_meal: f64,
    pub meals_needed: u32,
    pub preferences: &'c Preferences,
    pub history: &'c SchoolHistory,
    pub diversity_enabled: bool,
    pub weights: &'c ScoreWeights,
}

/// Per-criterion scores and their weighted total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub nutrition: f64,
    pub cost: f64,
    pub diversity: f64,
    pub preference: f64,
    pub complexity: f64,
    pub final_score: f64,
}

impl ScoreBreakdown {
    fn is_finite(&self) -> bool {
        [
            self.nutrition,
            self.cost,
            self.diversity,
            self.preference,
            self.complexity,
            self.final_score,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// A feasible recipe with its score and day cost.
#[derive(Debug, Clone)]
pub struct ScoredRecipe<'p, 'a> {
    pub profile: &'p RecipeProfile<'a>,
    pub breakdown: ScoreBreakdown,
    /// Cost of serving the recipe for every meal of the day.
    pub batch_cost: f64,
}

impl ScoredRecipe<'_, '_> {
    pub fn score(&self) -> f64 {
        self.breakdown.final_score
    }
}

/// Mean partial credit over the configured nutrient goals, 0.5 when none are.
pub fn nutrition_score(actual: &Nutrition, goals: &NutritionalGoals) -> f64 {
    let mut terms = Vec::with_capacity(5);

    if let Some(target) = goals.calories() {
        terms.push((1.0 - (actual.calories - target).abs() / target).max(0.0));
    }
    if let Some(target) = goals.protein() {
        terms.push((actual.protein / target).min(1.0));
    }
    if let Some(max) = goals.fat() {
        terms.push(if actual.fat <= max {
            1.0
        } else {
            (2.0 - actual.fat / max).max(0.0)
        });
    }
    if let Some(target) = goals.carbohydrates() {
        terms.push((actual.carbohydrates / target).min(1.0));
    }
    if let Some(target) = goals.fiber() {
        terms.push((actual.fiber / target).min(1.0));
    }

    if terms.is_empty() {
        NEUTRAL_NUTRITION_SCORE
    } else {
        terms.iter().sum::<f64>() / terms.len() as f64
    }
}

/// Share of the per-meal ceiling left after the recipe.
pub fn cost_score(cost_per_meal: f64, max_cost_per_meal: f64) -> f64 {
    if max_cost_per_meal <= 0.0 {
        return 0.0;
    }
    ((max_cost_per_meal - cost_per_meal) / max_cost_per_meal).max(0.0)
}

/// Penalize recipes and categories the school has already been served.
pub fn diversity_score(recipe: &Recipe, history: &SchoolHistory) -> f64 {
    let mut score = 1.0;
    if history.has_served(&recipe.id) {
        score -= REPEAT_RECIPE_PENALTY;
    }
    if history.category_count(&recipe.category) >= CATEGORY_REPEAT_LIMIT {
        score -= REPEAT_CATEGORY_PENALTY;
    }
    f64::max(score, 0.0)
}

pub fn preference_score(recipe: &Recipe, preferences: &Preferences) -> f64 {
    let mut score = PREFERENCE_BASELINE;
    if preferences.prefers(&recipe.category) {
        score += PREFERRED_CATEGORY_BONUS;
    }
    if recipe
        .ingredients
        .iter()
        .any(|i| preferences.avoids(&i.item_id))
    {
        score -= AVOIDED_INGREDIENT_PENALTY;
    }
    score.clamp(0.0, 1.0)
}

/// Simpler recipes score higher.
pub fn complexity_score(complexity: f64) -> f64 {
    ((MAX_COMPLEXITY - complexity) / MAX_COMPLEXITY).max(0.0)
}

/// Weighted multi-criteria score of one recipe, clamped to [0, 1].
pub fn score_recipe(profile: &RecipeProfile, ctx: &ScoringContext) -> ScoreBreakdown {
    let nutrition = nutrition_score(&profile.per_serving, &ctx.goals);
    let cost = cost_score(profile.cost_per_serving, ctx.max_cost_per_meal);
    let diversity = if ctx.diversity_enabled {
        diversity_score(profile.recipe, ctx.history)
    } else {
        1.0
    };
    let preference = preference_score(profile.recipe, ctx.preferences);
    let complexity = complexity_score(profile.complexity);

    let w = ctx.weights;
    let weighted = w.nutrition * nutrition
        + w.cost * cost
        + w.diversity * diversity
        + w.preference * preference
        + w.complexity * complexity;

    ScoreBreakdown {
        nutrition,
        cost,
        diversity,
        preference,
        complexity,
        final_score: weighted.clamp(0.0, 1.0),
    }
}

/// Score every candidate. A non-finite score is reported as a computation
/// error for the context's school and day.
pub fn score_candidates<'p, 'a>(
    candidates: &[&'p RecipeProfile<'a>],
    ctx: &ScoringContext,
) -> Result<Vec<ScoredRecipe<'p, 'a>>> {
    candidates
        .iter()
        .map(|profile| {
            let breakdown = score_recipe(profile, ctx);
            let batch_cost = profile.cost_per_serving * ctx.meals_needed as f64;
            if !breakdown.is_finite() || !batch_cost.is_finite() {
                return Err(PlannerError::Computation {
                    school_id: ctx.school_id.to_string(),
                    day: ctx.day,
                    message: format!("non-finite score for recipe {}", profile.id()),
                });
            }
            Ok(ScoredRecipe {
                profile,
                breakdown,
                batch_cost,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayOutcome, DayPlan, SelectedRecipe, Unit};
    use chrono::NaiveDate;
    use std::collections::HashMap;

    fn nutrition(calories: f64, protein: f64, fat: f64) -> Nutrition {
        Nutrition {
            calories,
            protein,
            fat,
            ..Default::default()
        }
    }

    fn served(day: u32, id: &str, category: &str) -> DayPlan {
        let date = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let mut plan = DayPlan::empty("s1", day, date, 1, DayOutcome::Planned);
        plan.selected_recipes.push(SelectedRecipe {
            recipe_id: id.into(),
            name: id.into(),
            category: category.into(),
            score: 0.5,
            cost_per_meal: 0.0,
            batch_cost: 0.0,
            nutrition: Nutrition::default(),
            total_time: 0,
        });
        plan
    }

    #[test]
    fn test_nutrition_score_defaults_without_goals() {
        let score = nutrition_score(&nutrition(900.0, 5.0, 80.0), &NutritionalGoals::default());
        assert_eq!(score, NEUTRAL_NUTRITION_SCORE);
    }

    #[test]
    fn test_nutrition_score_partial_credit() {
        let goals = NutritionalGoals {
            calories_per_meal: Some(600.0),
            protein_min: Some(20.0),
            fat_max: Some(20.0),
            ..Default::default()
        };
        // calories 1 - 60/600 = 0.9, protein 10/20 = 0.5, fat 2 - 30/20 = 0.5
        let score = nutrition_score(&nutrition(540.0, 10.0, 30.0), &goals);
        assert!((score - (0.9 + 0.5 + 0.5) / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_fat_within_max_is_full_credit() {
        let goals = NutritionalGoals {
            fat_max: Some(20.0),
            ..Default::default()
        };
        assert_eq!(nutrition_score(&nutrition(0.0, 0.0, 20.0), &goals), 1.0);
        assert_eq!(nutrition_score(&nutrition(0.0, 0.0, 50.0), &goals), 0.0);
    }

    #[test]
    fn test_cost_score() {
        assert!((cost_score(12_000.0, 50_000.0) - 0.76).abs() < 1e-9);
        assert_eq!(cost_score(60_000.0, 50_000.0), 0.0);
        assert_eq!(cost_score(0.0, 50_000.0), 1.0);
    }

    #[test]
    fn test_diversity_penalties() {
        let recipe = Recipe::new("r1", "Soup", "soup");
        let fresh = SchoolHistory::new("s1");
        assert_eq!(diversity_score(&recipe, &fresh), 1.0);

        let once = fresh.record(served(1, "r1", "soup")).unwrap();
        assert_eq!(diversity_score(&recipe, &once), 0.5);

        let twice = once.record(served(2, "r2", "soup")).unwrap();
        assert!((diversity_score(&recipe, &twice) - 0.2).abs() < 1e-9);

        let other = Recipe::new("r3", "Other Soup", "soup");
        assert!((diversity_score(&other, &twice) - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_preference_score() {
        let prefs = Preferences {
            preferred_categories: vec!["soup".into()],
            avoided_ingredient_ids: vec!["peanut".into()],
        };
        let liked = Recipe::new("r1", "Soup", "soup");
        let avoided = Recipe::new("r2", "Satay", "main").with_ingredient("peanut", 1.0, Unit::G);
        let both = Recipe::new("r3", "Peanut Soup", "soup").with_ingredient("peanut", 1.0, Unit::G);
        let plain = Recipe::new("r4", "Bread", "side");

        assert!((preference_score(&liked, &prefs) - 0.8).abs() < 1e-9);
        assert_eq!(preference_score(&avoided, &prefs), 0.0);
        assert!((preference_score(&both, &prefs) - 0.3).abs() < 1e-9);
        assert_eq!(preference_score(&plain, &prefs), 0.5);
    }

    #[test]
    fn test_complexity_score() {
        assert_eq!(complexity_score(5.0), 0.0);
        assert!((complexity_score(1.0) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_final_score_in_unit_range() {
        let recipe = Recipe::new("r1", "Free Lunch", "main");
        let items = HashMap::new();
        let inventory = crate::models::InventorySnapshot::new();
        let profile = RecipeProfile::build(&recipe, &items, &inventory);
        let history = SchoolHistory::new("s1");
        let prefs = Preferences {
            preferred_categories: vec!["main".into()],
            ..Default::default()
        };
        let weights = ScoreWeights {
            nutrition: 2.0,
            ..Default::default()
        };
        let ctx = ScoringContext {
            school_id: "s1",
            day: 1,
            goals: NutritionalGoals::default(),
            max_cost_per_meal: 50_000.0,
            meals_needed: 100,
            preferences: &prefs,
            history: &history,
            diversity_enabled: true,
            weights: &weights,
        };

        let breakdown = score_recipe(&profile, &ctx);
        assert!(breakdown.final_score <= 1.0);
        assert!(breakdown.final_score >= 0.0);
    }

    #[test]
    fn test_non_finite_cost_is_computation_error() {
        let recipe = Recipe::new("r1", "Broken", "main").with_ingredient("x", 100.0, Unit::G);
        let mut items = HashMap::new();
        items.insert(
            "x".to_string(),
            crate::models::Item::new("x", "X", f64::INFINITY),
        );
        let inventory = crate::models::InventorySnapshot::new();
        let profile = RecipeProfile::build(&recipe, &items, &inventory);
        let history = SchoolHistory::new("s1");
        let prefs = Preferences::default();
        let weights = ScoreWeights::default();
        let ctx = ScoringContext {
            school_id: "s1",
            day: 4,
            goals: NutritionalGoals::default(),
            max_cost_per_meal: 50_000.0,
            meals_needed: 10,
            preferences: &prefs,
            history: &history,
            diversity_enabled: true,
            weights: &weights,
        };

        let result = score_candidates(&[&profile], &ctx);
        assert!(matches!(
            result,
            Err(PlannerError::Computation { day: 4, .. })
        ));
    }
}
