use std::collections::HashMap;

use crate::models::{InventorySnapshot, Item, Nutrition, Recipe};
use crate::planner::constants::*;

/// A weighed quantity of one item.
#[derive(Debug, Clone, Copy)]
pub struct Portion<'a> {
    pub item: &'a Item,
    pub grams: f64,
    /// Price per kilogram used for costing.
    pub price_per_kg: f64,
}

impl<'a> Portion<'a> {
    pub fn new(item: &'a Item, grams: f64) -> Self {
        Self {
            item,
            grams,
            price_per_kg: item.unit_price,
        }
    }

    pub fn with_price(mut self, price_per_kg: f64) -> Self {
        self.price_per_kg = price_per_kg;
        self
    }
}

/// Nutrition totals and cost of a set of portions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NutritionCost {
    pub nutrition: Nutrition,
    pub cost: f64,
}

/// Sum nutrition and cost over portions.
///
/// Nutrition is rounded (calories whole, the rest to 0.1). Cost assumes the
/// price is per kilogram: `price × grams / 1000`.
pub fn calculate_nutrition_and_cost(portions: &[Portion]) -> NutritionCost {
    let nutrition: Nutrition = portions
        .iter()
        .map(|p| Nutrition::from_portion(&p.item.nutrition_per_100g, p.grams))
        .sum();
    let cost = portions
        .iter()
        .map(|p| p.price_per_kg * p.grams / 1000.0)
        .sum();

    NutritionCost {
        nutrition: nutrition.rounded(),
        cost,
    }
}

/// Difficulty estimate on a 1–5 scale.
///
/// `(1 + 0.1 × ingredients + (prep + cook) / 60) × difficulty`, capped at 5.
pub fn estimate_complexity(recipe: &Recipe) -> f64 {
    let raw = COMPLEXITY_BASE
        + COMPLEXITY_PER_INGREDIENT * recipe.ingredients.len() as f64
        + recipe.total_time() as f64 / 60.0;
    (raw * recipe.difficulty.multiplier()).min(MAX_COMPLEXITY)
}

/// Resolve a recipe's ingredients to priced portions.
///
/// Unknown items are skipped. Items without a positive unit price fall back
/// to the stocked lot's cost per unit.
pub fn recipe_portions<'a>(
    recipe: &Recipe,
    items: &'a HashMap<String, Item>,
    inventory: &InventorySnapshot,
) -> Vec<Portion<'a>> {
    recipe
        .ingredients
        .iter()
        .filter_map(|ingredient| {
            let Some(item) = items.get(&ingredient.item_id) else {
                tracing::debug!(
                    recipe = %recipe.id,
                    item = %ingredient.item_id,
                    "ingredient references unknown item"
                );
                return None;
            };
            let portion = Portion::new(item, ingredient.grams());
            if item.unit_price > 0.0 {
                Some(portion)
            } else {
                let fallback = inventory
                    .get(&item.id)
                    .map(|l| l.cost_per_unit)
                    .unwrap_or(0.0);
                Some(portion.with_price(fallback))
            }
        })
        .collect()
}

/// Precomputed, school-independent figures for one recipe.
#[derive(Debug, Clone)]
pub struct RecipeProfile<'a> {
    pub recipe: &'a Recipe,
    /// Whole recipe as written.
    pub totals: NutritionCost,
    pub per_serving: Nutrition,
    pub cost_per_serving: f64,
    pub complexity: f64,
}

impl<'a> RecipeProfile<'a> {
    pub fn build(
        recipe: &'a Recipe,
        items: &HashMap<String, Item>,
        inventory: &InventorySnapshot,
    ) -> Self {
        let portions = recipe_portions(recipe, items, inventory);
        let totals = calculate_nutrition_and_cost(&portions);
        let servings = recipe.serving_size.max(1) as f64;

        Self {
            recipe,
            totals,
            per_serving: totals.nutrition.divided_by(servings).rounded(),
            cost_per_serving: totals.cost / servings,
            complexity: estimate_complexity(recipe),
        }
    }

    pub fn id(&self) -> &str {
        &self.recipe.id
    }

    pub fn category(&self) -> &str {
        &self.recipe.category
    }
}

/// Profile every recipe once per run, keeping input order.
pub fn profile_recipes<'a>(
    recipes: &'a [Recipe],
    items: &HashMap<String, Item>,
    inventory: &InventorySnapshot,
) -> Vec<RecipeProfile<'a>> {
    recipes
        .iter()
        .map(|r| RecipeProfile::build(r, items, inventory))
        .collect()
}
