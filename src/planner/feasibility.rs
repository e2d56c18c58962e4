use serde::Serialize;

use crate::models::{InventorySnapshot, Recipe};
use crate::planner::calculations::RecipeProfile;

/// True when every ingredient has at least its required quantity in stock.
pub fn is_feasible(recipe: &Recipe, inventory: &InventorySnapshot) -> bool {
    recipe
        .ingredients
        .iter()
        .all(|i| inventory.available(&i.item_id) >= i.quantity)
}

/// Keep the profiles whose recipe can be produced, preserving order.
pub fn filter_feasible<'p, 'a>(
    profiles: &'p [RecipeProfile<'a>],
    inventory: &InventorySnapshot,
) -> Vec<&'p RecipeProfile<'a>> {
    profiles
        .iter()
        .filter(|p| is_feasible(p.recipe, inventory))
        .collect()
}

/// Stock coverage of each ingredient use, `min(available / required, 1)`.
pub fn ingredient_coverage<'r>(
    recipe: &'r Recipe,
    inventory: &'r InventorySnapshot,
) -> impl Iterator<Item = f64> + 'r {
    recipe.ingredients.iter().map(move |i| {
        if i.quantity <= 0.0 {
            1.0
        } else {
            (inventory.available(&i.item_id) / i.quantity).min(1.0)
        }
    })
}

/// An ingredient the snapshot cannot cover.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shortfall {
    pub item_id: String,
    pub required: f64,
    pub available: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeasibilityEntry {
    pub recipe_id: String,
    pub name: String,
    pub feasible: bool,
    pub shortfalls: Vec<Shortfall>,
}

/// Feasibility of every recipe with the items that block it.
pub fn feasibility_report(recipes: &[Recipe], inventory: &InventorySnapshot) -> Vec<FeasibilityEntry> {
    recipes
        .iter()
        .map(|recipe| {
            let shortfalls: Vec<Shortfall> = recipe
                .ingredients
                .iter()
                .filter_map(|i| {
                    let available = inventory.available(&i.item_id);
                    (available < i.quantity).then(|| Shortfall {
                        item_id: i.item_id.clone(),
                        required: i.quantity,
                        available,
                    })
                })
                .collect();

            FeasibilityEntry {
                recipe_id: recipe.id.clone(),
                name: recipe.name.clone(),
                feasible: shortfalls.is_empty(),
                shortfalls,
            }
        })
        .collect()
}
