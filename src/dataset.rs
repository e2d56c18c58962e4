use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::{
    Difficulty, InventorySnapshot, Item, NutritionPer100g, NutritionalGoals, Recipe, School,
    StockLevel, Unit,
};
use crate::state::Dataset;

/// Shape of a synthetic dataset.
#[derive(Debug, Clone)]
pub struct DatasetShape {
    pub schools: usize,
    pub recipes: usize,
    pub ingredients_per_recipe: (usize, usize),
    /// Chance that an item is out of stock.
    pub stockout_rate: f64,
}

impl Default for DatasetShape {
    fn default() -> Self {
        Self {
            schools: 3,
            recipes: 24,
            ingredients_per_recipe: (2, 6),
            stockout_rate: 0.1,
        }
    }
}

/// (id, category, price per kg, kcal, protein, fat, carbohydrates, fiber)
type ItemRow = (&'static str, &'static str, f64, f64, f64, f64, f64, f64);

const ITEM_TABLE: &[ItemRow] = &[
    ("rice", "grain", 18_000.0, 130.0, 2.7, 0.3, 28.0, 0.4),
    ("pasta", "grain", 25_000.0, 158.0, 5.8, 0.9, 31.0, 1.8),
    ("bread", "grain", 30_000.0, 265.0, 9.0, 3.2, 49.0, 2.7),
    ("potato", "vegetable", 12_000.0, 77.0, 2.0, 0.1, 17.0, 2.2),
    ("carrot", "vegetable", 15_000.0, 41.0, 0.9, 0.2, 10.0, 2.8),
    ("cabbage", "vegetable", 10_000.0, 25.0, 1.3, 0.1, 5.8, 2.5),
    ("tomato", "vegetable", 22_000.0, 18.0, 0.9, 0.2, 3.9, 1.2),
    ("beans", "legume", 35_000.0, 127.0, 8.7, 0.5, 22.8, 6.4),
    ("lentils", "legume", 40_000.0, 116.0, 9.0, 0.4, 20.0, 7.9),
    ("chicken", "protein", 95_000.0, 165.0, 31.0, 3.6, 0.0, 0.0),
    ("beef", "protein", 180_000.0, 250.0, 26.0, 15.0, 0.0, 0.0),
    ("fish", "protein", 120_000.0, 206.0, 22.0, 12.0, 0.0, 0.0),
    ("egg", "protein", 60_000.0, 155.0, 13.0, 11.0, 1.1, 0.0),
    ("milk", "dairy", 20_000.0, 61.0, 3.2, 3.3, 4.8, 0.0),
    ("cheese", "dairy", 150_000.0, 402.0, 25.0, 33.0, 1.3, 0.0),
    ("banana", "fruit", 20_000.0, 89.0, 1.1, 0.3, 23.0, 2.6),
    ("apple", "fruit", 35_000.0, 52.0, 0.3, 0.2, 14.0, 2.4),
    ("oil", "fat", 45_000.0, 884.0, 0.0, 100.0, 0.0, 0.0),
];

const CATEGORIES: &[&str] = &["main", "soup", "side", "salad", "dessert"];
const ADJECTIVES: &[&str] = &["Hearty", "Spiced", "Garden", "Baked", "Creamy", "Fresh", "Golden"];
const DISHES: &[&str] = &["Stew", "Bowl", "Bake", "Curry", "Plate", "Medley", "Casserole"];

fn items() -> Vec<Item> {
    ITEM_TABLE
        .iter()
        .map(|&(id, category, price, calories, protein, fat, carbohydrates, fiber)| Item {
            id: id.to_string(),
            name: capitalize(id),
            category: category.to_string(),
            unit_price: price,
            nutrition_per_100g: NutritionPer100g {
                calories,
                protein,
                fat,
                carbohydrates,
                fiber,
            },
        })
        .collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Build a random but internally consistent dataset. The same seed gives
/// the same dataset.
pub fn generate_dataset(shape: &DatasetShape, rng: &mut impl Rng) -> Dataset {
    let items = items();

    let recipes: Vec<Recipe> = (0..shape.recipes)
        .map(|i| {
            let category = CATEGORIES[i % CATEGORIES.len()];
            let name = format!(
                "{} {} {}",
                ADJECTIVES.choose(rng).copied().unwrap_or("Plain"),
                capitalize(category),
                DISHES.choose(rng).copied().unwrap_or("Dish"),
            );
            let (lo, hi) = shape.ingredients_per_recipe;
            let count = rng.gen_range(lo.max(1)..=hi.max(lo.max(1))).min(items.len());
            let mut recipe = Recipe::new(format!("recipe-{:03}", i + 1), name, category)
                .with_serving_size(rng.gen_range(4..=12))
                .with_times(rng.gen_range(5..=40), rng.gen_range(0..=90))
                .with_difficulty(match rng.gen_range(0..3) {
                    0 => Difficulty::Easy,
                    1 => Difficulty::Medium,
                    _ => Difficulty::Hard,
                });
            for item in items.choose_multiple(rng, count) {
                let grams = (rng.gen_range(100.0..=800.0_f64) / 10.0).round() * 10.0;
                recipe = recipe.with_ingredient(item.id.clone(), grams, Unit::G);
            }
            recipe
        })
        .collect();

    let schools: Vec<School> = (0..shape.schools)
        .map(|i| {
            School::new(
                format!("school-{:02}", i + 1),
                format!("School {}", i + 1),
                rng.gen_range(80..=400),
            )
            .with_requirement(NutritionalGoals {
                calories_per_meal: Some(rng.gen_range(550.0..=750.0_f64).round()),
                protein_min: Some(rng.gen_range(15.0..=25.0_f64).round()),
                fat_max: Some(rng.gen_range(20.0..=30.0_f64).round()),
                carbohydrates_min: None,
                fiber_min: None,
            })
        })
        .collect();

    let mut inventory = InventorySnapshot::new();
    for item in &items {
        let available_quantity = if rng.gen_bool(shape.stockout_rate.clamp(0.0, 1.0)) {
            0.0
        } else {
            (rng.gen_range(500.0..=20_000.0_f64) / 100.0).round() * 100.0
        };
        inventory.insert(
            item.id.clone(),
            StockLevel {
                available_quantity,
                cost_per_unit: item.unit_price,
            },
        );
    }

    Dataset {
        items,
        recipes,
        schools,
        inventory,
    }
}
