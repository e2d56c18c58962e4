use serde::{Deserialize, Serialize};

use crate::models::NutritionPer100g;

/// Preparation difficulty declared on a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Multiplier applied by the complexity estimate.
    pub fn multiplier(self) -> f64 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 1.5,
            Difficulty::Hard => 2.0,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

/// Unit an ingredient quantity is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[serde(alias = "gram", alias = "grams")]
    G,
    #[serde(alias = "kilogram")]
    Kg,
    Ml,
    L,
    #[serde(alias = "pcs", alias = "unit")]
    Piece,
}

impl Unit {
    /// Grams per one unit. Liquids are taken at water density and pieces at
    /// a nominal 100 g.
    pub fn grams_per_unit(self) -> f64 {
        match self {
            Unit::G | Unit::Ml => 1.0,
            Unit::Kg | Unit::L => 1000.0,
            Unit::Piece => 100.0,
        }
    }

    pub fn to_grams(self, quantity: f64) -> f64 {
        quantity * self.grams_per_unit()
    }
}

impl Default for Unit {
    fn default() -> Self {
        Unit::G
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub item_id: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: Unit,
}

impl Ingredient {
    pub fn new(item_id: impl Into<String>, quantity: f64, unit: Unit) -> Self {
        Self {
            item_id: item_id.into(),
            quantity,
            unit,
        }
    }

    pub fn grams(&self) -> f64 {
        self.unit.to_grams(self.quantity)
    }
}

/// A dish that can be placed on a day plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Number of servings the ingredient list yields.
    #[serde(default = "default_serving_size")]
    pub serving_size: u32,
    /// Minutes.
    #[serde(default)]
    pub prep_time: u32,
    /// Minutes.
    #[serde(default)]
    pub cook_time: u32,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

fn default_serving_size() -> u32 {
    1
}

impl Recipe {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            serving_size: 1,
            prep_time: 0,
            cook_time: 0,
            difficulty: Difficulty::Easy,
            ingredients: Vec::new(),
        }
    }

    pub fn with_ingredient(mut self, item_id: impl Into<String>, quantity: f64, unit: Unit) -> Self {
        self.ingredients.push(Ingredient::new(item_id, quantity, unit));
        self
    }

    pub fn with_times(mut self, prep_time: u32, cook_time: u32) -> Self {
        self.prep_time = prep_time;
        self.cook_time = cook_time;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_serving_size(mut self, serving_size: u32) -> Self {
        self.serving_size = serving_size;
        self
    }

    /// Prep plus cook minutes, saturating at `u32::MAX`.
    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }

    pub fn uses_item(&self, item_id: &str) -> bool {
        self.ingredients.iter().any(|i| i.item_id == item_id)
    }
}

/// A raw ingredient as stocked by the kitchen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    /// Price per kilogram.
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default)]
    pub nutrition_per_100g: NutritionPer100g,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>, unit_price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: String::new(),
            unit_price,
            nutrition_per_100g: NutritionPer100g::default(),
        }
    }

    pub fn with_nutrition(mut self, nutrition: NutritionPer100g) -> Self {
        self.nutrition_per_100g = nutrition;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversion() {
        assert_eq!(Unit::Kg.to_grams(1.5), 1500.0);
        assert_eq!(Unit::G.to_grams(250.0), 250.0);
        assert_eq!(Unit::L.to_grams(0.2), 200.0);
        assert_eq!(Unit::Piece.to_grams(2.0), 200.0);
    }

    #[test]
    fn test_recipe_deserialize_defaults() {
        let json = r#"{
            "id": "r1", "name": "Rice Bowl", "category": "main",
            "difficulty": "HARD",
            "ingredients": [{"item_id": "rice", "quantity": 0.5, "unit": "kg"}]
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.serving_size, 1);
        assert_eq!(recipe.difficulty, Difficulty::Hard);
        assert_eq!(recipe.ingredients[0].grams(), 500.0);
        assert!(recipe.uses_item("rice"));
    }

    #[test]
    fn test_difficulty_multiplier() {
        assert_eq!(Difficulty::Easy.multiplier(), 1.0);
        assert_eq!(Difficulty::Medium.multiplier(), 1.5);
        assert_eq!(Difficulty::Hard.multiplier(), 2.0);
    }

    #[test]
    fn test_total_time_saturates() {
        let recipe = Recipe::new("slow", "Slow", "stew").with_times(u32::MAX, 1);
        assert_eq!(recipe.total_time(), u32::MAX);
        assert_eq!(Recipe::new("r", "R", "main").with_times(10, 25).total_time(), 35);
    }
}
