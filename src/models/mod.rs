mod inventory;
mod nutrition;
mod plan;
mod recipe;
mod request;
mod school;

pub use inventory::{InventorySnapshot, StockLevel};
pub use nutrition::{Nutrition, NutritionPer100g};
pub use plan::{DayOutcome, DayPlan, PlanSet, SelectedRecipe};
pub use recipe::{Difficulty, Ingredient, Item, Recipe, Unit};
pub use request::{BudgetConstraints, Preferences, PlanningRequest};
pub use school::{NutritionalGoals, School};
