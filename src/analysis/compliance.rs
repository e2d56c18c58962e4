use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Nutrition, NutritionalGoals, PlanSet};
use crate::planner::constants::*;

/// Inclusive target band for one value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutrientRange {
    pub min: f64,
    pub max: f64,
}

impl NutrientRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn from_pair(pair: (f64, f64)) -> Self {
        Self::new(pair.0, pair.1)
    }

    /// 1 inside the band, otherwise 1 minus the relative distance to the
    /// nearest bound, floored at 0.
    pub fn score(&self, value: f64) -> f64 {
        if value < self.min {
            if self.min <= 0.0 {
                return 1.0;
            }
            (1.0 - (self.min - value) / self.min).max(0.0)
        } else if value > self.max {
            if self.max <= 0.0 {
                return 0.0;
            }
            (1.0 - (value - self.max) / self.max).max(0.0)
        } else {
            1.0
        }
    }
}

/// Per-meal bands checked for each day plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComplianceRanges {
    pub calories: NutrientRange,
    pub protein: NutrientRange,
    pub fat: NutrientRange,
    pub carbohydrates: NutrientRange,
}

impl Default for ComplianceRanges {
    fn default() -> Self {
        Self {
            calories: NutrientRange::from_pair(DEFAULT_CALORIE_RANGE),
            protein: NutrientRange::from_pair(DEFAULT_PROTEIN_RANGE),
            fat: NutrientRange::from_pair(DEFAULT_FAT_RANGE),
            carbohydrates: NutrientRange::from_pair(DEFAULT_CARBOHYDRATE_RANGE),
        }
    }
}

impl ComplianceRanges {
    /// Bands derived from configured goals; reference bands elsewhere.
    pub fn from_goals(goals: &NutritionalGoals) -> Self {
        let defaults = Self::default();
        Self {
            calories: goals
                .calories()
                .map(|t| {
                    NutrientRange::new(
                        t * (1.0 - CALORIE_TARGET_TOLERANCE),
                        t * (1.0 + CALORIE_TARGET_TOLERANCE),
                    )
                })
                .unwrap_or(defaults.calories),
            protein: goals
                .protein()
                .map(|min| NutrientRange::new(min, min * 2.0))
                .unwrap_or(defaults.protein),
            fat: goals
                .fat()
                .map(|max| NutrientRange::new(0.0, max))
                .unwrap_or(defaults.fat),
            carbohydrates: goals
                .carbohydrates()
                .map(|min| NutrientRange::new(min, min * 2.0))
                .unwrap_or(defaults.carbohydrates),
        }
    }
}

/// Share of calories from protein, fat and carbohydrate scored against
/// their ideal bands, averaged. 0 when the macros carry no energy.
pub fn macro_balance_score(nutrition: &Nutrition) -> f64 {
    let protein = nutrition.protein * PROTEIN_KCAL_PER_G;
    let fat = nutrition.fat * FAT_KCAL_PER_G;
    let carbohydrates = nutrition.carbohydrates * CARBOHYDRATE_KCAL_PER_G;
    let total = protein + fat + carbohydrates;
    if total <= 0.0 {
        return 0.0;
    }

    let scores = [
        NutrientRange::from_pair(PROTEIN_ENERGY_BAND).score(protein / total * 100.0),
        NutrientRange::from_pair(FAT_ENERGY_BAND).score(fat / total * 100.0),
        NutrientRange::from_pair(CARBOHYDRATE_ENERGY_BAND).score(carbohydrates / total * 100.0),
    ];
    scores.iter().sum::<f64>() / scores.len() as f64
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCompliance {
    pub school_id: String,
    pub day: u32,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbohydrates: f64,
    /// Mean of the four nutrient scores.
    pub overall: f64,
    pub macro_balance: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NutritionalAnalysis {
    pub days: Vec<DayCompliance>,
    pub average_compliance: f64,
    pub average_calories_compliance: f64,
    pub average_protein_compliance: f64,
    pub average_fat_compliance: f64,
    pub average_carbohydrates_compliance: f64,
    pub average_macro_balance: f64,
    /// Mean per-meal nutrition over all day plans.
    pub average_nutrition: Nutrition,
}

pub fn day_compliance(
    school_id: &str,
    day: u32,
    nutrition: &Nutrition,
    ranges: &ComplianceRanges,
) -> DayCompliance {
    let calories = ranges.calories.score(nutrition.calories);
    let protein = ranges.protein.score(nutrition.protein);
    let fat = ranges.fat.score(nutrition.fat);
    let carbohydrates = ranges.carbohydrates.score(nutrition.carbohydrates);

    DayCompliance {
        school_id: school_id.to_string(),
        day,
        calories,
        protein,
        fat,
        carbohydrates,
        overall: (calories + protein + fat + carbohydrates) / 4.0,
        macro_balance: macro_balance_score(nutrition),
    }
}

/// Score every day plan against its school's goals.
///
/// Schools missing from `goals_by_school` are scored against the reference
/// bands.
pub fn analyze_nutrition(
    plan_set: &PlanSet,
    goals_by_school: &HashMap<String, NutritionalGoals>,
) -> NutritionalAnalysis {
    if plan_set.is_empty() {
        return NutritionalAnalysis::default();
    }

    let days: Vec<DayCompliance> = plan_set
        .iter()
        .map(|plan| {
            let ranges = goals_by_school
                .get(&plan.school_id)
                .map(ComplianceRanges::from_goals)
                .unwrap_or_default();
            day_compliance(&plan.school_id, plan.day, &plan.nutritional_profile, &ranges)
        })
        .collect();

    let n = days.len() as f64;
    let mean = |f: fn(&DayCompliance) -> f64| days.iter().map(f).sum::<f64>() / n;
    let total: Nutrition = plan_set.iter().map(|p| p.nutritional_profile).sum();

    NutritionalAnalysis {
        average_compliance: mean(|d| d.overall),
        average_calories_compliance: mean(|d| d.calories),
        average_protein_compliance: mean(|d| d.protein),
        average_fat_compliance: mean(|d| d.fat),
        average_carbohydrates_compliance: mean(|d| d.carbohydrates),
        average_macro_balance: mean(|d| d.macro_balance),
        average_nutrition: total.divided_by(n).rounded(),
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_score_partial_credit() {
        let range = NutrientRange::new(100.0, 200.0);
        assert_eq!(range.score(150.0), 1.0);
        assert_eq!(range.score(100.0), 1.0);
        assert!((range.score(80.0) - 0.8).abs() < 1e-9);
        assert!((range.score(250.0) - 0.75).abs() < 1e-9);
        assert_eq!(range.score(500.0), 0.0);
        assert_eq!(range.score(0.0), 0.0);
    }

    #[test]
    fn test_ranges_from_goals() {
        let goals = NutritionalGoals {
            calories_per_meal: Some(600.0),
            fat_max: Some(20.0),
            ..Default::default()
        };
        let ranges = ComplianceRanges::from_goals(&goals);
        assert!((ranges.calories.min - 540.0).abs() < 1e-9);
        assert!((ranges.calories.max - 660.0).abs() < 1e-9);
        assert_eq!(ranges.fat, NutrientRange::new(0.0, 20.0));
        assert_eq!(ranges.protein, NutrientRange::new(15.0, 35.0));
    }

    #[test]
    fn test_macro_balance_ideal() {
        // protein 20%, fat 30%, carbs 50% of 1000 kcal
        let n = Nutrition {
            calories: 1000.0,
            protein: 50.0,
            fat: 1000.0 * 0.3 / 9.0,
            carbohydrates: 125.0,
            fiber: 0.0,
        };
        assert!((macro_balance_score(&n) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_macro_balance_empty() {
        assert_eq!(macro_balance_score(&Nutrition::default()), 0.0);
    }

    #[test]
    fn test_day_compliance_mean_of_four() {
        let n = Nutrition {
            calories: 650.0,
            protein: 25.0,
            fat: 20.0,
            carbohydrates: 0.0,
            fiber: 0.0,
        };
        let c = day_compliance("s1", 1, &n, &ComplianceRanges::default());
        assert_eq!(c.calories, 1.0);
        assert_eq!(c.protein, 1.0);
        assert_eq!(c.fat, 1.0);
        assert_eq!(c.carbohydrates, 0.0);
        assert!((c.overall - 0.75).abs() < 1e-9);
    }
}
