use serde::{Deserialize, Serialize};

/// Per-meal nutrition targets. Every field is optional; an absent or
/// non-positive value means the criterion is not configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionalGoals {
    pub calories_per_meal: Option<f64>,
    pub protein_min: Option<f64>,
    pub fat_max: Option<f64>,
    pub carbohydrates_min: Option<f64>,
    pub fiber_min: Option<f64>,
}

impl NutritionalGoals {
    /// Values from `overrides` win where they are set.
    pub fn overlay(&self, overrides: &NutritionalGoals) -> NutritionalGoals {
        NutritionalGoals {
            calories_per_meal: overrides.calories_per_meal.or(self.calories_per_meal),
            protein_min: overrides.protein_min.or(self.protein_min),
            fat_max: overrides.fat_max.or(self.fat_max),
            carbohydrates_min: overrides.carbohydrates_min.or(self.carbohydrates_min),
            fiber_min: overrides.fiber_min.or(self.fiber_min),
        }
    }

    pub fn calories(&self) -> Option<f64> {
        configured(self.calories_per_meal)
    }

    pub fn protein(&self) -> Option<f64> {
        configured(self.protein_min)
    }

    pub fn fat(&self) -> Option<f64> {
        configured(self.fat_max)
    }

    pub fn carbohydrates(&self) -> Option<f64> {
        configured(self.carbohydrates_min)
    }

    pub fn fiber(&self) -> Option<f64> {
        configured(self.fiber_min)
    }

    pub fn is_empty(&self) -> bool {
        self.calories().is_none()
            && self.protein().is_none()
            && self.fat().is_none()
            && self.carbohydrates().is_none()
            && self.fiber().is_none()
    }

    fn values(&self) -> [Option<f64>; 5] {
        [
            self.calories_per_meal,
            self.protein_min,
            self.fat_max,
            self.carbohydrates_min,
            self.fiber_min,
        ]
    }

    /// True when no configured value is negative or non-finite.
    pub fn is_valid(&self) -> bool {
        self.values()
            .iter()
            .flatten()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

fn configured(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

/// A consuming site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct School {
    pub id: String,
    pub name: String,
    pub estimated_meals_per_day: u32,
    #[serde(default)]
    pub nutritional_requirement: NutritionalGoals,
}

impl School {
    pub fn new(id: impl Into<String>, name: impl Into<String>, estimated_meals_per_day: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            estimated_meals_per_day,
            nutritional_requirement: NutritionalGoals::default(),
        }
    }

    pub fn with_requirement(mut self, requirement: NutritionalGoals) -> Self {
        self.nutritional_requirement = requirement;
        self
    }

    /// Meals to cook per day, never less than one.
    pub fn meals_needed(&self) -> u32 {
        self.estimated_meals_per_day.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_prefers_overrides() {
        let base = NutritionalGoals {
            calories_per_meal: Some(600.0),
            protein_min: Some(20.0),
            ..Default::default()
        };
        let overrides = NutritionalGoals {
            protein_min: Some(25.0),
            fat_max: Some(20.0),
            ..Default::default()
        };
        let goals = base.overlay(&overrides);
        assert_eq!(goals.calories_per_meal, Some(600.0));
        assert_eq!(goals.protein_min, Some(25.0));
        assert_eq!(goals.fat_max, Some(20.0));
        assert_eq!(goals.fiber_min, None);
    }

    #[test]
    fn test_non_positive_is_unconfigured() {
        let goals = NutritionalGoals {
            calories_per_meal: Some(0.0),
            ..Default::default()
        };
        assert!(goals.calories().is_none());
        assert!(goals.is_empty());
    }

    #[test]
    fn test_meals_needed_floor() {
        assert_eq!(School::new("s", "S", 0).meals_needed(), 1);
        assert_eq!(School::new("s", "S", 120).meals_needed(), 120);
    }
}
