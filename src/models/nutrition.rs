use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Nutrient content of an item per 100 g. Missing fields read as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionPer100g {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbohydrates: f64,
    pub fiber: f64,
}

/// Absolute nutrient totals (kcal and grams).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbohydrates: f64,
    pub fiber: f64,
}

impl Nutrition {
    /// Nutrients contributed by `grams` of an item.
    pub fn from_portion(per_100g: &NutritionPer100g, grams: f64) -> Self {
        let factor = grams / 100.0;
        Self {
            calories: per_100g.calories * factor,
            protein: per_100g.protein * factor,
            fat: per_100g.fat * factor,
            carbohydrates: per_100g.carbohydrates * factor,
            fiber: per_100g.fiber * factor,
        }
    }

    /// Calories to whole units, everything else to one decimal.
    pub fn rounded(&self) -> Self {
        Self {
            calories: self.calories.round(),
            protein: round1(self.protein),
            fat: round1(self.fat),
            carbohydrates: round1(self.carbohydrates),
            fiber: round1(self.fiber),
        }
    }

    pub fn divided_by(&self, divisor: f64) -> Self {
        if divisor <= 0.0 {
            return *self;
        }
        Self {
            calories: self.calories / divisor,
            protein: self.protein / divisor,
            fat: self.fat / divisor,
            carbohydrates: self.carbohydrates / divisor,
            fiber: self.fiber / divisor,
        }
    }

    pub fn is_finite(&self) -> bool {
        [
            self.calories,
            self.protein,
            self.fat,
            self.carbohydrates,
            self.fiber,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl Add for Nutrition {
    type Output = Nutrition;

    fn add(self, rhs: Nutrition) -> Nutrition {
        Nutrition {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            fat: self.fat + rhs.fat,
            carbohydrates: self.carbohydrates + rhs.carbohydrates,
            fiber: self.fiber + rhs.fiber,
        }
    }
}

impl AddAssign for Nutrition {
    fn add_assign(&mut self, rhs: Nutrition) {
        *self = *self + rhs;
    }
}

impl Sum for Nutrition {
    fn sum<I: Iterator<Item = Nutrition>>(iter: I) -> Nutrition {
        iter.fold(Nutrition::default(), Add::add)
    }
}
