use crate::error::{PlannerError, Result};
use crate::models::DayPlan;

/// Finalized day plans of one school, oldest first.
///
/// Owned by the school's planning fold: each day reads it for diversity
/// penalties and hands it back with the new plan appended.
#[derive(Debug, Clone)]
pub struct SchoolHistory {
    school_id: String,
    plans: Vec<DayPlan>,
}

impl SchoolHistory {
    pub fn new(school_id: impl Into<String>) -> Self {
        Self {
            school_id: school_id.into(),
            plans: Vec::new(),
        }
    }

    pub fn school_id(&self) -> &str {
        &self.school_id
    }

    /// The only day that may be recorded next.
    pub fn next_day(&self) -> u32 {
        self.plans.len() as u32 + 1
    }

    pub fn has_served(&self, recipe_id: &str) -> bool {
        self.plans.iter().any(|p| p.contains_recipe(recipe_id))
    }

    /// Times any recipe of `category` has been selected.
    pub fn category_count(&self, category: &str) -> usize {
        self.plans
            .iter()
            .flat_map(|p| p.categories())
            .filter(|c| *c == category)
            .count()
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.category_count(category) > 0
    }

    /// Append a finalized plan. Plans must arrive for this school in
    /// consecutive day order.
    pub fn record(mut self, plan: DayPlan) -> Result<Self> {
        if plan.school_id != self.school_id || plan.day != self.next_day() {
            return Err(PlannerError::SchoolFailed {
                school_id: self.school_id.clone(),
                day: plan.day,
                message: format!(
                    "expected day {} of school {}, got day {} of school {}",
                    self.next_day(),
                    self.school_id,
                    plan.day,
                    plan.school_id
                ),
            });
        }
        self.plans.push(plan);
        Ok(self)
    }

    pub fn plans(&self) -> &[DayPlan] {
        &self.plans
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    pub fn into_plans(self) -> Vec<DayPlan> {
        self.plans
    }
}
