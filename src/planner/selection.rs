use std::cmp::Ordering;

use crate::planner::scoring::ScoredRecipe;

/// Outcome of the greedy walk.
#[derive(Debug, Clone)]
pub struct Selection<'p, 'a> {
    pub recipes: Vec<ScoredRecipe<'p, 'a>>,
    pub total_cost: f64,
    /// True when nothing fit the budget and the top recipe was taken anyway.
    pub forced: bool,
}

impl Selection<'_, '_> {
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// Budget-constrained greedy selection.
///
/// Candidates are stable-sorted by score (highest first) and accepted while
/// the running cost stays within `budget_cap`, up to `max_recipes`. If none
/// fit, the single best candidate is forced in so a non-empty pool never
/// yields an empty selection.
pub fn select_recipes<'p, 'a>(
    mut candidates: Vec<ScoredRecipe<'p, 'a>>,
    budget_cap: f64,
    max_recipes: usize,
) -> Selection<'p, 'a> {
    candidates.sort_by(|a, b| b.score().partial_cmp(&a.score()).unwrap_or(Ordering::Equal));

    let mut recipes = Vec::new();
    let mut total_cost = 0.0;

    for candidate in &candidates {
        if recipes.len() >= max_recipes {
            break;
        }
        if total_cost + candidate.batch_cost <= budget_cap {
            total_cost += candidate.batch_cost;
            recipes.push(candidate.clone());
        }
    }

    if recipes.is_empty() && max_recipes > 0 {
        if let Some(top) = candidates.into_iter().next() {
            tracing::debug!(
                recipe = %top.profile.id(),
                cost = top.batch_cost,
                budget_cap,
                "no recipe fits the budget, forcing top candidate"
            );
            return Selection {
                total_cost: top.batch_cost,
                recipes: vec![top],
                forced: true,
            };
        }
    }

    Selection {
        recipes,
        total_cost,
        forced: false,
    }
}
