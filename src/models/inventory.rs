use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Stock held for one item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StockLevel {
    pub available_quantity: f64,
    /// Price per kilogram paid for the stocked lot.
    #[serde(default)]
    pub cost_per_unit: f64,
}

/// Point-in-time view of raw-ingredient stock.
///
/// Never decremented during a planning run: every day of every school is
/// checked against the same quantities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventorySnapshot {
    levels: HashMap<String, StockLevel>,
}

impl InventorySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stock(mut self, item_id: impl Into<String>, available_quantity: f64) -> Self {
        self.insert(
            item_id,
            StockLevel {
                available_quantity,
                cost_per_unit: 0.0,
            },
        );
        self
    }

    pub fn insert(&mut self, item_id: impl Into<String>, level: StockLevel) {
        self.levels.insert(item_id.into(), level);
    }

    pub fn get(&self, item_id: &str) -> Option<&StockLevel> {
        self.levels.get(item_id)
    }

    /// Available quantity, 0 for items that are not stocked.
    pub fn available(&self, item_id: &str) -> f64 {
        self.levels
            .get(item_id)
            .map(|l| l.available_quantity)
            .unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
