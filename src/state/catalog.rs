use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::{InventorySnapshot, Item, Recipe, School};

/// Read-only queries the planner runs against its collaborators.
pub trait ReferenceData {
    fn recipes(&self) -> Result<&[Recipe]>;
    fn items(&self) -> Result<&[Item]>;
    fn schools(&self) -> Result<&[School]>;
    fn inventory(&self) -> Result<&InventorySnapshot>;
}

/// Serialized form of all reference data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub items: Vec<Item>,
    pub recipes: Vec<Recipe>,
    pub schools: Vec<School>,
    pub inventory: InventorySnapshot,
}

/// In-memory reference data, deduplicated by id (last occurrence wins,
/// first position kept).
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    recipes: Vec<Recipe>,
    schools: Vec<School>,
    inventory: InventorySnapshot,
}

fn dedup_by_id<T>(values: Vec<T>, id: impl Fn(&T) -> &str) -> Vec<T> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<T> = Vec::with_capacity(values.len());
    for value in values {
        match positions.get(id(&value)) {
            Some(&pos) => out[pos] = value,
            None => {
                positions.insert(id(&value).to_string(), out.len());
                out.push(value);
            }
        }
    }
    out
}

impl Catalog {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            items: dedup_by_id(dataset.items, |i| &i.id),
            recipes: dedup_by_id(dataset.recipes, |r| &r.id),
            schools: dedup_by_id(dataset.schools, |s| &s.id),
            inventory: dataset.inventory,
        }
    }

    pub fn get_item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn get_recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn get_school(&self, id: &str) -> Option<&School> {
        self.schools.iter().find(|s| s.id == id)
    }

    pub fn to_dataset(&self) -> Dataset {
        Dataset {
            items: self.items.clone(),
            recipes: self.recipes.clone(),
            schools: self.schools.clone(),
            inventory: self.inventory.clone(),
        }
    }
}

fn non_empty<'a, T>(values: &'a [T], what: &str) -> Result<&'a [T]> {
    if values.is_empty() {
        Err(PlannerError::UpstreamData(format!("no {} available", what)))
    } else {
        Ok(values)
    }
}

impl ReferenceData for Catalog {
    fn recipes(&self) -> Result<&[Recipe]> {
        non_empty(&self.recipes, "recipes")
    }

    fn items(&self) -> Result<&[Item]> {
        non_empty(&self.items, "items")
    }

    fn schools(&self) -> Result<&[School]> {
        non_empty(&self.schools, "schools")
    }

    fn inventory(&self) -> Result<&InventorySnapshot> {
        if self.inventory.is_empty() {
            return Err(PlannerError::UpstreamData("no inventory available".to_string()));
        }
        Ok(&self.inventory)
    }
}

/// Index items by id for recipe profiling.
pub fn index_items(items: &[Item]) -> HashMap<String, Item> {
    items.iter().map(|i| (i.id.clone(), i.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_keeps_position_last_wins() {
        let dataset = Dataset {
            items: vec![
                Item::new("a", "First A", 1.0),
                Item::new("b", "B", 2.0),
                Item::new("a", "Second A", 3.0),
            ],
            ..Default::default()
        };
        let catalog = Catalog::new(dataset);
        let items = catalog.items().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Second A");
        assert_eq!(items[1].id, "b");
        assert_eq!(catalog.get_item("a").unwrap().unit_price, 3.0);
    }

    #[test]
    fn test_empty_collections_are_upstream_errors() {
        let catalog = Catalog::new(Dataset::default());
        assert!(matches!(catalog.recipes(), Err(PlannerError::UpstreamData(_))));
        assert!(matches!(catalog.schools(), Err(PlannerError::UpstreamData(_))));
        assert!(matches!(catalog.inventory(), Err(PlannerError::UpstreamData(_))));

        let stocked = Catalog::new(Dataset {
            inventory: InventorySnapshot::new().with_stock("rice", 1.0),
            ..Default::default()
        });
        assert_eq!(stocked.inventory().unwrap().len(), 1);
    }
}
