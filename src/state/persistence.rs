use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::models::{PlanSet, PlanningRequest};
use crate::state::catalog::{Catalog, Dataset};

/// Load reference data from a JSON dataset file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    let dataset: Dataset = serde_json::from_str(&content)?;
    Ok(Catalog::new(dataset))
}

pub fn save_dataset<P: AsRef<Path>>(path: P, dataset: &Dataset) -> Result<()> {
    write_json(path, dataset)
}

pub fn load_request<P: AsRef<Path>>(path: P) -> Result<PlanningRequest> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Pretty-print any serializable value to a file.
pub fn write_json<P: AsRef<Path>, T: Serialize + ?Sized>(path: P, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

/// One CSV row per day plan.
pub fn write_day_plans_csv<P: AsRef<Path>>(path: P, plan_set: &PlanSet) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "school_id",
        "day",
        "date",
        "recipes",
        "estimated_cost",
        "cost_per_meal",
        "calories",
        "protein",
        "fat",
        "carbohydrates",
        "fiber",
        "diversity_score",
        "feasibility_score",
    ])?;

    for plan in plan_set.iter() {
        let recipes: Vec<&str> = plan
            .selected_recipes
            .iter()
            .map(|r| r.recipe_id.as_str())
            .collect();
        let n = &plan.nutritional_profile;
        wtr.write_record([
            plan.school_id.clone(),
            plan.day.to_string(),
            plan.date.to_string(),
            recipes.join(";"),
            format!("{:.2}", plan.estimated_cost),
            format!("{:.2}", plan.cost_per_meal()),
            format!("{:.0}", n.calories),
            format!("{:.1}", n.protein),
            format!("{:.1}", n.fat),
            format!("{:.1}", n.carbohydrates),
            format!("{:.1}", n.fiber),
            format!("{:.3}", plan.diversity_score),
            format!("{:.3}", plan.feasibility_score),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayOutcome, DayPlan};
    use crate::state::catalog::ReferenceData;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_catalog_from_json() {
        let json = r#"{
            "items": [{"id": "rice", "name": "Rice", "unit_price": 2000,
                       "nutrition_per_100g": {"calories": 130}}],
            "recipes": [{"id": "r1", "name": "Rice", "category": "main",
                         "ingredients": [{"item_id": "rice", "quantity": 1, "unit": "kg"}]}],
            "schools": [{"id": "s1", "name": "North", "estimated_meals_per_day": 100}],
            "inventory": {"rice": {"available_quantity": 20}}
        }"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.recipes().unwrap().len(), 1);
        assert_eq!(catalog.inventory().unwrap().available("rice"), 20.0);
        assert_eq!(catalog.get_school("s1").unwrap().estimated_meals_per_day, 100);
    }

    #[test]
    fn test_dataset_roundtrip() {
        let json = r#"{"items": [{"id": "a", "name": "A"}]}"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        let catalog = load_catalog(file.path()).unwrap();

        let out = NamedTempFile::new().unwrap();
        save_dataset(out.path(), &catalog.to_dataset()).unwrap();
        let reloaded = load_catalog(out.path()).unwrap();
        assert_eq!(reloaded.get_item("a").unwrap().name, "A");
    }

    #[test]
    fn test_csv_export() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let plans = PlanSet::new(vec![DayPlan::empty(
            "s1",
            1,
            date,
            10,
            DayOutcome::NoFeasibleRecipe,
        )]);
        let out = NamedTempFile::new().unwrap();
        write_day_plans_csv(out.path(), &plans).unwrap();

        let content = std::fs::read_to_string(out.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("school_id,day,date"));
        assert!(lines[1].starts_with("s1,1,2026-01-05,,0.00"));
    }
}
