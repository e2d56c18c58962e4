use std::collections::HashMap;
use std::fs;

use assert_float_eq::*;
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::tempdir;

use school_meal_planner_rs::analysis::{
    CostTrend, Priority, RecommendationInputs, RecommendationKind, analyze_costs, analyze_plan,
    generate_recommendations,
};
use school_meal_planner_rs::config::{AnalysisConfig, PlannerConfig};
use school_meal_planner_rs::dataset::{DatasetShape, generate_dataset};
use school_meal_planner_rs::generate_meal_plan;
use school_meal_planner_rs::models::{
    DayOutcome, DayPlan, Nutrition, PlanSet, PlanningRequest, SelectedRecipe,
};
use school_meal_planner_rs::state::{
    Catalog, load_catalog, save_dataset, write_day_plans_csv, write_json,
};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 4, 5 + day).unwrap()
}

fn served_day(school: &str, day: u32, meals: u32, cost_per_meal: f64, recipe: &str) -> DayPlan {
    let mut plan = DayPlan::empty(school, day, date(day), meals, DayOutcome::Planned);
    let nutrition = Nutrition {
        calories: 650.0,
        protein: 25.0,
        fat: 20.0,
        carbohydrates: 85.0,
        fiber: 6.0,
    };
    plan.selected_recipes = vec![SelectedRecipe {
        recipe_id: recipe.to_string(),
        name: recipe.to_string(),
        category: format!("{}-cat", recipe),
        score: 0.7,
        cost_per_meal,
        batch_cost: cost_per_meal * meals as f64,
        nutrition,
        total_time: 40,
    }];
    plan.estimated_cost = cost_per_meal * meals as f64;
    plan.nutritional_profile = nutrition;
    plan.diversity_score = 1.0;
    plan.feasibility_score = 1.0;
    plan
}

#[test]
fn test_cost_overrun_is_high_priority_and_cites_overrun() {
    let inputs = RecommendationInputs {
        compliance: 0.95,
        average_cost_per_meal: 42_000.0,
        target_cost_per_meal: 35_000.0,
        diversity: 0.9,
        average_feasibility: 0.95,
    };
    let recs = generate_recommendations(&inputs, &AnalysisConfig::default());

    let cost = recs
        .iter()
        .find(|r| r.kind == RecommendationKind::CostOverrun)
        .expect("cost recommendation");
    assert_eq!(cost.priority, Priority::High);
    assert!(cost.message.contains("20.0%"), "message was: {}", cost.message);
}

#[test]
fn test_healthy_plan_has_no_gap_recommendations() {
    let inputs = RecommendationInputs {
        compliance: 0.95,
        average_cost_per_meal: 20_000.0,
        target_cost_per_meal: 35_000.0,
        diversity: 0.9,
        average_feasibility: 0.95,
    };
    let recs = generate_recommendations(&inputs, &AnalysisConfig::default());
    assert!(recs.iter().all(|r| r.kind != RecommendationKind::CostOverrun));
    assert!(recs.iter().all(|r| r.kind != RecommendationKind::NutritionGap));
    assert!(recs.iter().all(|r| r.kind != RecommendationKind::DiversityGap));
}

#[test]
fn test_recommendations_are_capped() {
    let inputs = RecommendationInputs {
        compliance: 0.1,
        average_cost_per_meal: 90_000.0,
        target_cost_per_meal: 35_000.0,
        diversity: 0.1,
        average_feasibility: 0.1,
    };
    let config = AnalysisConfig {
        max_recommendations: 2,
        ..Default::default()
    };
    let recs = generate_recommendations(&inputs, &config);
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].kind, RecommendationKind::NutritionGap);
    assert_eq!(recs[1].kind, RecommendationKind::CostOverrun);
}

#[test]
fn test_cost_average_ignores_empty_days() {
    let plan_set = PlanSet::new(vec![
        served_day("s", 1, 10, 30_000.0, "a"),
        DayPlan::empty("s", 2, date(2), 10, DayOutcome::NoFeasibleRecipe),
        served_day("s", 3, 10, 40_000.0, "b"),
    ]);
    let analysis = analyze_costs(&plan_set, 35_000.0, 0.05);

    assert_float_absolute_eq!(analysis.average_cost_per_meal, 35_000.0, 1e-6);
    assert_float_absolute_eq!(analysis.cost_std_dev, 5_000.0, 1e-6);
    assert_float_absolute_eq!(analysis.min_cost_per_meal, 30_000.0, 1e-6);
    assert_float_absolute_eq!(analysis.max_cost_per_meal, 40_000.0, 1e-6);
    assert_float_absolute_eq!(analysis.budget_utilization, 1.0, 1e-9);
    assert_float_absolute_eq!(analysis.total_cost, 700_000.0, 1e-6);
    assert_eq!(analysis.daily.len(), 3);
}

#[test]
fn test_cost_trend_is_tracked_per_school() {
    let plan_set = PlanSet::new(vec![
        served_day("a", 1, 10, 30_000.0, "x"),
        served_day("a", 2, 10, 36_000.0, "y"),
        served_day("a", 3, 10, 36_500.0, "z"),
        served_day("b", 1, 10, 10_000.0, "x"),
        served_day("b", 2, 10, 8_000.0, "y"),
    ]);
    let trends: Vec<CostTrend> = analyze_costs(&plan_set, 35_000.0, 0.05)
        .daily
        .iter()
        .map(|d| d.trend)
        .collect();

    assert_eq!(
        trends,
        vec![
            CostTrend::Baseline,
            CostTrend::Increase,
            CostTrend::Stable,
            CostTrend::Baseline,
            CostTrend::Decrease,
        ]
    );
}

#[test]
fn test_analyze_plan_summary_matches_plan_set() {
    let plan_set = PlanSet::new(vec![
        served_day("s", 1, 10, 30_000.0, "a"),
        served_day("s", 2, 10, 30_000.0, "a"),
        DayPlan::empty("s", 3, date(3), 10, DayOutcome::NoFeasibleRecipe),
    ]);
    let analysis = analyze_plan(&plan_set, &HashMap::new(), 35_000.0, 3, &AnalysisConfig::default());

    assert_eq!(analysis.summary.day_plan_count, 3);
    assert_eq!(analysis.summary.empty_days, 1);
    assert_eq!(analysis.summary.meals_planned, 20);
    assert_eq!(analysis.summary.distinct_recipes, 1);
    assert_eq!(analysis.summary.start_date, Some(date(1)));
    assert_eq!(analysis.summary.end_date, Some(date(3)));
    assert_float_absolute_eq!(analysis.diversity.recipe_variety, 0.5, 1e-9);
    assert_float_absolute_eq!(analysis.average_feasibility, 2.0 / 3.0, 1e-9);
    assert!((0.0..=1.0).contains(&analysis.nutrition.average_compliance));
}

#[test]
fn test_generated_dataset_plans_and_exports() {
    let mut rng = StdRng::seed_from_u64(7);
    let dataset = generate_dataset(&DatasetShape::default(), &mut rng);

    let dir = tempdir().unwrap();
    let data_path = dir.path().join("dataset.json");
    save_dataset(&data_path, &dataset).unwrap();
    let catalog: Catalog = load_catalog(&data_path).unwrap();

    let request = PlanningRequest::new(5).with_start_date(date(1));
    let response = generate_meal_plan(&catalog, &request, &PlannerConfig::default()).unwrap();
    assert_eq!(response.plan_set.len(), dataset.schools.len() * 5);

    let json_path = dir.path().join("plan.json");
    write_json(&json_path, &response).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert!(value.get("plan_set").is_some());
    assert!(value.get("recommendations").is_some());
    assert!(value.get("summary").is_some());

    let csv_path = dir.path().join("plan.csv");
    write_day_plans_csv(&csv_path, &response.plan_set).unwrap();
    let csv = fs::read_to_string(&csv_path).unwrap();
    assert!(csv.starts_with("school_id,day,date,recipes"));
    assert_eq!(csv.lines().count(), response.plan_set.len() + 1);
}
