use crate::analysis::Priority;
use crate::models::DayOutcome;
use crate::planner::FeasibilityEntry;
use crate::service::PlanningResponse;

fn priority_tag(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "HIGH",
        Priority::Medium => "MED ",
        Priority::Low => "LOW ",
    }
}

/// Display a planning response as plain text.
pub fn display_plan_response(response: &PlanningResponse) {
    if response.plan_set.is_empty() {
        println!("No day plans generated.");
        return;
    }

    let mut current_school = "";
    for plan in response.plan_set.iter() {
        if plan.school_id != current_school {
            current_school = &plan.school_id;
            println!();
            println!("=== {} ===", current_school);
            println!();
        }

        let recipes = if plan.selected_recipes.is_empty() {
            match &plan.outcome {
                DayOutcome::Degraded { reason } => format!("(degraded: {})", reason),
                _ => "(no feasible recipe)".to_string(),
            }
        } else {
            plan.selected_recipes
                .iter()
                .map(|r| r.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };

        println!(
            "Day {:>2} {} | {:>9.0}/meal | {:>4.0} kcal | div {:.2} | {}",
            plan.day,
            plan.date,
            plan.cost_per_meal(),
            plan.nutritional_profile.calories,
            plan.diversity_score,
            recipes
        );
    }

    let analysis = &response.analysis;
    let summary = &analysis.summary;

    println!();
    println!("--- Summary ---");
    println!("Schools: {}", summary.school_count);
    if let (Some(start), Some(end)) = (summary.start_date, summary.end_date) {
        println!("Dates: {} to {}", start, end);
    }
    println!("Day plans: {} ({} empty)", summary.day_plan_count, summary.empty_days);
    println!("Meals planned: {}", summary.meals_planned);
    println!("Total cost: {:.0}", summary.total_cost);
    println!(
        "Average cost per meal: {:.0} ({:.0}% of target)",
        summary.average_cost_per_meal,
        analysis.cost.budget_utilization * 100.0
    );
    println!("Distinct recipes: {}", summary.distinct_recipes);
    println!("Average prep+cook time: {:.0} min", summary.average_total_time);
    println!(
        "Compliance: {:.0}% | Macro balance: {:.0}% | Diversity: {:.2} | Feasibility: {:.2}",
        analysis.nutrition.average_compliance * 100.0,
        analysis.nutrition.average_macro_balance * 100.0,
        analysis.diversity.overall,
        analysis.average_feasibility
    );

    if !response.failed_schools.is_empty() {
        println!();
        println!("--- Failed schools ---");
        for failure in &response.failed_schools {
            println!("  {}: {}", failure.school_id, failure.message);
        }
    }

    if !analysis.recommendations.is_empty() {
        println!();
        println!("--- Recommendations ---");
        for rec in &analysis.recommendations {
            println!("[{}] {}: {}", priority_tag(rec.priority), rec.title, rec.message);
        }
    }
    println!();
}

/// Display which recipes the inventory can produce.
pub fn display_feasibility(entries: &[FeasibilityEntry]) {
    if entries.is_empty() {
        println!("No recipes.");
        return;
    }

    let feasible = entries.iter().filter(|e| e.feasible).count();
    println!();
    println!("=== Feasibility ({} of {} recipes) ===", feasible, entries.len());
    println!();

    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(10);
    for entry in entries {
        if entry.feasible {
            println!("  ok   {:<width$}", entry.name, width = width);
        } else {
            let missing: Vec<String> = entry
                .shortfalls
                .iter()
                .map(|s| format!("{} {:.1}/{:.1}", s.item_id, s.available, s.required))
                .collect();
            println!(
                "  SHORT {:<width$} {}",
                entry.name,
                missing.join(", "),
                width = width
            );
        }
    }
    println!();
}
