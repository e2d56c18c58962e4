use std::path::Path;

use clap::Parser;

use school_meal_planner_rs::cli::{Cli, Command, PlanArgs};
use school_meal_planner_rs::config::{PlannerConfig, load_config};
use school_meal_planner_rs::error::Result;
use school_meal_planner_rs::generate_meal_plan;
use school_meal_planner_rs::interface::{confirm_overwrite, display_feasibility, display_plan_response};
use school_meal_planner_rs::logging::init_logger;
use school_meal_planner_rs::models::{NutritionalGoals, PlanningRequest, Preferences};
use school_meal_planner_rs::planner::feasibility_report;
use school_meal_planner_rs::state::{
    ReferenceData, load_catalog, load_request, write_day_plans_csv, write_json,
};

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.json_logs);

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => PlannerConfig::default(),
    };

    match cli.command {
        Command::Plan(args) => cmd_plan(&cli.data, &config, args),
        Command::Feasibility => cmd_feasibility(&cli.data),
    }
}

fn request_from_args(args: &PlanArgs) -> Result<PlanningRequest> {
    if let Some(path) = &args.request {
        return load_request(path);
    }

    let mut request = PlanningRequest::new(args.days)
        .with_schools(args.schools.clone())
        .with_goals(NutritionalGoals {
            calories_per_meal: args.calories,
            protein_min: args.protein_min,
            fat_max: args.fat_max,
            ..Default::default()
        })
        .with_preferences(Preferences {
            preferred_categories: args.prefer.clone(),
            avoided_ingredient_ids: args.avoid.clone(),
        })
        .with_diversity(!args.no_diversity);
    if let Some(max_cost) = args.max_cost {
        request = request.with_max_cost_per_meal(max_cost);
    }
    if let Some(start) = args.start {
        request = request.with_start_date(start);
    }
    Ok(request)
}

/// Plan meals and report the result.
fn cmd_plan(data: &Path, config: &PlannerConfig, args: PlanArgs) -> Result<()> {
    let catalog = load_catalog(data)?;
    let request = request_from_args(&args)?;

    let response = generate_meal_plan(&catalog, &request, config)?;
    display_plan_response(&response);

    if let Some(path) = &args.output {
        if confirm_overwrite(path, args.force)? {
            write_json(path, &response)?;
            println!("Plan written to {}", path.display());
        }
    }

    if let Some(path) = &args.csv {
        if confirm_overwrite(path, args.force)? {
            write_day_plans_csv(path, &response.plan_set)?;
            println!("Day plans written to {}", path.display());
        }
    }

    Ok(())
}

/// List which recipes the inventory can produce.
fn cmd_feasibility(data: &Path) -> Result<()> {
    let catalog = load_catalog(data)?;
    let report = feasibility_report(catalog.recipes()?, catalog.inventory()?);
    display_feasibility(&report);
    Ok(())
}
