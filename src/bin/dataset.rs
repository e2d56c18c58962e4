use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use school_meal_planner_rs::dataset::{DatasetShape, generate_dataset};
use school_meal_planner_rs::state::save_dataset;

#[derive(Parser, Debug)]
#[command(name = "dataset")]
#[command(about = "Generate a synthetic dataset for the school meal planner")]
struct Args {
    /// Random seed for reproducibility
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Number of schools
    #[arg(long, default_value = "3")]
    schools: usize,

    /// Number of recipes
    #[arg(long, default_value = "24")]
    recipes: usize,

    /// Chance that an item is out of stock (0..1)
    #[arg(long, default_value = "0.1")]
    stockout_rate: f64,

    /// Output JSON file
    #[arg(short, long, default_value = "dataset.json")]
    output: PathBuf,
}

fn main() {
    let args = Args::parse();

    let shape = DatasetShape {
        schools: args.schools,
        recipes: args.recipes,
        stockout_rate: args.stockout_rate,
        ..DatasetShape::default()
    };

    let mut rng = StdRng::seed_from_u64(args.seed);
    let dataset = generate_dataset(&shape, &mut rng);

    if let Err(e) = save_dataset(&args.output, &dataset) {
        eprintln!("Error writing dataset {:?}: {}", args.output, e);
        std::process::exit(1);
    }

    println!(
        "Wrote {} items, {} recipes, {} schools to {:?} (seed {})",
        dataset.items.len(),
        dataset.recipes.len(),
        dataset.schools.len(),
        args.output,
        args.seed
    );
}
