use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// School meal planner: picks daily recipes per school that balance
/// nutrition, cost, variety, and stock.
#[derive(Parser, Debug)]
#[command(name = "school_meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the dataset JSON file (items, recipes, schools, inventory).
    #[arg(short, long, default_value = "dataset.json", global = true)]
    pub data: PathBuf,

    /// Optional planner config JSON file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    pub json_logs: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Plan meals for the requested horizon.
    Plan(PlanArgs),

    /// Show which recipes the current inventory can produce.
    Feasibility,
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Read the whole request from a JSON file instead of flags.
    #[arg(long)]
    pub request: Option<PathBuf>,

    /// Planning period in days.
    #[arg(long, default_value = "5")]
    pub days: u32,

    /// School ids to plan for (comma-separated); all when omitted.
    #[arg(long, value_delimiter = ',')]
    pub schools: Vec<String>,

    /// Maximum cost per meal.
    #[arg(long)]
    pub max_cost: Option<f64>,

    /// Preferred recipe categories (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub prefer: Vec<String>,

    /// Ingredient ids to avoid (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub avoid: Vec<String>,

    /// Target calories per meal.
    #[arg(long)]
    pub calories: Option<f64>,

    /// Minimum protein per meal (g).
    #[arg(long)]
    pub protein_min: Option<f64>,

    /// Maximum fat per meal (g).
    #[arg(long)]
    pub fat_max: Option<f64>,

    /// Disable diversity penalties.
    #[arg(long)]
    pub no_diversity: bool,

    /// Date of day 1 (YYYY-MM-DD); today when omitted.
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Write the full response as JSON.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write one CSV row per day plan.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Overwrite output files without asking.
    #[arg(long)]
    pub force: bool,
}
