pub mod analysis;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod service;
pub mod state;

pub use config::PlannerConfig;
pub use error::{PlannerError, Result};
pub use models::{DayPlan, PlanSet, PlanningRequest};
pub use service::{PlanningResponse, generate_meal_plan};
