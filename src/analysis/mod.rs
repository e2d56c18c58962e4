pub mod compliance;
pub mod cost;
pub mod diversity;
pub mod recommendations;
pub mod report;
pub mod summary;

pub use compliance::{
    ComplianceRanges, DayCompliance, NutrientRange, NutritionalAnalysis, analyze_nutrition,
    macro_balance_score,
};
pub use cost::{CostAnalysis, CostTrend, DailyCost, analyze_costs, classify_trend};
pub use diversity::{DiversityAnalysis, analyze_diversity};
pub use recommendations::{
    Priority, Recommendation, RecommendationInputs, RecommendationKind, generate_recommendations,
};
pub use report::{PlanAnalysis, analyze_plan};
pub use summary::{PlanSummary, summarize};
