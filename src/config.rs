use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::planner::constants::*;

/// Relative weight of each scoring criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub nutrition: f64,
    pub cost: f64,
    pub diversity: f64,
    pub preference: f64,
    pub complexity: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            nutrition: NUTRITION_WEIGHT,
            cost: COST_WEIGHT,
            diversity: DIVERSITY_WEIGHT,
            preference: PREFERENCE_WEIGHT,
            complexity: COMPLEXITY_WEIGHT,
        }
    }
}

/// Thresholds used by the plan analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub target_cost_per_meal: f64,
    pub high_cost_threshold: f64,
    pub medium_cost_threshold: f64,
    pub compliance_threshold: f64,
    pub diversity_threshold: f64,
    pub low_diversity_threshold: f64,
    pub feasibility_threshold: f64,
    pub cost_trend_tolerance: f64,
    pub max_recommendations: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            target_cost_per_meal: TARGET_COST_PER_MEAL,
            high_cost_threshold: HIGH_COST_THRESHOLD,
            medium_cost_threshold: MEDIUM_COST_THRESHOLD,
            compliance_threshold: COMPLIANCE_THRESHOLD,
            diversity_threshold: DIVERSITY_THRESHOLD,
            low_diversity_threshold: LOW_DIVERSITY_THRESHOLD,
            feasibility_threshold: FEASIBILITY_THRESHOLD,
            cost_trend_tolerance: COST_TREND_TOLERANCE,
            max_recommendations: MAX_RECOMMENDATIONS,
        }
    }
}

/// Runtime planner settings. Every field falls back to its constant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub weights: ScoreWeights,
    pub max_recipes_per_day: usize,
    pub default_max_cost_per_meal: f64,
    /// Plan schools on the rayon pool instead of one after another.
    pub parallel_schools: bool,
    /// Return the schools that succeeded when others fail.
    pub allow_partial_plan: bool,
    pub analysis: AnalysisConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            max_recipes_per_day: MAX_RECIPES_PER_DAY,
            default_max_cost_per_meal: DEFAULT_MAX_COST_PER_MEAL,
            parallel_schools: true,
            allow_partial_plan: false,
            analysis: AnalysisConfig::default(),
        }
    }
}

fn non_negative(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PlannerError::invalid_config(field, "must be a finite, non-negative number"))
    }
}

fn positive(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PlannerError::invalid_config(field, "must be a positive number"))
    }
}

impl ScoreWeights {
    pub fn validate(&self) -> Result<()> {
        non_negative("weights.nutrition", self.nutrition)?;
        non_negative("weights.cost", self.cost)?;
        non_negative("weights.diversity", self.diversity)?;
        non_negative("weights.preference", self.preference)?;
        non_negative("weights.complexity", self.complexity)?;
        let total = self.nutrition + self.cost + self.diversity + self.preference + self.complexity;
        positive("weights", total)
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<()> {
        positive("analysis.target_cost_per_meal", self.target_cost_per_meal)?;
        non_negative("analysis.high_cost_threshold", self.high_cost_threshold)?;
        non_negative("analysis.medium_cost_threshold", self.medium_cost_threshold)?;
        non_negative("analysis.compliance_threshold", self.compliance_threshold)?;
        non_negative("analysis.diversity_threshold", self.diversity_threshold)?;
        non_negative("analysis.low_diversity_threshold", self.low_diversity_threshold)?;
        non_negative("analysis.feasibility_threshold", self.feasibility_threshold)?;
        non_negative("analysis.cost_trend_tolerance", self.cost_trend_tolerance)?;
        if self.max_recommendations == 0 {
            return Err(PlannerError::invalid_config(
                "analysis.max_recommendations",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

impl PlannerConfig {
    /// Sequential, single-threaded planning.
    pub fn sequential() -> Self {
        Self {
            parallel_schools: false,
            ..Self::default()
        }
    }

    /// Reject settings the planner cannot honor.
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        if self.max_recipes_per_day == 0 {
            return Err(PlannerError::invalid_config(
                "max_recipes_per_day",
                "must be at least 1",
            ));
        }
        positive("default_max_cost_per_meal", self.default_max_cost_per_meal)?;
        self.analysis.validate()
    }
}

/// Load and validate a config JSON file. Missing keys take their defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PlannerConfig> {
    let content = fs::read_to_string(path)?;
    let config: PlannerConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}
