/// Weight of the nutrition criterion in the final score.
pub const NUTRITION_WEIGHT: f64 = 0.40;

/// Weight of the cost criterion in the final score.
pub const COST_WEIGHT: f64 = 0.25;

/// Weight of the diversity criterion in the final score.
pub const DIVERSITY_WEIGHT: f64 = 0.20;

/// Weight of the preference criterion in the final score.
pub const PREFERENCE_WEIGHT: f64 = 0.10;

/// Weight of the complexity criterion in the final score.
pub const COMPLEXITY_WEIGHT: f64 = 0.05;

/// Nutrition score when no nutrient goal is configured.
pub const NEUTRAL_NUTRITION_SCORE: f64 = 0.5;

/// Penalty for a recipe already served to the school.
pub const REPEAT_RECIPE_PENALTY: f64 = 0.5;

/// Penalty for a category served at least `CATEGORY_REPEAT_LIMIT` times.
pub const REPEAT_CATEGORY_PENALTY: f64 = 0.3;

/// Number of past servings of a category before its penalty applies.
pub const CATEGORY_REPEAT_LIMIT: usize = 2;

/// Baseline preference score before adjustments.
pub const PREFERENCE_BASELINE: f64 = 0.5;

/// Bonus for a preferred category.
pub const PREFERRED_CATEGORY_BONUS: f64 = 0.3;

/// Penalty for using any avoided ingredient.
pub const AVOIDED_INGREDIENT_PENALTY: f64 = 0.5;

// ─────────────────────────────────────────────────────────────────────────────
// Complexity estimate
// ─────────────────────────────────────────────────────────────────────────────

/// Complexity of an empty, instant, easy recipe.
pub const COMPLEXITY_BASE: f64 = 1.0;

/// Complexity added per ingredient.
pub const COMPLEXITY_PER_INGREDIENT: f64 = 0.1;

/// Upper bound of the complexity estimate.
pub const MAX_COMPLEXITY: f64 = 5.0;

// ─────────────────────────────────────────────────────────────────────────────
// Selection
// ─────────────────────────────────────────────────────────────────────────────

/// Maximum recipes accepted for one school on one day.
pub const MAX_RECIPES_PER_DAY: usize = 3;

/// Per-meal cost ceiling when the request does not set one.
pub const DEFAULT_MAX_COST_PER_MEAL: f64 = 50_000.0;

// ─────────────────────────────────────────────────────────────────────────────
// Analysis thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Reference cost per meal used for budget utilization.
pub const TARGET_COST_PER_MEAL: f64 = 35_000.0;

/// Cost per meal above which overrun is high priority.
pub const HIGH_COST_THRESHOLD: f64 = 40_000.0;

/// Cost per meal above which overrun is medium priority.
pub const MEDIUM_COST_THRESHOLD: f64 = 35_000.0;

/// Compliance below which a nutrition gap is reported; above it nutrition
/// education is suggested.
pub const COMPLIANCE_THRESHOLD: f64 = 0.8;

/// Diversity below which a diversity gap is reported.
pub const DIVERSITY_THRESHOLD: f64 = 0.6;

/// Diversity below which the diversity gap becomes high priority.
pub const LOW_DIVERSITY_THRESHOLD: f64 = 0.4;

/// Average feasibility below which a stock gap is reported.
pub const FEASIBILITY_THRESHOLD: f64 = 0.7;

/// Relative day-over-day change treated as stable.
pub const COST_TREND_TOLERANCE: f64 = 0.05;

/// Recommendations returned per run.
pub const MAX_RECOMMENDATIONS: usize = 6;

// ─────────────────────────────────────────────────────────────────────────────
// Reference ranges (per meal) when a school has no goal for a nutrient
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_CALORIE_RANGE: (f64, f64) = (550.0, 750.0);
pub const DEFAULT_PROTEIN_RANGE: (f64, f64) = (15.0, 35.0);
pub const DEFAULT_FAT_RANGE: (f64, f64) = (10.0, 30.0);
pub const DEFAULT_CARBOHYDRATE_RANGE: (f64, f64) = (60.0, 110.0);

/// Tolerance around a calorie target when deriving its range.
pub const CALORIE_TARGET_TOLERANCE: f64 = 0.10;

/// Ideal share of calories from protein, fat and carbohydrate (percent).
pub const PROTEIN_ENERGY_BAND: (f64, f64) = (15.0, 25.0);
pub const FAT_ENERGY_BAND: (f64, f64) = (25.0, 35.0);
pub const CARBOHYDRATE_ENERGY_BAND: (f64, f64) = (45.0, 65.0);

/// kcal per gram.
pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
pub const FAT_KCAL_PER_G: f64 = 9.0;
pub const CARBOHYDRATE_KCAL_PER_G: f64 = 4.0;

// ─────────────────────────────────────────────────────────────────────────────
// Request limits
// ─────────────────────────────────────────────────────────────────────────────

/// Longest horizon accepted in one request (days).
pub const MAX_PLANNING_PERIOD: u32 = 366;

/// Similarity above which an unknown school id gets a suggestion.
pub const SCHOOL_MATCH_THRESHOLD: f64 = 0.7;
