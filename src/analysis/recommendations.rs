use serde::Serialize;

use crate::config::AnalysisConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    NutritionGap,
    CostOverrun,
    DiversityGap,
    FeasibilityGap,
    Sustainability,
    NutritionEducation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub priority: Priority,
    pub title: String,
    pub message: String,
    pub actions: Vec<String>,
}

impl Recommendation {
    fn new(
        kind: RecommendationKind,
        priority: Priority,
        title: &str,
        message: String,
        actions: &[&str],
    ) -> Self {
        Self {
            kind,
            priority,
            title: title.to_string(),
            message,
            actions: actions.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Plan-level figures the rules look at.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RecommendationInputs {
    pub compliance: f64,
    pub average_cost_per_meal: f64,
    pub target_cost_per_meal: f64,
    pub diversity: f64,
    pub average_feasibility: f64,
}

/// Evaluate the rules in fixed order and keep the first
/// `max_recommendations`. The list is not re-sorted by priority.
pub fn generate_recommendations(
    inputs: &RecommendationInputs,
    config: &AnalysisConfig,
) -> Vec<Recommendation> {
    let mut out = Vec::new();

    if inputs.compliance < config.compliance_threshold {
        out.push(Recommendation::new(
            RecommendationKind::NutritionGap,
            Priority::High,
            "Improve nutritional compliance",
            format!(
                "Average nutritional compliance is {:.0}%, below the {:.0}% target.",
                inputs.compliance * 100.0,
                config.compliance_threshold * 100.0
            ),
            &[
                "Add recipes that close protein and calorie gaps",
                "Review portion sizes against school requirements",
            ],
        ));
    }

    let cost_priority = if inputs.average_cost_per_meal > config.high_cost_threshold {
        Some((Priority::High, config.high_cost_threshold))
    } else if inputs.average_cost_per_meal > config.medium_cost_threshold {
        Some((Priority::Medium, config.medium_cost_threshold))
    } else {
        None
    };
    if let Some((priority, threshold)) = cost_priority {
        let message = if inputs.target_cost_per_meal > 0.0
            && inputs.average_cost_per_meal > inputs.target_cost_per_meal
        {
            let overrun = (inputs.average_cost_per_meal - inputs.target_cost_per_meal)
                / inputs.target_cost_per_meal
                * 100.0;
            format!(
                "Average cost per meal {:.0} is {:.1}% above the target of {:.0}.",
                inputs.average_cost_per_meal, overrun, inputs.target_cost_per_meal
            )
        } else {
            format!(
                "Average cost per meal {:.0} exceeds the alert threshold of {:.0}.",
                inputs.average_cost_per_meal, threshold
            )
        };
        out.push(Recommendation::new(
            RecommendationKind::CostOverrun,
            priority,
            "Reduce meal costs",
            message,
            &[
                "Substitute lower-cost seasonal ingredients",
                "Negotiate bulk pricing for high-volume items",
            ],
        ));
    }

    if inputs.diversity < config.diversity_threshold {
        let priority = if inputs.diversity < config.low_diversity_threshold {
            Priority::High
        } else {
            Priority::Medium
        };
        out.push(Recommendation::new(
            RecommendationKind::DiversityGap,
            priority,
            "Increase menu variety",
            format!(
                "Menu diversity score is {:.2}, below the {:.2} target.",
                inputs.diversity, config.diversity_threshold
            ),
            &[
                "Add recipes from under-used categories",
                "Rotate recipes across weeks",
            ],
        ));
    }

    if inputs.average_feasibility < config.feasibility_threshold {
        out.push(Recommendation::new(
            RecommendationKind::FeasibilityGap,
            Priority::Medium,
            "Restock key ingredients",
            format!(
                "Average feasibility is {:.0}%, below the {:.0}% target.",
                inputs.average_feasibility * 100.0,
                config.feasibility_threshold * 100.0
            ),
            &[
                "Review inventory for ingredients used by most recipes",
                "Schedule deliveries ahead of the planning horizon",
            ],
        ));
    }

    out.push(Recommendation::new(
        RecommendationKind::Sustainability,
        Priority::Low,
        "Source sustainably",
        "Prefer local and seasonal produce to cut cost and transport emissions.".to_string(),
        &[
            "Partner with local farms",
            "Track food waste per school",
        ],
    ));

    if inputs.compliance > config.compliance_threshold {
        out.push(Recommendation::new(
            RecommendationKind::NutritionEducation,
            Priority::Low,
            "Run nutrition education",
            "Menus meet nutrition targets; use them to teach healthy eating.".to_string(),
            &["Share weekly menu highlights with families"],
        ));
    }

    out.truncate(config.max_recommendations);
    out
}
