use chrono::{Days, NaiveDate};
use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};
use crate::models::{PlanningRequest, School};
use crate::planner::constants::{MAX_PLANNING_PERIOD, SCHOOL_MATCH_THRESHOLD};

/// Reject malformed requests before any planning starts.
pub fn validate_request(request: &PlanningRequest, schools: &[School], start_date: NaiveDate) -> Result<()> {
    if request.planning_period == 0 {
        return Err(PlannerError::invalid("planning_period", "must be at least 1 day"));
    }
    if request.planning_period > MAX_PLANNING_PERIOD {
        return Err(PlannerError::invalid(
            "planning_period",
            format!("must be at most {} days", MAX_PLANNING_PERIOD),
        ));
    }
    if start_date
        .checked_add_days(Days::new(u64::from(request.planning_period)))
        .is_none()
    {
        return Err(PlannerError::invalid("start_date", "horizon runs past the last supported date"));
    }

    if let Some(max_cost) = request.budget_constraints.max_cost_per_meal {
        if !max_cost.is_finite() || max_cost <= 0.0 {
            return Err(PlannerError::invalid(
                "budget_constraints.max_cost_per_meal",
                "must be a positive number",
            ));
        }
    }

    if !request.nutritional_goals.is_valid() {
        return Err(PlannerError::invalid(
            "nutritional_goals",
            "values must be non-negative numbers",
        ));
    }

    for id in &request.target_schools {
        if !schools.iter().any(|s| &s.id == id) {
            let message = match closest_school(id, schools) {
                Some(suggestion) => format!("unknown school '{}', did you mean '{}'?", id, suggestion),
                None => format!("unknown school '{}'", id),
            };
            return Err(PlannerError::invalid("target_schools", message));
        }
    }

    Ok(())
}

fn closest_school<'s>(id: &str, schools: &'s [School]) -> Option<&'s str> {
    let needle = id.to_lowercase();
    schools
        .iter()
        .map(|s| (s.id.as_str(), jaro_winkler(&s.id.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > SCHOOL_MATCH_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(id, _)| id)
}

/// Schools the request targets, in catalog order. An empty target list
/// means every school.
pub fn resolve_schools<'s>(request: &PlanningRequest, schools: &'s [School]) -> Vec<&'s School> {
    schools
        .iter()
        .filter(|s| request.target_schools.is_empty() || request.target_schools.contains(&s.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutritionalGoals;

    fn schools() -> Vec<School> {
        vec![
            School::new("north-primary", "North Primary", 120),
            School::new("south-high", "South High", 300),
        ]
    }

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
    }

    fn field_of(err: PlannerError) -> String {
        match err {
            PlannerError::InvalidRequest { field, .. } => field,
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_valid_request() {
        let req = PlanningRequest::new(5).with_max_cost_per_meal(30_000.0);
        assert!(validate_request(&req, &schools(), start()).is_ok());
    }

    #[test]
    fn test_zero_period_rejected() {
        let err = validate_request(&PlanningRequest::new(0), &schools(), start()).unwrap_err();
        assert_eq!(field_of(err), "planning_period");
    }

    #[test]
    fn test_negative_budget_rejected() {
        let req = PlanningRequest::new(5).with_max_cost_per_meal(-1.0);
        let err = validate_request(&req, &schools(), start()).unwrap_err();
        assert_eq!(field_of(err), "budget_constraints.max_cost_per_meal");
    }

    #[test]
    fn test_negative_goal_rejected() {
        let req = PlanningRequest::new(5).with_goals(NutritionalGoals {
            protein_min: Some(-3.0),
            ..Default::default()
        });
        let err = validate_request(&req, &schools(), start()).unwrap_err();
        assert_eq!(field_of(err), "nutritional_goals");
    }

    #[test]
    fn test_unknown_school_suggests_match() {
        let req = PlanningRequest::new(5).with_schools(vec!["north-primry".into()]);
        let err = validate_request(&req, &schools(), start()).unwrap_err();
        assert!(err.to_string().contains("did you mean 'north-primary'"));
    }

    #[test]
    fn test_resolve_schools() {
        let all = schools();
        let req = PlanningRequest::new(1);
        assert_eq!(resolve_schools(&req, &all).len(), 2);

        let req = req.with_schools(vec!["south-high".into()]);
        let picked = resolve_schools(&req, &all);
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].id, "south-high");
    }
}
