use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use rayon::prelude::*;
use serde::Serialize;

use crate::error::{PlannerError, Result};
use crate::models::{DayPlan, PlanSet, School};
use crate::planner::day::{DayPlanner, PlanningContext};
use crate::planner::history::SchoolHistory;

/// A school whose plan could not be completed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchoolFailure {
    pub school_id: String,
    pub day: Option<u32>,
    pub message: String,
}

impl SchoolFailure {
    fn from_error(school_id: &str, err: &PlannerError) -> Self {
        Self {
            school_id: school_id.to_string(),
            day: err.unit().map(|(_, day)| day),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HorizonResult {
    pub plan_set: PlanSet,
    pub failed_schools: Vec<SchoolFailure>,
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Plan every day of the horizon for one school.
///
/// Days run in order as a fold: the school's history is created empty,
/// threaded through each day, and consumed into the school's plans. A school
/// whose effective goals are unusable, or whose day planning panics, fails
/// on its own with `SchoolFailed`.
pub fn plan_school(planner: &DayPlanner, planning_period: u32) -> Result<Vec<DayPlan>> {
    let school_id = &planner.school().id;
    if !planner.goals().is_valid() {
        return Err(PlannerError::SchoolFailed {
            school_id: school_id.clone(),
            day: 1,
            message: "nutritional requirement has negative or non-finite values".to_string(),
        });
    }

    let history = (1..=planning_period).try_fold(
        SchoolHistory::new(school_id.clone()),
        |history, day| {
            let plan = panic::catch_unwind(AssertUnwindSafe(|| planner.plan_day(&history, day)))
                .map_err(|payload| PlannerError::SchoolFailed {
                    school_id: school_id.clone(),
                    day,
                    message: format!("day planning panicked: {}", panic_message(payload.as_ref())),
                })?;
            history.record(plan)
        },
    )?;
    Ok(history.into_plans())
}

/// Plan all schools over the requested horizon.
///
/// Schools are independent and run on the rayon pool when
/// `parallel_schools` is set. Output order follows `schools` either way.
pub fn plan_horizon(ctx: PlanningContext, schools: &[&School]) -> Result<HorizonResult> {
    let period = ctx.request.planning_period;
    let run = |school: &&School| -> (String, Result<Vec<DayPlan>>) {
        let planner = DayPlanner::new(ctx, school);
        (school.id.clone(), plan_school(&planner, period))
    };

    let outcomes: Vec<(String, Result<Vec<DayPlan>>)> = if ctx.config.parallel_schools {
        schools.par_iter().map(run).collect()
    } else {
        schools.iter().map(run).collect()
    };

    let mut day_plans = Vec::with_capacity(schools.len() * period as usize);
    let mut failed_schools = Vec::new();

    for (school_id, outcome) in outcomes {
        match outcome {
            Ok(plans) => day_plans.extend(plans),
            Err(err) => {
                if !ctx.config.allow_partial_plan {
                    return Err(err);
                }
                tracing::warn!(school = %school_id, error = %err, "school planning failed");
                failed_schools.push(SchoolFailure::from_error(&school_id, &err));
            }
        }
    }

    Ok(HorizonResult {
        plan_set: PlanSet::new(day_plans),
        failed_schools,
    })
}
