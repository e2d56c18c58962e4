use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Invalid request: {field}: {message}")]
    InvalidRequest { field: String, message: String },

    #[error("Invalid config: {field}: {message}")]
    InvalidConfig { field: String, message: String },

    #[error("Reference data unavailable: {0}")]
    UpstreamData(String),

    #[error("Computation failed for school {school_id} on day {day}: {message}")]
    Computation {
        school_id: String,
        day: u32,
        message: String,
    },

    #[error("Planning failed for school {school_id} at day {day}: {message}")]
    SchoolFailed {
        school_id: String,
        day: u32,
        message: String,
    },

    #[error("Planning failed: {0}")]
    PlanningFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl PlannerError {
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        PlannerError::InvalidRequest {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn invalid_config(field: &str, message: impl Into<String>) -> Self {
        PlannerError::InvalidConfig {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// School and day the error is scoped to, when it has one.
    pub fn unit(&self) -> Option<(&str, u32)> {
        match self {
            PlannerError::Computation { school_id, day, .. }
            | PlannerError::SchoolFailed { school_id, day, .. } => Some((school_id, *day)),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
