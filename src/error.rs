//! # Error Types Module
//!
//! Errors raised at the edges of the planner: reading and decoding meal plan
//! documents. Parsing, scaling, classification and aggregation never fail.

/// Custom error types for meal plan loading
#[derive(Debug, Clone, PartialEq)]
pub enum PlannerError {
    /// Reading the input failed
    Io(String),
    /// The document is not a valid meal plan
    InvalidPlan(String),
    /// A date argument could not be parsed
    InvalidDate(String),
}

impl std::fmt::Display for PlannerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlannerError::Io(msg) => write!(f, "I/O error: {msg}"),
            PlannerError::InvalidPlan(msg) => write!(f, "Invalid meal plan: {msg}"),
            PlannerError::InvalidDate(msg) => write!(f, "Invalid date: {msg}"),
        }
    }
}

impl std::error::Error for PlannerError {}

impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        PlannerError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        PlannerError::InvalidPlan(err.to_string())
    }
}

impl From<chrono::ParseError> for PlannerError {
    fn from(err: chrono::ParseError) -> Self {
        PlannerError::InvalidDate(err.to_string())
    }
}
