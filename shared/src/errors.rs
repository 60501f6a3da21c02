//! Error types for the Gym Metrics engine

use crate::validation::ValidationError;
use thiserror::Error;

/// Errors raised before the formulas run
///
/// The formulas themselves never fail; these only come from validation
/// and form parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    #[error("Invalid {field}: {message}")]
    InvalidMeasurement { field: String, message: String },

    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber { field: String, value: String },

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid unit: {0}")]
    InvalidUnit(String),
}

impl MetricsError {
    /// Field the error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            MetricsError::InvalidMeasurement { field, .. }
            | MetricsError::InvalidNumber { field, .. } => Some(field.as_str()),
            MetricsError::MissingField(field) => Some(field.as_str()),
            MetricsError::InvalidUnit(_) => None,
        }
    }
}

impl From<ValidationError> for MetricsError {
    fn from(err: ValidationError) -> Self {
        MetricsError::InvalidMeasurement {
            field: err.field,
            message: err.message,
        }
    }
}
