//! # Error Types
//!
//! Structured error types for metabolic_core. Every failure is raised before
//! any arithmetic runs, so an error always means "fix the inputs and retry".
//!
//! ## Example
//!
//! ```rust
//! use metabolic_core::{bmr, BmrEquation, BmrOptions, CalcError};
//!
//! let err = bmr(BmrEquation::Katch, &BmrOptions::default()).unwrap_err();
//! assert_eq!(err.error_code(), "MISSING_REQUIRED_OPTION");
//! assert!(matches!(err, CalcError::MissingRequiredOption { .. }));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for metabolic_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// The equation selector does not name any equation known to the function
    #[error("Invalid equation for {function}: '{value}'")]
    InvalidEquation { function: String, value: String },

    /// The options bundle lacks fields required by the selected equation
    #[error(
        "Missing required option(s) for the {equation} equation: {}",
        .missing.join(", ")
    )]
    MissingRequiredOption {
        equation: String,
        missing: Vec<String>,
    },

    /// A non-equation input value could not be understood
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidEquation error
    pub fn invalid_equation(function: impl Into<String>, value: impl Into<String>) -> Self {
        CalcError::InvalidEquation {
            function: function.into(),
            value: value.into(),
        }
    }

    /// Create a MissingRequiredOption error
    pub fn missing_required_option<I, S>(equation: impl Into<String>, missing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CalcError::MissingRequiredOption {
            equation: equation.into(),
            missing: missing.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidEquation { .. } => "INVALID_EQUATION",
            CalcError::MissingRequiredOption { .. } => "MISSING_REQUIRED_OPTION",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::missing_required_option("Katch-McArdle", ["weight", "body fat percentage"]);
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_equation("bmr", "Atwater").error_code(), "INVALID_EQUATION");
        assert_eq!(CalcError::serialization("eof").error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_missing_option_message_names_equation() {
        let error = CalcError::missing_required_option("Mifflin-St Jeor", ["age", "height"]);
        assert_eq!(
            error.to_string(),
            "Missing required option(s) for the Mifflin-St Jeor equation: age, height"
        );
    }
}
