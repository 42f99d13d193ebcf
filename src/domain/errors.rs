//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was constructed from an empty value.
    MissingRequiredValue {
        /// Name of the field that was left empty
        field: &'static str,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequiredValue { field } => {
                write!(f, "Required field '{}' is not provided", field)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
