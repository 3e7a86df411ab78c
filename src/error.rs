//! Error types for entity profiles.
//!
//! Errors are strongly typed using thiserror. The data model itself has a
//! single failure mode: a required field was absent at construction.

use thiserror::Error;

/// Validation errors raised when constructing profiles and attributes.
///
/// This is the invalid-argument kind: it is reported to the direct caller
/// and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was not supplied.
    #[error("Required field '{field}' is missing")]
    MissingField {
        /// Name of the absent field.
        field: String,
    },
}

impl ValidationError {
    /// Creates a missing-field error.
    #[must_use]
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Returns the name of the field that failed validation.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field } => field,
        }
    }
}

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Construction rejected an argument.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Encoding or decoding a profile failed.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Underlying codec message.
        message: String,
    },
}

impl ProfileError {
    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a serialization error.
    #[must_use]
    pub const fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

/// Result type alias for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;
