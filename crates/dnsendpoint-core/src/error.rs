//! Unified error handling for dnsendpoint-core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::ValidationError;

/// Root error type for dnsendpoint-core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A resource failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Manifests could not be loaded.
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl CoreError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Validation(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in dnsendpoint".into(),
                "Please report this issue at: https://github.com/cosecruz/dnsendpoint/issues"
                    .into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FieldError, field};

    #[test]
    fn validation_errors_are_transparent() {
        let err = CoreError::from(ValidationError::new(FieldError::invalid(
            field::TTL,
            0_i64,
            "ttl value should be > 0",
        )));
        assert_eq!(
            err.to_string(),
            "error validating DNSEndpoint: TTL: Invalid value: 0: ttl value should be > 0"
        );
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn application_category_passes_through() {
        let err = CoreError::from(ApplicationError::NoManifests {
            source_name: "dir".into(),
        });
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(!err.suggestions().is_empty());
    }
}
