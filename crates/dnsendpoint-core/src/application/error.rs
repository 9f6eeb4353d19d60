//! Application layer errors.
//!
//! These errors represent failures to obtain resources, not validation
//! failures. Validation failures are `ValidationError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while loading manifests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A manifest source could not be read.
    #[error("Cannot read manifests from {source_name}: {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    /// A document could not be decoded as a DNSEndpoint.
    #[error("Malformed manifest {origin}: {reason}")]
    MalformedManifest { origin: String, reason: String },

    /// The source contained no DNSEndpoint documents.
    #[error("No DNSEndpoint resources found in {source_name}")]
    NoManifests { source_name: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SourceUnavailable { source_name, .. } => vec![
                format!("Failed to access: {source_name}"),
                "Check that the path exists and is readable".into(),
            ],
            Self::MalformedManifest { origin, .. } => vec![
                format!("Document {origin} is not a valid DNSEndpoint"),
                "Check YAML indentation and field types (recordTTL is an integer)".into(),
            ],
            Self::NoManifests { source_name } => vec![
                format!("Nothing to validate in {source_name}"),
                "Documents must have kind: DNSEndpoint (or be a List of them)".into(),
                "Use --ext to include other file extensions".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SourceUnavailable { .. } | Self::NoManifests { .. } => ErrorCategory::NotFound,
            Self::MalformedManifest { .. } => ErrorCategory::Validation,
        }
    }
}
