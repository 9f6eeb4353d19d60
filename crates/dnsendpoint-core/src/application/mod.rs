//! Application layer for dnsendpoint.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ValidationService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! validation rules itself. All rules live in `crate::domain`.

pub mod error;
pub mod manifest;
pub mod ports;
pub mod services;

pub use services::{ManifestOutcome, ValidationReport, ValidationService};

// Re-export port traits (for adapter implementation)
pub use ports::ManifestSource;

pub use error::ApplicationError;
pub use manifest::{Manifest, ManifestOrigin};
