//! Driven (output) ports - implemented by infrastructure.
//!
//! The `dnsendpoint-adapters` crate provides implementations.

use crate::application::Manifest;
use crate::error::CoreResult;

/// Port for reading DNSEndpoint resources.
///
/// Implemented by:
/// - `dnsendpoint_adapters::LocalManifestSource` (files and directories)
/// - `dnsendpoint_adapters::InMemorySource` (stdin, tests)
#[cfg_attr(test, mockall::automock)]
pub trait ManifestSource: Send + Sync {
    /// Load every DNSEndpoint resource, in source order.
    fn load(&self) -> CoreResult<Vec<Manifest>>;

    /// Short human-readable name of the source, used in logs and errors.
    fn describe(&self) -> String;
}
