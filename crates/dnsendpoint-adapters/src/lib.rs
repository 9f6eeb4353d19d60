//! Infrastructure adapters for dnsendpoint.
//!
//! This crate implements the ports defined in `dnsendpoint-core::application::ports`.
//! It contains all manifest decoding and file I/O.

pub mod manifest;
pub mod source;

// Re-export commonly used adapters
pub use manifest::parse_manifests;
pub use source::{DEFAULT_EXTENSIONS, InMemorySource, LocalManifestSource};
