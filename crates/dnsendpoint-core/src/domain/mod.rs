// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for dnsendpoint.
//!
//! This module contains pure validation logic with no I/O. Reading manifests
//! is handled via ports defined in the application layer.
//!
//! ## Rules
//!
//! - **No async**: every check is a synchronous, total function of its input
//! - **No I/O, no logging**: the domain never prints or installs subscribers
//! - **Immutable inputs**: resources are borrowed, never mutated
//! - **One error per call**: aggregating checks stop at the first failure
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod syntax;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    API_VERSION, DnsEndpoint, DnsEndpointSpec, DnsEndpointStatus, Endpoint, KIND, ObjectMeta,
    ProviderSpecificProperty,
};

pub use error::{BadValue, ErrorType, FieldError, ValidationError, field};

pub use value_objects::{RecordType, Ttl};

pub use validation::DomainValidator;
