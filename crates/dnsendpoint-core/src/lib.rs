//! dnsendpoint Core - DNSEndpoint validation
//!
//! This crate provides the domain and application layers for validating
//! `DNSEndpoint` custom resources (`externaldns.nginx.org/v1`) before they
//! are admitted into a cluster, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         dnsendpoint-cli (CLI)           │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (ValidationService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │           (ManifestSource)              │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   dnsendpoint-adapters (Infrastructure) │
//! │ (LocalManifestSource, InMemorySource)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (DnsEndpoint, FieldError, Validator)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use dnsendpoint_core::domain::{DnsEndpoint, DnsEndpointSpec, Endpoint, ErrorType};
//!
//! let endpoint = Endpoint::new("example.com", "A", 3600).with_target("10.1.2.3");
//! let resource = DnsEndpoint::new("web", DnsEndpointSpec::new([endpoint]));
//! assert!(resource.validate().is_ok());
//!
//! let err = DnsEndpoint::default().validate().unwrap_err();
//! assert_eq!(err.field_error().kind, ErrorType::Required);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Manifest, ManifestOrigin, ManifestOutcome, ValidationReport, ValidationService,
        ports::ManifestSource,
    };
    pub use crate::domain::{
        BadValue, DnsEndpoint, DnsEndpointSpec, DomainValidator, Endpoint, ErrorType, FieldError,
        RecordType, Ttl, ValidationError,
    };
    pub use crate::error::{CoreError, CoreResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
