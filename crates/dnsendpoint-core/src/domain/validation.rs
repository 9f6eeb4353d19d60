//! Field validation for DNSEndpoint resources.
//!
//! Four independent leaf checks (record type, DNS name, targets, TTL) are
//! composed by two aggregating checks. Every check returns at most one
//! error; aggregators stop at the first failure.
//!
//! Endpoint fields are checked in a fixed order: DNS name, targets, record
//! type, TTL. An endpoint with several bad fields always reports the first
//! one in that order.

use crate::domain::{
    entities::{DnsEndpoint, DnsEndpointSpec, Endpoint},
    error::{BadValue, FieldError, ValidationError, field},
    syntax,
    value_objects::{RecordType, Ttl},
};

/// Centralized domain validation.
///
/// Stateless; safe to call from any number of threads at once.
pub struct DomainValidator;

impl DomainValidator {
    /// Validate one endpoint's four fields.
    pub fn validate_endpoint(endpoint: &Endpoint) -> Result<(), FieldError> {
        validate_endpoint(endpoint)
    }

    /// Validate a non-empty list of endpoints.
    pub fn validate_spec(spec: &DnsEndpointSpec) -> Result<(), FieldError> {
        validate_spec(spec)
    }

    /// Validate a full resource, wrapping any field error.
    pub fn validate_resource(resource: &DnsEndpoint) -> Result<(), ValidationError> {
        validate_resource(resource)
    }
}

// ── Leaf checks ───────────────────────────────────────────────────────────────

/// Record type must be exactly one of the supported literals.
pub(crate) fn verify_record_type(record: &str) -> Result<(), FieldError> {
    record.parse::<RecordType>().map(|_| ())
}

/// DNS name must be an RFC 1123 subdomain.
pub(crate) fn verify_dns_name(name: &str) -> Result<(), FieldError> {
    let violations = syntax::is_dns1123_subdomain(name);
    if violations.is_empty() {
        return Ok(());
    }
    Err(FieldError::invalid(
        field::DNS_NAME,
        name,
        violations.join(", "),
    ))
}

/// Every target must be an IP address. Reports the first bad target with
/// the first violation message for it. An empty list passes.
pub(crate) fn verify_targets(targets: &[String]) -> Result<(), FieldError> {
    for target in targets {
        let violations = syntax::is_valid_ip(target);
        if let Some(first) = violations.into_iter().next() {
            return Err(FieldError::invalid(field::TARGETS, target.as_str(), first));
        }
    }
    Ok(())
}

/// TTL must be strictly positive. No upper bound.
pub(crate) fn verify_ttl(ttl: Ttl) -> Result<(), FieldError> {
    if ttl.is_positive() {
        return Ok(());
    }
    Err(FieldError::invalid(
        field::TTL,
        ttl.seconds(),
        "ttl value should be > 0",
    ))
}

// ── Aggregates ────────────────────────────────────────────────────────────────

pub(crate) fn validate_endpoint(endpoint: &Endpoint) -> Result<(), FieldError> {
    verify_dns_name(&endpoint.dns_name)?;
    verify_targets(&endpoint.targets)?;
    verify_record_type(&endpoint.record_type)?;
    verify_ttl(endpoint.record_ttl)
}

pub(crate) fn validate_spec(spec: &DnsEndpointSpec) -> Result<(), FieldError> {
    if spec.endpoints.is_empty() {
        return Err(FieldError::required(
            field::ENDPOINTS,
            BadValue::EndpointSpec(Box::new(spec.clone())),
            "a list of endpoints",
        ));
    }
    spec.endpoints.iter().try_for_each(validate_endpoint)
}

pub(crate) fn validate_resource(resource: &DnsEndpoint) -> Result<(), ValidationError> {
    validate_spec(&resource.spec).map_err(ValidationError::new)
}
