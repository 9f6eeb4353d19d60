// ============================================================================
// domain/error.rs - FIELD ERROR DOMAIN
// ============================================================================

//! Structured, field-addressable validation errors.
//!
//! A check never returns more than one [`FieldError`]. The public resource
//! check wraps it in a [`ValidationError`] that keeps the field error as its
//! `source()`, so callers can always get back to kind, field, and value.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::DnsEndpointSpec;

/// Field names reported by the checks.
pub mod field {
    pub const RECORD_TYPE: &str = "RecordType";
    pub const DNS_NAME: &str = "DNSName";
    pub const TARGETS: &str = "Targets";
    pub const TTL: &str = "TTL";
    pub const ENDPOINTS: &str = "Endpoints";
}

// ── ErrorType ────────────────────────────────────────────────────────────────

/// How a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorType {
    /// Well-formed, but outside an enumerated set.
    #[serde(rename = "FieldValueNotSupported")]
    NotSupported,
    /// Fails a format or range rule.
    #[serde(rename = "FieldValueInvalid")]
    Invalid,
    /// A required field or collection is absent or empty.
    #[serde(rename = "FieldValueRequired")]
    Required,
}

impl ErrorType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotSupported => "Unsupported value",
            Self::Invalid => "Invalid value",
            Self::Required => "Required value",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── BadValue ─────────────────────────────────────────────────────────────────

/// The offending value, kept in its original shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BadValue {
    String(String),
    Integer(i64),
    EndpointSpec(Box<DnsEndpointSpec>),
}

impl BadValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for BadValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s:?}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::EndpointSpec(_) => f.write_str("<complex value>"),
        }
    }
}

impl From<&str> for BadValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for BadValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for BadValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

// ── FieldError ───────────────────────────────────────────────────────────────

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: ErrorType,
    pub field: &'static str,
    pub bad_value: BadValue,
    pub detail: String,
}

impl FieldError {
    pub fn new(
        kind: ErrorType,
        field: &'static str,
        bad_value: impl Into<BadValue>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            field,
            bad_value: bad_value.into(),
            detail: detail.into(),
        }
    }

    pub fn not_supported(
        field: &'static str,
        bad_value: impl Into<BadValue>,
        detail: impl Into<String>,
    ) -> Self {
        Self::new(ErrorType::NotSupported, field, bad_value, detail)
    }

    pub fn invalid(
        field: &'static str,
        bad_value: impl Into<BadValue>,
        detail: impl Into<String>,
    ) -> Self {
        Self::new(ErrorType::Invalid, field, bad_value, detail)
    }

    pub fn required(
        field: &'static str,
        bad_value: impl Into<BadValue>,
        detail: impl Into<String>,
    ) -> Self {
        Self::new(ErrorType::Required, field, bad_value, detail)
    }

    /// `<type>: <value>`, or just `<type>` for required fields.
    pub fn body(&self) -> String {
        match self.kind {
            ErrorType::Required => self.kind.to_string(),
            _ => format!("{}: {}", self.kind, self.bad_value),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self.field {
            field::DNS_NAME => vec![
                "dnsName must be a lowercase RFC 1123 subdomain, e.g. 'app.example.com'".into(),
                "Labels are 1-63 characters of [a-z0-9-], separated by '.'".into(),
            ],
            field::TARGETS => vec![
                format!("Target {} is not an IP address", self.bad_value),
                "Use IPv4 (10.9.8.7) or IPv6 (2001:db8::ffff) literals".into(),
            ],
            field::RECORD_TYPE => vec![
                format!("Record type {} is not supported", self.bad_value),
                format!("Use one of the {}", self.detail),
                "Record types are case-sensitive".into(),
            ],
            field::TTL => vec![
                format!("recordTTL is {}", self.bad_value),
                "Set recordTTL to a positive number of seconds, e.g. 3600".into(),
            ],
            field::ENDPOINTS => vec![
                "spec.endpoints must list at least one endpoint".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.body())?;
        if !self.detail.is_empty() {
            write!(f, ": {}", self.detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldError {}

// ── ValidationError ──────────────────────────────────────────────────────────

/// A DNSEndpoint resource failed validation.
///
/// Wraps exactly one [`FieldError`], reachable through `source()` or
/// [`ValidationError::field_error`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("error validating DNSEndpoint: {source}")]
pub struct ValidationError {
    source: FieldError,
}

impl ValidationError {
    pub fn new(source: FieldError) -> Self {
        Self { source }
    }

    pub fn field_error(&self) -> &FieldError {
        &self.source
    }

    pub fn into_field_error(self) -> FieldError {
        self.source
    }

    pub fn suggestions(&self) -> Vec<String> {
        self.source.suggestions()
    }
}

impl From<FieldError> for ValidationError {
    fn from(source: FieldError) -> Self {
        Self::new(source)
    }
}
