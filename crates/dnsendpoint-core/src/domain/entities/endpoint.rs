//! A single DNS record entry of a DNSEndpoint spec.
//!
//! Field names follow the `externaldns.nginx.org/v1` JSON schema. Every field
//! defaults when absent so that partially-filled manifests still deserialize
//! and are rejected by validation instead of by the parser.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::FieldError,
    validation,
    value_objects::{RecordType, Ttl},
};

/// One DNS record: name, targets, type, and TTL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    /// The hostname of the DNS record.
    #[serde(default)]
    pub dns_name: String,

    /// The record data, IP address literals.
    #[serde(default)]
    pub targets: Vec<String>,

    /// Raw record type as written in the manifest, e.g. `"A"`.
    #[serde(default)]
    pub record_type: String,

    #[serde(default, rename = "recordTTL")]
    pub record_ttl: Ttl,

    /// Opaque labels attached by the controller. Not validated.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    /// Provider-specific configuration. Not validated.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub provider_specific: Vec<ProviderSpecificProperty>,
}

/// A name/value pair handed through to the DNS provider unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSpecificProperty {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

impl Endpoint {
    pub fn new(
        dns_name: impl Into<String>,
        record_type: impl Into<String>,
        record_ttl: i64,
    ) -> Self {
        Self {
            dns_name: dns_name.into(),
            record_type: record_type.into(),
            record_ttl: Ttl::new(record_ttl),
            ..Self::default()
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.targets.push(target.into());
        self
    }

    pub fn with_targets<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.targets.extend(targets.into_iter().map(Into::into));
        self
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// The record type, if it is one of the supported ones.
    pub fn parsed_record_type(&self) -> Option<RecordType> {
        self.record_type.parse().ok()
    }

    /// Validate all four fields, stopping at the first failure.
    pub fn validate(&self) -> Result<(), FieldError> {
        validation::validate_endpoint(self)
    }
}
