//! The `DNSEndpoint` custom resource and its spec.

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::endpoint::Endpoint,
    error::{FieldError, ValidationError},
    validation,
};

pub const API_VERSION: &str = "externaldns.nginx.org/v1";
pub const KIND: &str = "DNSEndpoint";

/// A `DNSEndpoint` resource as submitted to the cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsEndpoint {
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: DnsEndpointSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DnsEndpointStatus>,
}

/// The subset of Kubernetes object metadata this crate reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default)]
    pub generation: i64,
}

/// Desired DNS records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsEndpointSpec {
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsEndpointStatus {
    /// The generation last processed by the controller.
    #[serde(default)]
    pub observed_generation: i64,
}

impl DnsEndpoint {
    /// A named resource with `apiVersion` and `kind` filled in.
    pub fn new(name: impl Into<String>, spec: DnsEndpointSpec) -> Self {
        Self {
            api_version: API_VERSION.to_owned(),
            kind: KIND.to_owned(),
            metadata: ObjectMeta {
                name: name.into(),
                ..ObjectMeta::default()
            },
            spec,
            status: None,
        }
    }

    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.metadata.namespace = Some(namespace.into());
        self
    }

    /// `namespace/name`, `name`, or `<unnamed>`.
    pub fn qualified_name(&self) -> String {
        let name = if self.metadata.name.is_empty() {
            "<unnamed>"
        } else {
            self.metadata.name.as_str()
        };
        match self.metadata.namespace.as_deref() {
            Some(ns) if !ns.is_empty() => format!("{ns}/{name}"),
            _ => name.to_owned(),
        }
    }

    /// Validate the embedded spec.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_resource(self)
    }
}

impl DnsEndpointSpec {
    pub fn new(endpoints: impl IntoIterator<Item = Endpoint>) -> Self {
        Self {
            endpoints: endpoints.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        validation::validate_spec(self)
    }
}
