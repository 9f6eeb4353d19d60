//! Resources as read from a manifest source.

use std::fmt;

use crate::domain::DnsEndpoint;

/// Where a resource came from: a source name and the resource's position in it.
///
/// `index` counts resources, not YAML documents: the items of a `List`
/// document each get their own index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ManifestOrigin {
    pub source: String,
    pub index: usize,
}

impl ManifestOrigin {
    pub fn new(source: impl Into<String>, index: usize) -> Self {
        Self {
            source: source.into(),
            index,
        }
    }
}

impl fmt::Display for ManifestOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.source, self.index)
    }
}

/// A DNSEndpoint resource together with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub origin: ManifestOrigin,
    pub resource: DnsEndpoint,
}

impl Manifest {
    pub fn new(origin: ManifestOrigin, resource: DnsEndpoint) -> Self {
        Self { origin, resource }
    }
}
