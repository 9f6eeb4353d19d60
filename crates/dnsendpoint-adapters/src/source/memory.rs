//! In-memory manifest source, used for stdin and in tests.

use dnsendpoint_core::{
    application::{Manifest, ManifestOrigin, ports::ManifestSource},
    domain::DnsEndpoint,
    error::CoreResult,
};

use crate::manifest::parse_manifests;

/// Holds manifest text and already-decoded resources.
///
/// Documents are parsed on every `load`; resources are returned after them.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    name: String,
    documents: Vec<(String, String)>,
    resources: Vec<DnsEndpoint>,
}

impl InMemorySource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add manifest text under the given source name.
    pub fn with_document(mut self, source: impl Into<String>, text: impl Into<String>) -> Self {
        self.documents.push((source.into(), text.into()));
        self
    }

    /// Add a decoded resource.
    pub fn with_resource(mut self, resource: DnsEndpoint) -> Self {
        self.resources.push(resource);
        self
    }
}

impl ManifestSource for InMemorySource {
    fn load(&self) -> CoreResult<Vec<Manifest>> {
        let mut manifests = Vec::new();
        for (source, text) in &self.documents {
            manifests.extend(parse_manifests(source, text)?);
        }
        manifests.extend(
            self.resources
                .iter()
                .enumerate()
                .map(|(i, r)| Manifest::new(ManifestOrigin::new(&self.name, i), r.clone())),
        );
        Ok(manifests)
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}
