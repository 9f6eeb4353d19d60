//! Decoding DNSEndpoint resources from manifest text.
//!
//! Accepts multi-document YAML and plain JSON. A document is read as a
//! DNSEndpoint when its `kind` is `DNSEndpoint` or absent; `List` documents
//! (and top-level sequences) contribute their items; anything else is
//! skipped so mixed manifests can be pointed at directly.

use serde::Deserialize;
use serde_yaml::Value;
use tracing::debug;

use dnsendpoint_core::{
    application::{ApplicationError, Manifest, ManifestOrigin},
    domain::{DnsEndpoint, KIND},
    error::{CoreError, CoreResult},
};

const LIST_KIND: &str = "List";

/// Parse every DNSEndpoint resource in `text`.
///
/// `source` names the text in origins and errors.
pub fn parse_manifests(source: &str, text: &str) -> CoreResult<Vec<Manifest>> {
    let mut resources = Vec::new();
    for (document, value) in documents(source, text)?.into_iter().enumerate() {
        collect(source, document, value, &mut resources)?;
    }

    Ok(resources
        .into_iter()
        .enumerate()
        .map(|(index, resource)| Manifest::new(ManifestOrigin::new(source, index), resource))
        .collect())
}

/// Split `text` into raw documents.
fn documents(source: &str, text: &str) -> CoreResult<Vec<Value>> {
    // Flow-style YAML also starts with `{` or `[`, so a JSON failure falls
    // through to the YAML reader.
    if looks_like_json(text) {
        if let Ok(value) = serde_json::from_str::<Value>(text) {
            return Ok(vec![value]);
        }
    }

    serde_yaml::Deserializer::from_str(text)
        .enumerate()
        .map(|(document, de)| {
            Value::deserialize(de).map_err(|e| malformed(source, document, e.to_string()))
        })
        .collect()
}

fn looks_like_json(text: &str) -> bool {
    matches!(text.trim_start().chars().next(), Some('{' | '['))
}

fn collect(
    source: &str,
    document: usize,
    value: Value,
    out: &mut Vec<DnsEndpoint>,
) -> CoreResult<()> {
    match value {
        Value::Null => Ok(()),
        Value::Sequence(items) => items
            .into_iter()
            .try_for_each(|item| collect(source, document, item, out)),
        value => match kind_of(&value).as_deref() {
            None | Some(KIND) => {
                let resource = serde_yaml::from_value::<DnsEndpoint>(value)
                    .map_err(|e| malformed(source, document, e.to_string()))?;
                out.push(resource);
                Ok(())
            }
            Some(LIST_KIND) => match value.get("items") {
                Some(items) => collect(source, document, items.clone(), out),
                None => Ok(()),
            },
            Some(other) => {
                debug!(source, document, kind = other, "Skipping non-DNSEndpoint document");
                Ok(())
            }
        },
    }
}

fn kind_of(value: &Value) -> Option<String> {
    value.get("kind").and_then(Value::as_str).map(str::to_owned)
}

fn malformed(source: &str, document: usize, reason: String) -> CoreError {
    ApplicationError::MalformedManifest {
        origin: format!("{source}#{document}"),
        reason,
    }
    .into()
}
