//! Validation Service - validate every resource a source yields.
//!
//! 1. Load manifests from the source
//! 2. Validate each resource independently
//! 3. Collect one outcome per resource into a report
//!
//! Each resource gets at most one error (the first failing field). The
//! report lists every resource unless fail-fast is enabled, in which case it
//! ends at the first invalid one.

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, Manifest, ManifestOrigin, ports::ManifestSource},
    domain::{DomainValidator, ValidationError},
    error::CoreResult,
};

/// Result of validating one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestOutcome {
    pub origin: ManifestOrigin,
    pub resource_name: String,
    pub result: Result<(), ValidationError>,
}

impl ManifestOutcome {
    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.result.as_ref().err()
    }
}

/// Outcomes for every validated resource, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    outcomes: Vec<ManifestOutcome>,
}

impl ValidationReport {
    pub fn outcomes(&self) -> &[ManifestOutcome] {
        &self.outcomes
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn invalid_count(&self) -> usize {
        self.failures().count()
    }

    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(ManifestOutcome::is_valid)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ManifestOutcome> {
        self.outcomes.iter().filter(|o| !o.is_valid())
    }
}

/// Validates the resources of one manifest source.
pub struct ValidationService {
    source: Box<dyn ManifestSource>,
    fail_fast: bool,
}

impl ValidationService {
    /// Create a new validation service over the given source.
    pub fn new(source: Box<dyn ManifestSource>) -> Self {
        Self {
            source,
            fail_fast: false,
        }
    }

    /// Stop after the first invalid resource.
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Load and validate every resource.
    #[instrument(skip_all, fields(source = %self.source.describe(), fail_fast = self.fail_fast))]
    pub fn run(&self) -> CoreResult<ValidationReport> {
        let manifests = self.source.load()?;
        if manifests.is_empty() {
            return Err(ApplicationError::NoManifests {
                source_name: self.source.describe(),
            }
            .into());
        }
        info!(count = manifests.len(), "Validating DNSEndpoint resources");

        let mut report = ValidationReport::default();
        for manifest in manifests {
            let outcome = Self::validate(manifest);
            let stop = self.fail_fast && !outcome.is_valid();
            report.outcomes.push(outcome);
            if stop {
                debug!("Stopping at first invalid resource");
                break;
            }
        }

        info!(
            total = report.total(),
            invalid = report.invalid_count(),
            "Validation finished"
        );
        Ok(report)
    }

    /// Validate a single manifest.
    pub fn validate(manifest: Manifest) -> ManifestOutcome {
        let resource_name = manifest.resource.qualified_name();
        let result = DomainValidator::validate_resource(&manifest.resource);

        match &result {
            Ok(()) => debug!(origin = %manifest.origin, resource = %resource_name, "valid"),
            Err(e) => debug!(
                origin = %manifest.origin,
                resource = %resource_name,
                field = e.field_error().field,
                "{e}"
            ),
        }

        ManifestOutcome {
            origin: manifest.origin,
            resource_name,
            result,
        }
    }
}
