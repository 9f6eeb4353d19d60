//! `dnsendpoint validate` - validate manifests from disk or stdin.

use std::io::Read;

use serde::Serialize;
use tracing::debug;

use dnsendpoint_adapters::{InMemorySource, LocalManifestSource};
use dnsendpoint_core::{
    application::{ManifestOutcome, ValidationReport, ValidationService, ports::ManifestSource},
    domain::FieldError,
};

use crate::{
    cli::{OutputFormat, ValidateArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Source name used for stdin in origins and messages.
const STDIN_NAME: &str = "<stdin>";

pub fn execute(args: ValidateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let fail_fast = args.fail_fast || config.validate.fail_fast;
    let source = build_source(&args, &config)?;

    let report = ValidationService::new(source)
        .with_fail_fast(fail_fast)
        .run()?;

    match output.format() {
        OutputFormat::Json => output.json(&JsonReport::from(&report))?,
        _ => render_text(&report, &output)?,
    }

    if report.is_valid() {
        Ok(())
    } else {
        Err(CliError::ValidationFailed {
            invalid: report.invalid_count(),
            total: report.total(),
        })
    }
}

fn build_source(args: &ValidateArgs, config: &AppConfig) -> CliResult<Box<dyn ManifestSource>> {
    if args.reads_stdin() {
        if args.paths.len() > 1 {
            return Err(CliError::InvalidInput {
                message: "'-' (stdin) cannot be combined with other paths".into(),
                source: None,
            });
        }

        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .with_cli_context(|| "Failed to read manifests from stdin")?;
        debug!(bytes = text.len(), "Read stdin");

        return Ok(Box::new(
            InMemorySource::new(STDIN_NAME).with_document(STDIN_NAME, text),
        ));
    }

    let extensions = if args.extensions.is_empty() {
        &config.validate.extensions
    } else {
        &args.extensions
    };

    Ok(Box::new(
        LocalManifestSource::new(args.paths.iter().cloned())
            .with_extensions(extensions)
            .with_follow_links(args.follow_links || config.validate.follow_links),
    ))
}

fn render_text(report: &ValidationReport, output: &OutputManager) -> CliResult<()> {
    for outcome in report.outcomes() {
        let label = format!("{} ({})", outcome.resource_name, outcome.origin);
        match outcome.error() {
            None => output.success(&label)?,
            Some(err) => output.error(&format!("{label}: {err}"))?,
        }
    }

    let summary = format!(
        "{} resource(s) checked, {} invalid",
        report.total(),
        report.invalid_count()
    );
    if report.is_valid() {
        output.info(&summary)?;
    } else {
        output.warning(&summary)?;
    }
    Ok(())
}

// ── JSON report ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    valid: bool,
    total: usize,
    invalid: usize,
    results: Vec<JsonOutcome<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonOutcome<'a> {
    source: &'a str,
    index: usize,
    resource: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonError<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonError<'a> {
    message: String,
    #[serde(flatten)]
    field: &'a FieldError,
}

impl<'a> From<&'a ValidationReport> for JsonReport<'a> {
    fn from(report: &'a ValidationReport) -> Self {
        Self {
            valid: report.is_valid(),
            total: report.total(),
            invalid: report.invalid_count(),
            results: report.outcomes().iter().map(JsonOutcome::from).collect(),
        }
    }
}

impl<'a> From<&'a ManifestOutcome> for JsonOutcome<'a> {
    fn from(outcome: &'a ManifestOutcome) -> Self {
        Self {
            source: &outcome.origin.source,
            index: outcome.origin.index,
            resource: &outcome.resource_name,
            valid: outcome.is_valid(),
            error: outcome.error().map(|e| JsonError {
                message: e.to_string(),
                field: e.field_error(),
            }),
        }
    }
}
