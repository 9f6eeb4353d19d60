//! `dnsendpoint check` - validate one endpoint given as flags.

use serde_json::json;

use dnsendpoint_core::domain::{DomainValidator, Endpoint};

use crate::{
    cli::{CheckArgs, OutputFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: CheckArgs, output: OutputManager) -> CliResult<()> {
    let endpoint = Endpoint::new(args.name, args.record_type, args.ttl).with_targets(args.targets);
    let result = DomainValidator::validate_endpoint(&endpoint);

    if output.format() == OutputFormat::Json {
        output.json(&json!({
            "endpoint": &endpoint,
            "valid": result.is_ok(),
            "error": result.as_ref().err(),
        }))?;
    } else if result.is_ok() {
        output.success(&format!(
            "{} {} (ttl {}) is valid",
            endpoint.record_type, endpoint.dns_name, endpoint.record_ttl
        ))?;
    }

    result.map_err(Into::into)
}
