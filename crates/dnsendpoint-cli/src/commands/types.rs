//! `dnsendpoint types` - list supported record types.

use dnsendpoint_core::domain::RecordType;

use crate::{cli::OutputFormat, error::CliResult, output::OutputManager};

pub fn execute(output: OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.json(&RecordType::ALL)?;
        return Ok(());
    }

    output.header("Supported record types:")?;
    for record in RecordType::ALL {
        output.print(&format!("  {record}"))?;
    }
    Ok(())
}
