//! Terminal output for CLI commands
//!
//! - Findings go to stderr as `Error: <subject>` followed by the body
//! - Machine-readable output goes to stdout as one JSON document

use std::io::{self, Write};

use serde::Serialize;

use crate::report::ErrorLog;

use super::errors::CliResult;

/// Write every finding to `out`, one block per finding
pub fn write_findings<W: Write>(out: &mut W, findings: &[ErrorLog]) -> CliResult<()> {
    for finding in findings {
        writeln!(out, "Error: {}", finding.subject())?;
        writeln!(out, "{}", finding.body())?;
    }
    out.flush()?;
    Ok(())
}

/// Write a value as pretty JSON to stdout
pub fn write_json<T: Serialize>(value: &T) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
