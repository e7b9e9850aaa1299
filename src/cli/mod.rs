//! CLI module for datalint
//!
//! Provides command-line interface for:
//! - check: Validate an input file against a patch manifest
//! - describe: Print the application descriptor of an input file

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check, describe, run, run_command, Config, Outcome};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_findings, write_json};
