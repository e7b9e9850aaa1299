//! CLI argument definitions using clap
//!
//! Commands:
//! - datalint check --config <path> <input>
//! - datalint describe <input>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// datalint - versioned layout and value validation for key/value input
#[derive(Parser, Debug)]
#[command(name = "datalint")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate an input file against the patches that cover its version
    Check {
        /// Path to configuration file
        #[arg(long, default_value = "./datalint.json")]
        config: PathBuf,

        /// CSV input to validate
        input: PathBuf,
    },

    /// Print the application name and version found in an input file
    Describe {
        /// CSV input to inspect
        input: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
