//! datalint CLI entry point
//!
//! This is a minimal entrypoint that:
//! 1. Dispatches to CLI commands (via cli::run)
//! 2. Prints errors to stderr
//! 3. Exits with non-zero on failure or when findings were reported
//!
//! All logic is delegated to the CLI module.

use datalint::cli::{self, Outcome};

fn main() {
    match cli::run() {
        Ok(Outcome::Clean) => {}
        Ok(Outcome::Findings) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
