//! CLI command implementations
//!
//! `check` loads the config and manifest, lints one input and reports
//! every finding. `describe` only resolves the application descriptor.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::descriptor::{ApplicationDescriptorResolver, DefaultCsvApplicationDescriptorResolver};
use crate::input::{CsvFileParser, FileParser};
use crate::layout::UnexpectedFieldStrictness;
use crate::lint::Linter;
use crate::manifest::ManifestLoader;
use crate::observability::{log_event_with_fields, Event, Logger, Severity};
use crate::report::{ErrorProcessor, FileOutputErrorProcessor};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{write_findings, write_json};

/// Configuration file structure
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Patch manifest (required). Relative paths are resolved against
    /// the directory holding the config file.
    pub manifest: PathBuf,

    /// Whether undeclared fields are reported (default: permissive)
    #[serde(default)]
    pub strictness: UnexpectedFieldStrictness,

    /// Report file receiving every finding (optional)
    #[serde(default)]
    pub error_output: Option<PathBuf>,

    /// Minimum log severity (default: info)
    #[serde(default = "default_log_level")]
    pub log_level: Severity,

    #[serde(skip)]
    base_dir: PathBuf,
}

fn default_log_level() -> Severity {
    Severity::Info
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let mut config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;
        config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.manifest.as_os_str().is_empty() {
            return Err(CliError::config_error("manifest path must not be empty"));
        }
        if let Some(output) = &self.error_output {
            if output.as_os_str().is_empty() {
                return Err(CliError::config_error("error_output path must not be empty"));
            }
        }
        Ok(())
    }

    /// Manifest path, resolved against the config file's directory
    pub fn manifest_path(&self) -> PathBuf {
        self.base_dir.join(&self.manifest)
    }

    /// Report path, resolved against the config file's directory
    pub fn error_output_path(&self) -> Option<PathBuf> {
        self.error_output.as_ref().map(|p| self.base_dir.join(p))
    }
}

/// Whether a command finished without findings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    Findings,
}

/// Parse arguments and run the requested command
pub fn run() -> CliResult<Outcome> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<Outcome> {
    match cmd {
        Command::Check { config, input } => check(&config, &input),
        Command::Describe { input } => describe(&input),
    }
}

/// Lint `input` with the patches named by the config at `config_path`.
///
/// Findings are printed to stderr and, when configured, written to the
/// report file. Findings are not an error: they yield
/// `Outcome::Findings`.
pub fn check(config_path: &Path, input: &Path) -> CliResult<Outcome> {
    let config = Config::load(config_path)?;
    Logger::set_min_severity(config.log_level);

    let config_str = config_path.display().to_string();
    log_event_with_fields(Event::ConfigLoaded, &[("path", config_str.as_str())]);

    let patches = ManifestLoader::new().load(&config.manifest_path())?;
    let linter = Linter::new(patches, config.strictness);
    let report = linter.lint_file(&CsvFileParser::new(), input)?;

    write_findings(&mut io::stderr(), &report.findings)?;

    if let Some(path) = config.error_output_path() {
        FileOutputErrorProcessor::new(&path).process(&report.findings)?;

        let path_str = path.display().to_string();
        let count = report.findings.len().to_string();
        log_event_with_fields(
            Event::ReportWritten,
            &[("findings", count.as_str()), ("path", path_str.as_str())],
        );
    }

    Ok(if report.is_clean() {
        Outcome::Clean
    } else {
        Outcome::Findings
    })
}

/// Print the descriptor of `input` as JSON, or its resolution errors.
pub fn describe(input: &Path) -> CliResult<Outcome> {
    let raw = CsvFileParser::new()
        .parse(input)
        .map_err(|e| CliError::io_error(e.to_string()))?;

    match DefaultCsvApplicationDescriptorResolver::new()
        .resolve(&raw)
        .into_result()
    {
        Ok(descriptor) => {
            write_json(&descriptor)?;
            Ok(Outcome::Clean)
        }
        Err(errors) => {
            for error in &errors {
                eprintln!("Error: {}", error);
            }
            Ok(Outcome::Findings)
        }
    }
}
