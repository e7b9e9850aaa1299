//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit code.

use std::fmt;
use std::io;

use crate::layout::LayoutError;
use crate::lint::LintError;
use crate::manifest::ManifestError;
use crate::rules::RuleError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (input, report, stdout)
    IoError,
    /// Patch manifest could not be loaded
    ManifestError,
    /// Patch set could not be folded into a specification
    SpecificationError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "DATALINT_CLI_CONFIG_ERROR",
            Self::IoError => "DATALINT_CLI_IO_ERROR",
            Self::ManifestError => "DATALINT_CLI_MANIFEST_ERROR",
            Self::SpecificationError => "DATALINT_CLI_SPECIFICATION_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<ManifestError> for CliError {
    fn from(e: ManifestError) -> Self {
        Self::new(CliErrorCode::ManifestError, format!("[{}] {}", e.code(), e))
    }
}

impl From<LayoutError> for CliError {
    fn from(e: LayoutError) -> Self {
        Self::new(CliErrorCode::SpecificationError, format!("[{}] {}", e.code(), e))
    }
}

impl From<RuleError> for CliError {
    fn from(e: RuleError) -> Self {
        Self::new(CliErrorCode::SpecificationError, format!("[{}] {}", e.code(), e))
    }
}

impl From<LintError> for CliError {
    fn from(e: LintError) -> Self {
        match e {
            LintError::Input(e) => Self::io_error(e.to_string()),
            LintError::Layout(e) => e.into(),
            LintError::Rule(e) => e.into(),
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
