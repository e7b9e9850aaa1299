//! Manifest error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::layout::LayoutError;
use crate::rules::RuleError;

/// Result type for manifest loading
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Errors raised while loading a patch manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed manifest '{path}': {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid layout patch in manifest: {0}")]
    Layout(#[from] LayoutError),

    #[error("Invalid rule patch in manifest: {0}")]
    Rule(#[from] RuleError),
}

impl ManifestError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ManifestError::Io { .. } => "DATALINT_MANIFEST_IO",
            ManifestError::Malformed { .. } => "DATALINT_MANIFEST_MALFORMED",
            ManifestError::Layout(e) => e.code(),
            ManifestError::Rule(e) => e.code(),
        }
    }
}
