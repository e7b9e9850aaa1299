//! Version error types

use thiserror::Error;

/// Result type for version operations
pub type VersionResult<T> = Result<T, VersionError>;

/// Errors raised while parsing versions or building ranges
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("Invalid version format '{0}': expected MAJOR.MINOR.PATCH")]
    Malformed(String),

    #[error("Invalid version component '{component}' in '{input}'")]
    InvalidComponent { input: String, component: String },

    #[error("Version range lower bound {min} is greater than upper bound {max}")]
    InvertedRange { min: String, max: String },
}

impl VersionError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            VersionError::Malformed(_) => "DATALINT_VERSION_MALFORMED",
            VersionError::InvalidComponent { .. } => "DATALINT_VERSION_INVALID_COMPONENT",
            VersionError::InvertedRange { .. } => "DATALINT_VERSION_INVERTED_RANGE",
        }
    }
}
