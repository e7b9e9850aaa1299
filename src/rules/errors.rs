//! Rule error types
//!
//! Like layout errors, these mark a broken patch set and abort the fold.

use thiserror::Error;

/// Result type for rule operations
pub type RuleResult<T> = Result<T, RuleError>;

/// Structural errors raised while building a rule specification
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// A field rule is missing its value rule or its selector
    #[error("Field rule for '{field}' has no {part}")]
    UninitializedRule { field: String, part: &'static str },

    #[error("Invalid integer range: max {max} is less than min {min}")]
    InvalidRange { min: i64, max: i64 },

    #[error("Rule patch name cannot be empty")]
    EmptyPatchName,

    #[error("Rule patch '{patch}' failed: {source}")]
    Patch {
        patch: String,
        #[source]
        source: Box<RuleError>,
    },
}

impl RuleError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            RuleError::UninitializedRule { .. } => "DATALINT_RULE_UNINITIALIZED",
            RuleError::InvalidRange { .. } => "DATALINT_RULE_INVALID_RANGE",
            RuleError::EmptyPatchName => "DATALINT_RULE_EMPTY_PATCH_NAME",
            RuleError::Patch { source, .. } => source.code(),
        }
    }

    /// Innermost error, with patch context stripped
    pub fn root(&self) -> &RuleError {
        match self {
            RuleError::Patch { source, .. } => source.root(),
            other => other,
        }
    }

    pub(crate) fn in_patch(self, patch: &str) -> Self {
        RuleError::Patch {
            patch: patch.to_string(),
            source: Box::new(self),
        }
    }
}
