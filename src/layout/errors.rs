//! Layout error types
//!
//! These are authoring errors in a patch set, never data errors. A
//! builder that hits one aborts the fold.

use thiserror::Error;

/// Result type for layout operations
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Structural errors raised while building a layout specification
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("Field already exists: {0}")]
    FieldExists(String),

    #[error("Field does not exist: {0}")]
    FieldNotFound(String),

    #[error("Ordering constraint already exists: {before} -> {after}")]
    OrderingExists { before: String, after: String },

    #[error("Ordering constraint does not exist: {before} -> {after}")]
    OrderingNotFound { before: String, after: String },

    #[error("Invalid cardinality: max count {max} is less than min count {min}")]
    InvalidCardinality { min: usize, max: usize },

    #[error("Layout patch name cannot be empty")]
    EmptyPatchName,

    #[error("Layout patch '{patch}' failed: {source}")]
    Patch {
        patch: String,
        #[source]
        source: Box<LayoutError>,
    },
}

impl LayoutError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            LayoutError::FieldExists(_) => "DATALINT_LAYOUT_FIELD_EXISTS",
            LayoutError::FieldNotFound(_) => "DATALINT_LAYOUT_FIELD_NOT_FOUND",
            LayoutError::OrderingExists { .. } => "DATALINT_LAYOUT_ORDERING_EXISTS",
            LayoutError::OrderingNotFound { .. } => "DATALINT_LAYOUT_ORDERING_NOT_FOUND",
            LayoutError::InvalidCardinality { .. } => "DATALINT_LAYOUT_INVALID_CARDINALITY",
            LayoutError::EmptyPatchName => "DATALINT_LAYOUT_EMPTY_PATCH_NAME",
            LayoutError::Patch { source, .. } => source.code(),
        }
    }

    /// Innermost error, with patch context stripped
    pub fn root(&self) -> &LayoutError {
        match self {
            LayoutError::Patch { source, .. } => source.root(),
            other => other,
        }
    }

    pub(crate) fn in_patch(self, patch: &str) -> Self {
        LayoutError::Patch {
            patch: patch.to_string(),
            source: Box::new(self),
        }
    }
}
