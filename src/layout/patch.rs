//! Versioned layout patches

use crate::version::VersionRange;

use super::errors::{LayoutError, LayoutResult};
use super::types::{ExpectedField, FieldOrderingConstraint, FieldUpdate, LayoutSpecification};

/// One step of a layout patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutPatchOperation {
    AddField { key: String, field: ExpectedField },
    RemoveField { key: String },
    ModifyField { key: String, update: FieldUpdate },
    AddFieldOrdering { before: String, after: String },
    RemoveFieldOrdering { before: String, after: String },
}

impl LayoutPatchOperation {
    pub fn add_field(key: impl Into<String>, field: ExpectedField) -> Self {
        Self::AddField {
            key: key.into(),
            field,
        }
    }

    pub fn remove_field(key: impl Into<String>) -> Self {
        Self::RemoveField { key: key.into() }
    }

    pub fn modify_field(key: impl Into<String>, update: FieldUpdate) -> Self {
        Self::ModifyField {
            key: key.into(),
            update,
        }
    }

    pub fn add_ordering(before: impl Into<String>, after: impl Into<String>) -> Self {
        Self::AddFieldOrdering {
            before: before.into(),
            after: after.into(),
        }
    }

    pub fn remove_ordering(before: impl Into<String>, after: impl Into<String>) -> Self {
        Self::RemoveFieldOrdering {
            before: before.into(),
            after: after.into(),
        }
    }

    /// Applies this operation to `spec`.
    pub fn apply(&self, spec: &mut LayoutSpecification) -> LayoutResult<()> {
        match self {
            Self::AddField { key, field } => spec.add_field(key, *field),
            Self::RemoveField { key } => spec.remove_field(key),
            Self::ModifyField { key, update } => spec.modify_field(key, update),
            Self::AddFieldOrdering { before, after } => {
                spec.add_ordering(FieldOrderingConstraint::new(before.as_str(), after.as_str()))
            }
            Self::RemoveFieldOrdering { before, after } => spec.remove_ordering(before, after),
        }
    }
}

/// A named, version-scoped list of layout operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPatch {
    name: String,
    applies_to: VersionRange,
    operations: Vec<LayoutPatchOperation>,
}

impl LayoutPatch {
    /// # Errors
    ///
    /// `LayoutError::EmptyPatchName` if `name` is empty.
    pub fn new(
        name: impl Into<String>,
        applies_to: VersionRange,
        operations: Vec<LayoutPatchOperation>,
    ) -> LayoutResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(LayoutError::EmptyPatchName);
        }
        Ok(Self {
            name,
            applies_to,
            operations,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn applies_to(&self) -> &VersionRange {
        &self.applies_to
    }

    pub fn operations(&self) -> &[LayoutPatchOperation] {
        &self.operations
    }
}
