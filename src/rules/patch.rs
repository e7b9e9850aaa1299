//! Versioned rule patches

use std::fmt;

use crate::version::VersionRange;

use super::errors::{RuleError, RuleResult};
use super::field_rule::{FieldRule, RuleSpecification};

/// Selects the rules a `RemoveFieldRule` operation drops.
pub type RulePredicate = Box<dyn Fn(&FieldRule) -> bool>;

/// One step of a rule patch.
pub enum RulePatchOperation {
    /// Appends a clone of the carried rule; the patch keeps its own copy.
    AddFieldRule(FieldRule),
    /// Drops every rule the predicate matches.
    RemoveFieldRule(RulePredicate),
}

impl RulePatchOperation {
    pub fn add_rule(rule: FieldRule) -> Self {
        Self::AddFieldRule(rule)
    }

    pub fn remove_where<F>(predicate: F) -> Self
    where
        F: Fn(&FieldRule) -> bool + 'static,
    {
        Self::RemoveFieldRule(Box::new(predicate))
    }

    /// Drops every rule bound to `field`.
    pub fn remove_for_field(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::remove_where(move |rule| rule.field() == field)
    }

    pub fn apply(&self, spec: &mut RuleSpecification) -> RuleResult<()> {
        match self {
            Self::AddFieldRule(rule) => spec.add_rule(rule.try_clone()?),
            Self::RemoveFieldRule(predicate) => {
                spec.remove_rules(|rule| predicate(rule));
                Ok(())
            }
        }
    }
}

impl fmt::Debug for RulePatchOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddFieldRule(rule) => f.debug_tuple("AddFieldRule").field(rule).finish(),
            Self::RemoveFieldRule(_) => f.write_str("RemoveFieldRule(<predicate>)"),
        }
    }
}

/// A named, version-scoped list of rule operations.
#[derive(Debug)]
pub struct RulePatch {
    name: String,
    applies_to: VersionRange,
    operations: Vec<RulePatchOperation>,
}

impl RulePatch {
    /// # Errors
    ///
    /// `RuleError::EmptyPatchName` if `name` is empty.
    pub fn new(
        name: impl Into<String>,
        applies_to: VersionRange,
        operations: Vec<RulePatchOperation>,
    ) -> RuleResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(RuleError::EmptyPatchName);
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

    pub fn operations(&self) -> &[RulePatchOperation] {
        &self.operations
    }
}
