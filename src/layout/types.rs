//! Layout specification types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::errors::{LayoutError, LayoutResult};

/// Occurrence bounds for one field.
///
/// Invariant: `max_count`, when set, is never below `min_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedField {
    min_count: usize,
    max_count: Option<usize>,
}

impl ExpectedField {
    /// Creates a field, rejecting `max < min`.
    pub fn new(min_count: usize, max_count: Option<usize>) -> LayoutResult<Self> {
        check_bounds(min_count, max_count)?;
        Ok(Self {
            min_count,
            max_count,
        })
    }

    /// Must appear exactly once
    pub fn exactly_once() -> Self {
        Self {
            min_count: 1,
            max_count: Some(1),
        }
    }

    /// May appear any number of times, including zero
    pub fn optional() -> Self {
        Self {
            min_count: 0,
            max_count: None,
        }
    }

    /// Must appear at least `n` times
    pub fn at_least(n: usize) -> Self {
        Self {
            min_count: n,
            max_count: None,
        }
    }

    pub fn min_count(&self) -> usize {
        self.min_count
    }

    pub fn max_count(&self) -> Option<usize> {
        self.max_count
    }

    pub fn set_min_count(&mut self, count: usize) -> LayoutResult<()> {
        check_bounds(count, self.max_count)?;
        self.min_count = count;
        Ok(())
    }

    pub fn set_max_count(&mut self, count: Option<usize>) -> LayoutResult<()> {
        check_bounds(self.min_count, count)?;
        self.max_count = count;
        Ok(())
    }
}

/// At least once, no upper bound.
impl Default for ExpectedField {
    fn default() -> Self {
        Self::at_least(1)
    }
}

fn check_bounds(min: usize, max: Option<usize>) -> LayoutResult<()> {
    match max {
        Some(max) if max < min => Err(LayoutError::InvalidCardinality { min, max }),
        _ => Ok(()),
    }
}

/// Every occurrence of `before` must precede every occurrence of `after`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldOrderingConstraint {
    pub before: String,
    pub after: String,
}

impl FieldOrderingConstraint {
    pub fn new(before: impl Into<String>, after: impl Into<String>) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
        }
    }
}

/// An in-place change to a declared field, checked before it is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldUpdate {
    SetMinCount(usize),
    SetMaxCount(Option<usize>),
    /// Moves the declaration to a new key. Ordering constraints are left
    /// as they are.
    Rename(String),
}

/// Resolved expected fields and ordering constraints for one version.
///
/// Fields are kept sorted by key so validation output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutSpecification {
    fields: BTreeMap<String, ExpectedField>,
    ordering: Vec<FieldOrderingConstraint>,
}

impl LayoutSpecification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, key: &str) -> Option<&ExpectedField> {
        self.fields.get(key)
    }

    pub fn has_field(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn fields(&self) -> &BTreeMap<String, ExpectedField> {
        &self.fields
    }

    pub fn ordering_constraints(&self) -> &[FieldOrderingConstraint] {
        &self.ordering
    }

    pub fn add_field(&mut self, key: &str, field: ExpectedField) -> LayoutResult<()> {
        if self.fields.contains_key(key) {
            return Err(LayoutError::FieldExists(key.to_string()));
        }
        self.fields.insert(key.to_string(), field);
        Ok(())
    }

    /// Ordering constraints naming `key` are kept; the validator skips
    /// constraints whose keys never occur.
    pub fn remove_field(&mut self, key: &str) -> LayoutResult<()> {
        self.fields
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| LayoutError::FieldNotFound(key.to_string()))
    }

    pub fn modify_field(&mut self, key: &str, update: &FieldUpdate) -> LayoutResult<()> {
        let current = *self
            .fields
            .get(key)
            .ok_or_else(|| LayoutError::FieldNotFound(key.to_string()))?;

        match update {
            FieldUpdate::SetMinCount(min) => {
                let mut next = current;
                next.set_min_count(*min)?;
                self.fields.insert(key.to_string(), next);
            }
            FieldUpdate::SetMaxCount(max) => {
                let mut next = current;
                next.set_max_count(*max)?;
                self.fields.insert(key.to_string(), next);
            }
            FieldUpdate::Rename(new_key) => {
                if new_key == key {
                    return Ok(());
                }
                if self.fields.contains_key(new_key) {
                    return Err(LayoutError::FieldExists(new_key.clone()));
                }
                self.fields.remove(key);
                self.fields.insert(new_key.clone(), current);
            }
        }
        Ok(())
    }

    pub fn add_ordering(&mut self, constraint: FieldOrderingConstraint) -> LayoutResult<()> {
        if self.ordering.contains(&constraint) {
            return Err(LayoutError::OrderingExists {
                before: constraint.before,
                after: constraint.after,
            });
        }
        self.ordering.push(constraint);
        Ok(())
    }

    pub fn remove_ordering(&mut self, before: &str, after: &str) -> LayoutResult<()> {
        let position = self
            .ordering
            .iter()
            .position(|c| c.before == before && c.after == after)
            .ok_or_else(|| LayoutError::OrderingNotFound {
                before: before.to_string(),
                after: after.to_string(),
            })?;
        self.ordering.remove(position);
        Ok(())
    }
}
