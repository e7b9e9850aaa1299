//! On-disk shape of a patch manifest
//!
//! ```json
//! {
//!   "layout_patches": [
//!     { "name": "base", "applies_to": { "min": "1.0.0" },
//!       "operations": [ { "op": "add_field", "key": "Id", "min_count": 1, "max_count": 1 } ] }
//!   ],
//!   "rule_patches": [
//!     { "name": "ranges",
//!       "operations": [ { "op": "add_field_rule", "field": "Level",
//!                         "rule": { "kind": "integer_in_range", "min": 0, "max": 10 },
//!                         "selector": { "kind": "value_at_index", "index": 0 } } ] }
//!   ]
//! }
//! ```
//!
//! A missing `applies_to` covers every version.

use serde::Deserialize;

use crate::layout::{
    ExpectedField, FieldUpdate, LayoutPatch, LayoutPatchOperation, LayoutResult,
};
use crate::rules::{
    AllValuesSelector, FieldRule, IntegerInRangeRule, RulePatch, RulePatchOperation, RuleResult,
    ValueAtIndexSelector, ValueRule, ValueSelector,
};
use crate::version::VersionRange;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatchManifest {
    #[serde(default)]
    pub layout_patches: Vec<LayoutPatchEntry>,
    #[serde(default)]
    pub rule_patches: Vec<RulePatchEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutPatchEntry {
    pub name: String,
    #[serde(default)]
    pub applies_to: VersionRange,
    #[serde(default)]
    pub operations: Vec<LayoutOperationEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case", deny_unknown_fields)]
pub enum LayoutOperationEntry {
    AddField {
        key: String,
        min_count: usize,
        #[serde(default)]
        max_count: Option<usize>,
    },
    RemoveField {
        key: String,
    },
    ModifyField {
        key: String,
        update: FieldUpdate,
    },
    AddFieldOrdering {
        before: String,
        after: String,
    },
    RemoveFieldOrdering {
        before: String,
        after: String,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulePatchEntry {
    pub name: String,
    #[serde(default)]
    pub applies_to: VersionRange,
    #[serde(default)]
    pub operations: Vec<RuleOperationEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case", deny_unknown_fields)]
pub enum RuleOperationEntry {
    AddFieldRule {
        field: String,
        rule: ValueRuleEntry,
        selector: ValueSelectorEntry,
    },
    /// Removes every rule bound to `field`
    RemoveFieldRule {
        field: String,
    },
}

/// Built-in value rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum ValueRuleEntry {
    IntegerInRange { min: i64, max: i64 },
}

/// Built-in value selectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueSelectorEntry {
    AllValues,
    ValueAtIndex { index: usize },
}

impl LayoutPatchEntry {
    pub fn into_patch(self) -> LayoutResult<LayoutPatch> {
        let operations = self
            .operations
            .into_iter()
            .map(LayoutOperationEntry::into_operation)
            .collect::<LayoutResult<Vec<_>>>()
            .map_err(|e| e.in_patch(&self.name))?;

        LayoutPatch::new(self.name, self.applies_to, operations)
    }
}

impl LayoutOperationEntry {
    fn into_operation(self) -> LayoutResult<LayoutPatchOperation> {
        Ok(match self {
            Self::AddField {
                key,
                min_count,
                max_count,
            } => LayoutPatchOperation::add_field(key, ExpectedField::new(min_count, max_count)?),
            Self::RemoveField { key } => LayoutPatchOperation::remove_field(key),
            Self::ModifyField { key, update } => LayoutPatchOperation::modify_field(key, update),
            Self::AddFieldOrdering { before, after } => {
                LayoutPatchOperation::add_ordering(before, after)
            }
            Self::RemoveFieldOrdering { before, after } => {
                LayoutPatchOperation::remove_ordering(before, after)
            }
        })
    }
}

impl RulePatchEntry {
    pub fn into_patch(self) -> RuleResult<RulePatch> {
        let operations = self
            .operations
            .into_iter()
            .map(RuleOperationEntry::into_operation)
            .collect::<RuleResult<Vec<_>>>()
            .map_err(|e| e.in_patch(&self.name))?;

        RulePatch::new(self.name, self.applies_to, operations)
    }
}

impl RuleOperationEntry {
    fn into_operation(self) -> RuleResult<RulePatchOperation> {
        Ok(match self {
            Self::AddFieldRule {
                field,
                rule,
                selector,
            } => RulePatchOperation::add_rule(FieldRule::new(
                field,
                rule.into_rule()?,
                selector.into_selector(),
            )),
            Self::RemoveFieldRule { field } => RulePatchOperation::remove_for_field(field),
        })
    }
}

impl ValueRuleEntry {
    fn into_rule(self) -> RuleResult<Box<dyn ValueRule>> {
        match self {
            Self::IntegerInRange { min, max } => Ok(Box::new(IntegerInRangeRule::new(min, max)?)),
        }
    }
}

impl ValueSelectorEntry {
    fn into_selector(self) -> Box<dyn ValueSelector> {
        match self {
            Self::AllValues => Box::new(AllValuesSelector),
            Self::ValueAtIndex { index } => Box::new(ValueAtIndexSelector::new(index)),
        }
    }
}
