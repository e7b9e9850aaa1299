//! Extension points of the rule pipeline
//!
//! `ValueRule` and `ValueSelector` are open traits: consumers can add
//! their own kinds. Both must be deep-clonable through `clone_box` so a
//! patch can hand out independent copies of what it carries.

use std::fmt;

use crate::field_parser::{ParsedField, RawValue};
use crate::report::ErrorCollector;

/// The value under inspection and the field it was selected from.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub field: &'a ParsedField,
    pub value: &'a RawValue,
}

impl<'a> RuleContext<'a> {
    pub fn new(field: &'a ParsedField, value: &'a RawValue) -> Self {
        Self { field, value }
    }
}

/// A predicate over one selected value.
///
/// Implementations only inspect their input and report problems by
/// appending to `collector`.
pub trait ValueRule: fmt::Debug {
    fn evaluate(&self, context: &RuleContext<'_>, collector: &mut ErrorCollector);

    /// Short identifier of the rule kind, e.g. `integer_in_range`
    fn kind(&self) -> &'static str;

    /// Independent copy with identical parameters.
    fn clone_box(&self) -> Box<dyn ValueRule>;
}

/// Chooses which values of a field a rule applies to.
pub trait ValueSelector: fmt::Debug {
    /// Never fails; an empty result means nothing to check.
    fn select<'a>(&self, field: &'a ParsedField) -> Vec<&'a RawValue>;

    /// Short identifier of the selector kind, e.g. `all_values`
    fn kind(&self) -> &'static str;

    fn clone_box(&self) -> Box<dyn ValueSelector>;
}

impl Clone for Box<dyn ValueRule> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl Clone for Box<dyn ValueSelector> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
