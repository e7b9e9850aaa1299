//! Rule specification subsystem
//!
//! The value-level counterpart of `layout`. A rule specification is an
//! ordered list of `FieldRule`s, resolved per version by folding rule
//! patches, then evaluated against `ParsedData`.
//!
//! `ValueRule` and `ValueSelector` are open traits. Consumers may add
//! their own kinds alongside the built-ins.

mod builder;
mod builtins;
mod errors;
mod field_rule;
mod patch;
mod traits;
mod validator;

pub use builder::RuleSpecificationBuilder;
pub use builtins::{subjects, AllValuesSelector, IntegerInRangeRule, ValueAtIndexSelector};
pub use errors::{RuleError, RuleResult};
pub use field_rule::{FieldRule, RuleSpecification};
pub use patch::{RulePatch, RulePatchOperation, RulePredicate};
pub use traits::{RuleContext, ValueRule, ValueSelector};
pub use validator::RuleValidator;
