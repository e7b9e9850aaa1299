//! Built-in value rules and selectors

use crate::field_parser::{ParsedField, RawValue};
use crate::report::{ErrorCollector, ErrorLog};

use super::errors::{RuleError, RuleResult};
use super::traits::{RuleContext, ValueRule, ValueSelector};

/// Finding subjects emitted by the rule pipeline
pub mod subjects {
    pub const MISSING_REQUIRED_FIELD: &str = "Missing required field";
    pub const INCORRECT_VALUE_TYPE: &str = "Incorrect value type";
    pub const INCORRECT_VALUE: &str = "Incorrect value";
}

/// Value must be a base-10 integer within `[min, max]`.
///
/// Parsing is strict: the whole string must be digits with an optional
/// leading `-`. Whitespace and a leading `+` are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerInRangeRule {
    min: i64,
    max: i64,
}

impl IntegerInRangeRule {
    /// # Errors
    ///
    /// `RuleError::InvalidRange` if `max < min`. The bounds are never
    /// swapped.
    pub fn new(min: i64, max: i64) -> RuleResult<Self> {
        if max < min {
            return Err(RuleError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    fn parse(value: &str) -> Option<i64> {
        if value.starts_with('+') {
            return None;
        }
        value.parse().ok()
    }
}

impl ValueRule for IntegerInRangeRule {
    fn evaluate(&self, context: &RuleContext<'_>, collector: &mut ErrorCollector) {
        let Some(number) = Self::parse(&context.value.value) else {
            collector.add(ErrorLog::new(
                subjects::INCORRECT_VALUE_TYPE,
                "Value must be an integer",
            ));
            return;
        };

        if number < self.min || number > self.max {
            collector.add(ErrorLog::new(
                subjects::INCORRECT_VALUE,
                format!("Value must be between {} and {}", self.min, self.max),
            ));
        }
    }

    fn kind(&self) -> &'static str {
        "integer_in_range"
    }

    fn clone_box(&self) -> Box<dyn ValueRule> {
        Box::new(*self)
    }
}

/// Every value of the field, in order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllValuesSelector;

impl ValueSelector for AllValuesSelector {
    fn select<'a>(&self, field: &'a ParsedField) -> Vec<&'a RawValue> {
        field.values.iter().collect()
    }

    fn kind(&self) -> &'static str {
        "all_values"
    }

    fn clone_box(&self) -> Box<dyn ValueSelector> {
        Box::new(*self)
    }
}

/// The value at one position, or nothing when the field is shorter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueAtIndexSelector {
    index: usize,
}

impl ValueAtIndexSelector {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl ValueSelector for ValueAtIndexSelector {
    fn select<'a>(&self, field: &'a ParsedField) -> Vec<&'a RawValue> {
        field.values.get(self.index).into_iter().collect()
    }

    fn kind(&self) -> &'static str {
        "value_at_index"
    }

    fn clone_box(&self) -> Box<dyn ValueSelector> {
        Box::new(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::SourceLocation;

    fn field(values: &[&str]) -> ParsedField {
        ParsedField::new(
            "key",
            values
                .iter()
                .map(|v| RawValue::new(*v, SourceLocation::new("test.csv", 1)))
                .collect(),
        )
    }

    fn evaluate(rule: &IntegerInRangeRule, value: &str) -> ErrorCollector {
        let field = field(&[value]);
        let mut collector = ErrorCollector::new();
        rule.evaluate(&RuleContext::new(&field, &field.values[0]), &mut collector);
        collector
    }

    #[test]
    fn test_integer_in_range() {
        let rule = IntegerInRangeRule::new(0, 10).unwrap();

        assert!(evaluate(&rule, "5").is_empty());
        assert!(evaluate(&rule, "0").is_empty());
        assert!(evaluate(&rule, "10").is_empty());

        let out = evaluate(&rule, "15");
        assert_eq!(out.len(), 1);
        assert_eq!(out.logs()[0].subject(), subjects::INCORRECT_VALUE);
        assert_eq!(out.logs()[0].body(), "Value must be between 0 and 10");
    }

    #[test]
    fn test_integer_range_rejects_inverted_bounds() {
        assert_eq!(
            IntegerInRangeRule::new(10, 0).unwrap_err(),
            RuleError::InvalidRange { min: 10, max: 0 }
        );

        let single = IntegerInRangeRule::new(7, 7).unwrap();
        assert!(evaluate(&single, "7").is_empty());
        assert_eq!(evaluate(&single, "8").len(), 1);
    }

    #[test]
    fn test_integer_negative_bounds() {
        let rule = IntegerInRangeRule::new(-5, -1).unwrap();
        assert!(evaluate(&rule, "-3").is_empty());
        assert_eq!(evaluate(&rule, "0").logs()[0].body(), "Value must be between -5 and -1");
    }

    #[test]
    fn test_integer_parse_is_strict() {
        let rule = IntegerInRangeRule::new(0, 10).unwrap();

        for bad in ["abc", "", " 5", "5 ", "+5", "5a", "1.0", "--1", "99999999999999999999"] {
            let out = evaluate(&rule, bad);
            assert_eq!(out.len(), 1, "input {:?}", bad);
            assert_eq!(out.logs()[0].subject(), subjects::INCORRECT_VALUE_TYPE);
            assert_eq!(out.logs()[0].body(), "Value must be an integer");
        }
    }

    #[test]
    fn test_all_values_selector() {
        let f = field(&["a", "b", "c"]);
        let selected: Vec<&str> = AllValuesSelector.select(&f).iter().map(|v| v.value.as_str()).collect();
        assert_eq!(selected, vec!["a", "b", "c"]);

        assert!(AllValuesSelector.select(&field(&[])).is_empty());
    }

    #[test]
    fn test_value_at_index_selector() {
        let f = field(&["a", "b"]);

        let selected = ValueAtIndexSelector::new(1).select(&f);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].value, "b");

        assert!(ValueAtIndexSelector::new(2).select(&f).is_empty());
        assert!(ValueAtIndexSelector::new(0).select(&field(&[])).is_empty());
    }

    #[test]
    fn test_clone_box_keeps_parameters() {
        let rule: Box<dyn ValueRule> = Box::new(IntegerInRangeRule::new(1, 3).unwrap());
        let copy = rule.clone();
        drop(rule);

        assert_eq!(copy.kind(), "integer_in_range");
        assert_eq!(format!("{:?}", copy), "IntegerInRangeRule { min: 1, max: 3 }");

        let selector: Box<dyn ValueSelector> = Box::new(ValueAtIndexSelector::new(4));
        assert_eq!(selector.clone().kind(), "value_at_index");
    }
}
