//! Value-level validation of parsed records

use crate::field_parser::ParsedData;
use crate::observability::{log_event_with_fields, Event};
use crate::report::{ErrorCollector, ErrorLog};

use super::builtins::subjects;
use super::field_rule::{FieldRule, RuleSpecification};
use super::traits::RuleContext;

/// Evaluates every rule of a `RuleSpecification` against `ParsedData`.
///
/// Every rule's field is mandatory. A rule fails when its field is
/// absent or when its evaluation added at least one finding.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleValidator;

impl RuleValidator {
    pub fn new() -> Self {
        Self
    }

    /// Returns true iff every rule passed.
    ///
    /// Only findings added by this call count; earlier content of
    /// `collector` is ignored.
    pub fn validate(
        &self,
        spec: &RuleSpecification,
        data: &ParsedData,
        collector: &mut ErrorCollector,
    ) -> bool {
        let start = collector.len();
        let mut failed_rules = 0usize;

        for rule in spec.rules() {
            if !self.validate_rule(rule, data, collector) {
                failed_rules += 1;
            }
        }

        let findings = collector.since(start).len().to_string();
        let failed = failed_rules.to_string();
        let rules = spec.len().to_string();
        log_event_with_fields(
            Event::RulesValidated,
            &[
                ("failed_rules", failed.as_str()),
                ("findings", findings.as_str()),
                ("rules", rules.as_str()),
            ],
        );

        failed_rules == 0
    }

    fn validate_rule(&self, rule: &FieldRule, data: &ParsedData, collector: &mut ErrorCollector) -> bool {
        let mark = collector.len();

        let mut matches = data.fields_by_key(rule.field()).peekable();
        if matches.peek().is_none() {
            collector.add(ErrorLog::new(subjects::MISSING_REQUIRED_FIELD, rule.field()));
            return false;
        }

        let Ok((value_rule, selector)) = rule.parts() else {
            unreachable!("RuleSpecification::add_rule only accepts complete rules");
        };

        for field in matches {
            for value in selector.select(field) {
                value_rule.evaluate(&RuleContext::new(field, value), collector);
            }
        }

        collector.since(mark).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_parser::{ParsedField, RawValue};
    use crate::input::SourceLocation;
    use crate::rules::{AllValuesSelector, IntegerInRangeRule, ValueAtIndexSelector};

    fn field(key: &str, values: &[&str]) -> ParsedField {
        ParsedField::new(
            key,
            values
                .iter()
                .map(|v| RawValue::new(*v, SourceLocation::new("test.csv", 1)))
                .collect(),
        )
    }

    fn data(fields: Vec<ParsedField>) -> ParsedData {
        ParsedData::new(fields)
    }

    fn key10_spec() -> RuleSpecification {
        let mut spec = RuleSpecification::new();
        spec.add_rule(FieldRule::new(
            "key10",
            Box::new(IntegerInRangeRule::new(0, 10).unwrap()),
            Box::new(ValueAtIndexSelector::new(0)),
        ))
        .unwrap();
        spec
    }

    fn run(spec: &RuleSpecification, data: &ParsedData) -> (bool, ErrorCollector) {
        let mut collector = ErrorCollector::new();
        let ok = RuleValidator::new().validate(spec, data, &mut collector);
        (ok, collector)
    }

    #[test]
    fn test_value_in_range() {
        let (ok, out) = run(&key10_spec(), &data(vec![field("key10", &["5"])]));
        assert!(ok);
        assert!(out.is_empty());
    }

    #[test]
    fn test_value_out_of_range() {
        let (ok, out) = run(&key10_spec(), &data(vec![field("key10", &["15"])]));
        assert!(!ok);
        assert_eq!(out.len(), 1);
        assert_eq!(out.logs()[0].subject(), "Incorrect value");
        assert_eq!(out.logs()[0].body(), "Value must be between 0 and 10");
    }

    #[test]
    fn test_value_not_integer() {
        let (ok, out) = run(&key10_spec(), &data(vec![field("key10", &["abc"])]));
        assert!(!ok);
        assert_eq!(out.len(), 1);
        assert_eq!(out.logs()[0].subject(), "Incorrect value type");
    }

    #[test]
    fn test_missing_field() {
        let (ok, out) = run(&key10_spec(), &data(vec![field("other", &["1"])]));
        assert!(!ok);
        assert_eq!(out.len(), 1);
        assert_eq!(out.logs()[0].subject(), "Missing required field");
        assert_eq!(out.logs()[0].body(), "key10");
    }

    #[test]
    fn test_index_past_end_selects_nothing() {
        let mut spec = RuleSpecification::new();
        spec.add_rule(FieldRule::new(
            "key",
            Box::new(IntegerInRangeRule::new(0, 10).unwrap()),
            Box::new(ValueAtIndexSelector::new(3)),
        ))
        .unwrap();

        let (ok, out) = run(&spec, &data(vec![field("key", &["99"])]));
        assert!(ok);
        assert!(out.is_empty());
    }

    #[test]
    fn test_every_matching_record_and_value_is_checked() {
        let mut spec = RuleSpecification::new();
        spec.add_rule(FieldRule::new(
            "key",
            Box::new(IntegerInRangeRule::new(0, 10).unwrap()),
            Box::new(AllValuesSelector),
        ))
        .unwrap();

        let (ok, out) = run(&spec, &data(vec![field("key", &["1", "20"]), field("key", &["x", "3"])]));
        assert!(!ok);
        let subjects: Vec<&str> = out.logs().iter().map(|l| l.subject()).collect();
        assert_eq!(subjects, vec!["Incorrect value", "Incorrect value type"]);
    }

    #[test]
    fn test_all_rules_run_after_a_failure() {
        let mut spec = key10_spec();
        spec.add_rule(FieldRule::new(
            "key20",
            Box::new(IntegerInRangeRule::new(0, 20).unwrap()),
            Box::new(AllValuesSelector),
        ))
        .unwrap();

        let (ok, out) = run(&spec, &data(vec![field("key20", &["25"])]));
        assert!(!ok);
        assert_eq!(out.len(), 2);
        assert_eq!(out.logs()[0].body(), "key10");
        assert_eq!(out.logs()[1].body(), "Value must be between 0 and 20");
    }

    #[test]
    fn test_verdict_ignores_prior_findings() {
        let mut collector = ErrorCollector::new();
        collector.add(ErrorLog::new("Earlier", "unrelated"));

        let ok = RuleValidator::new().validate(&key10_spec(), &data(vec![field("key10", &["7"])]), &mut collector);

        assert!(ok);
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn test_empty_spec_passes() {
        let (ok, out) = run(&RuleSpecification::new(), &data(vec![field("anything", &["x"])]));
        assert!(ok);
        assert!(out.is_empty());
    }
}
