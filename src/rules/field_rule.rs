//! Field rules and the resolved rule specification

use super::errors::{RuleError, RuleResult};
use super::traits::{ValueRule, ValueSelector};

/// A value rule bound to a field key through a selector.
///
/// A rule built with [`FieldRule::empty`] has neither part set and cannot
/// be cloned or evaluated until both are provided.
#[derive(Debug)]
pub struct FieldRule {
    field: String,
    rule: Option<Box<dyn ValueRule>>,
    selector: Option<Box<dyn ValueSelector>>,
}

impl FieldRule {
    pub fn new(
        field: impl Into<String>,
        rule: Box<dyn ValueRule>,
        selector: Box<dyn ValueSelector>,
    ) -> Self {
        Self {
            field: field.into(),
            rule: Some(rule),
            selector: Some(selector),
        }
    }

    /// Rule for `field` with no value rule and no selector yet.
    pub fn empty(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rule: None,
            selector: None,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn rule(&self) -> Option<&dyn ValueRule> {
        self.rule.as_deref()
    }

    pub fn selector(&self) -> Option<&dyn ValueSelector> {
        self.selector.as_deref()
    }

    pub fn set_rule(&mut self, rule: Box<dyn ValueRule>) {
        self.rule = Some(rule);
    }

    pub fn set_selector(&mut self, selector: Box<dyn ValueSelector>) {
        self.selector = Some(selector);
    }

    /// Both parts, or the first one missing.
    pub fn parts(&self) -> RuleResult<(&dyn ValueRule, &dyn ValueSelector)> {
        let rule = self.rule().ok_or_else(|| self.uninitialized("value rule"))?;
        let selector = self
            .selector()
            .ok_or_else(|| self.uninitialized("value selector"))?;
        Ok((rule, selector))
    }

    /// Deep copy with independently owned rule and selector.
    ///
    /// # Errors
    ///
    /// `RuleError::UninitializedRule` if either part is unset.
    pub fn try_clone(&self) -> RuleResult<FieldRule> {
        let (rule, selector) = self.parts()?;
        Ok(FieldRule::new(
            self.field.clone(),
            rule.clone_box(),
            selector.clone_box(),
        ))
    }

    fn uninitialized(&self, part: &'static str) -> RuleError {
        RuleError::UninitializedRule {
            field: self.field.clone(),
            part,
        }
    }
}

/// Resolved field rules for one version, in evaluation order.
#[derive(Debug, Default)]
pub struct RuleSpecification {
    rules: Vec<FieldRule>,
}

impl RuleSpecification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Appends `rule` after every existing rule.
    ///
    /// # Errors
    ///
    /// `RuleError::UninitializedRule` if `rule` is missing a part. A
    /// specification only ever holds complete rules.
    pub fn add_rule(&mut self, rule: FieldRule) -> RuleResult<()> {
        rule.parts()?;
        self.rules.push(rule);
        Ok(())
    }

    /// Removes every rule matching `predicate`, keeping survivors in order.
    /// Returns how many were removed.
    pub fn remove_rules<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(&FieldRule) -> bool,
    {
        let before = self.rules.len();
        self.rules.retain(|rule| !predicate(rule));
        before - self.rules.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{AllValuesSelector, IntegerInRangeRule, ValueAtIndexSelector};

    fn data_ptr<T: ?Sized>(r: &T) -> *const () {
        r as *const T as *const ()
    }

    #[test]
    fn test_try_clone_is_deep() {
        let original = FieldRule::new(
            "key10",
            Box::new(IntegerInRangeRule::new(0, 10).unwrap()),
            Box::new(ValueAtIndexSelector::new(0)),
        );

        let copy = original.try_clone().unwrap();
        assert_eq!(copy.field(), "key10");

        let (orig_rule, orig_sel) = original.parts().unwrap();
        let (copy_rule, copy_sel) = copy.parts().unwrap();
        assert_ne!(data_ptr(orig_rule), data_ptr(copy_rule));
        assert_ne!(data_ptr(orig_sel), data_ptr(copy_sel));
        assert_eq!(format!("{:?}", orig_rule), format!("{:?}", copy_rule));
    }

    #[test]
    fn test_try_clone_rejects_uninitialized() {
        let rule = FieldRule::empty("key1");
        assert_eq!(
            rule.try_clone().unwrap_err(),
            RuleError::UninitializedRule {
                field: "key1".into(),
                part: "value rule"
            }
        );

        let mut half = FieldRule::empty("key2");
        half.set_rule(Box::new(IntegerInRangeRule::new(0, 1).unwrap()));
        assert_eq!(
            half.try_clone().unwrap_err(),
            RuleError::UninitializedRule {
                field: "key2".into(),
                part: "value selector"
            }
        );

        half.set_selector(Box::new(AllValuesSelector));
        assert!(half.try_clone().is_ok());
    }

    #[test]
    fn test_remove_rules_is_bulk_and_stable() {
        let mut spec = RuleSpecification::new();
        for key in ["keep1", "drop", "keep2", "drop", "keep3"] {
            spec.add_rule(FieldRule::new(
                key,
                Box::new(IntegerInRangeRule::new(0, 1).unwrap()),
                Box::new(AllValuesSelector),
            ))
            .unwrap();
        }

        assert_eq!(spec.remove_rules(|r| r.field() == "drop"), 2);

        let keys: Vec<&str> = spec.rules().iter().map(|r| r.field()).collect();
        assert_eq!(keys, vec!["keep1", "keep2", "keep3"]);

        assert_eq!(spec.remove_rules(|r| r.field() == "absent"), 0);
        assert_eq!(spec.len(), 3);
    }

    #[test]
    fn test_add_rule_rejects_incomplete() {
        let mut spec = RuleSpecification::new();

        let err = spec.add_rule(FieldRule::empty("key10")).unwrap_err();
        assert_eq!(err.code(), "DATALINT_RULE_UNINITIALIZED");

        let mut half = FieldRule::empty("key10");
        half.set_selector(Box::new(AllValuesSelector));
        assert_eq!(
            spec.add_rule(half).unwrap_err(),
            RuleError::UninitializedRule {
                field: "key10".into(),
                part: "value rule"
            }
        );

        assert!(spec.is_empty());
    }
}
