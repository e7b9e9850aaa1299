//! Structural validation of raw records against a layout specification
//!
//! Three independent passes, none short-circuiting the others:
//! 1. Presence and cardinality of every declared field
//! 2. Undeclared fields (strict mode only)
//! 3. Field ordering constraints
//!
//! Every problem is appended to the collector; the returned verdict only
//! reflects findings added by the current call.

use serde::{Deserialize, Serialize};

use crate::input::RawData;
use crate::observability::{log_event_with_fields, Event};
use crate::report::{ErrorCollector, ErrorLog};

use super::types::LayoutSpecification;

/// Finding subjects emitted by the layout validator
pub mod subjects {
    pub const MISSING_REQUIRED_FIELD: &str = "Missing Required Field";
    pub const DUPLICATE_FIELD: &str = "Duplicate Field";
    pub const UNEXPECTED_FIELD: &str = "Unexpected Field";
    pub const FIELD_ORDERING_VIOLATION: &str = "Field Ordering Violation";
}

/// Whether records with undeclared keys are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnexpectedFieldStrictness {
    Strict,
    #[default]
    Permissive,
}

/// Checks `RawData` against a resolved `LayoutSpecification`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutSpecificationValidator {
    strictness: UnexpectedFieldStrictness,
}

impl LayoutSpecificationValidator {
    pub fn new(strictness: UnexpectedFieldStrictness) -> Self {
        Self { strictness }
    }

    pub fn strictness(&self) -> UnexpectedFieldStrictness {
        self.strictness
    }

    /// Runs every pass and returns true iff this call added no findings.
    ///
    /// Findings already present in `collector` do not affect the result.
    pub fn validate(
        &self,
        spec: &LayoutSpecification,
        raw: &RawData,
        collector: &mut ErrorCollector,
    ) -> bool {
        let mark = collector.len();

        self.check_presence(spec, raw, collector);
        if self.strictness == UnexpectedFieldStrictness::Strict {
            self.check_unexpected(spec, raw, collector);
        }
        self.check_ordering(spec, raw, collector);

        let added = collector.since(mark).len();
        let findings = added.to_string();
        let records = raw.len().to_string();
        log_event_with_fields(
            Event::LayoutValidated,
            &[("findings", findings.as_str()), ("records", records.as_str())],
        );

        added == 0
    }

    fn check_presence(&self, spec: &LayoutSpecification, raw: &RawData, collector: &mut ErrorCollector) {
        for (key, expected) in spec.fields() {
            let count = raw.fields_by_key(key).len();

            if count == 0 {
                if expected.min_count() > 0 {
                    collector.add(ErrorLog::new(
                        subjects::MISSING_REQUIRED_FIELD,
                        format!(
                            "Expected at least {} occurrence(s) of field: {}",
                            expected.min_count(),
                            key
                        ),
                    ));
                }
                continue;
            }

            if let Some(max) = expected.max_count() {
                if count > max {
                    collector.add(ErrorLog::new(
                        subjects::DUPLICATE_FIELD,
                        format!("Expected at most {} occurrence(s) of field: {}", max, key),
                    ));
                }
            }
        }
    }

    fn check_unexpected(&self, spec: &LayoutSpecification, raw: &RawData, collector: &mut ErrorCollector) {
        for field in raw.fields() {
            if !spec.has_field(&field.key) {
                collector.add(ErrorLog::new(
                    subjects::UNEXPECTED_FIELD,
                    format!("Field is not defined in layout specification: {}", field.key),
                ));
            }
        }
    }

    /// Keys that never occur are skipped; presence is pass 1's concern.
    fn check_ordering(&self, spec: &LayoutSpecification, raw: &RawData, collector: &mut ErrorCollector) {
        for constraint in spec.ordering_constraints() {
            let last_before = raw.positions_of(&constraint.before).last().copied();
            let first_after = raw.positions_of(&constraint.after).first().copied();

            let (Some(last_before), Some(first_after)) = (last_before, first_after) else {
                continue;
            };

            if last_before > first_after {
                collector.add(ErrorLog::new(
                    subjects::FIELD_ORDERING_VIOLATION,
                    format!(
                        "All occurrences of field '{}' must precede any occurrence of field '{}'",
                        constraint.before, constraint.after
                    ),
                ));
            }
        }
    }
}
