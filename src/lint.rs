//! End-to-end lint run
//!
//! raw records → descriptor → layout spec → layout validation →
//! parsed records → rule spec → rule validation.
//!
//! Both validators always run, even when the first one reports problems.
//! Only a descriptor failure ends the run early: without a version there
//! is nothing to resolve against.

use std::path::Path;
use thiserror::Error;

use crate::descriptor::{
    ApplicationDescriptor, ApplicationDescriptorResolver, DefaultCsvApplicationDescriptorResolver,
};
use crate::field_parser::ParsedDataBuilder;
use crate::input::{FileParser, InputError, RawData};
use crate::layout::{
    LayoutError, LayoutPatch, LayoutSpecificationBuilder, LayoutSpecificationValidator,
    UnexpectedFieldStrictness,
};
use crate::manifest::PatchSet;
use crate::observability::{log_event_with_fields, Event};
use crate::report::{ErrorCollector, ErrorLog};
use crate::rules::{RuleError, RulePatch, RuleSpecificationBuilder, RuleValidator};

/// Subject of findings raised when the descriptor cannot be resolved
pub const DESCRIPTOR_ERROR_SUBJECT: &str = "Application Descriptor Resolution Error";

/// Errors that stop a lint run before any finding can be trusted.
#[derive(Debug, Error)]
pub enum LintError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Rule(#[from] RuleError),
}

impl LintError {
    pub fn code(&self) -> &'static str {
        match self {
            LintError::Input(_) => "DATALINT_INPUT_IO",
            LintError::Layout(e) => e.code(),
            LintError::Rule(e) => e.code(),
        }
    }
}

/// Result type for lint runs
pub type LintResult<T> = Result<T, LintError>;

/// Outcome of one lint run.
///
/// A verdict is `None` when its validator never ran.
#[derive(Debug, Clone, Default)]
pub struct LintReport {
    pub descriptor: Option<ApplicationDescriptor>,
    pub layout_valid: Option<bool>,
    pub rules_valid: Option<bool>,
    pub findings: Vec<ErrorLog>,
}

impl LintReport {
    /// No finding of any kind
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Runs the full pipeline against one patch set.
pub struct Linter {
    layout_patches: Vec<LayoutPatch>,
    rule_patches: Vec<RulePatch>,
    strictness: UnexpectedFieldStrictness,
    resolver: Box<dyn ApplicationDescriptorResolver>,
    parsed_builder: ParsedDataBuilder,
}

impl Linter {
    pub fn new(patches: PatchSet, strictness: UnexpectedFieldStrictness) -> Self {
        Self {
            layout_patches: patches.layout_patches,
            rule_patches: patches.rule_patches,
            strictness,
            resolver: Box::new(DefaultCsvApplicationDescriptorResolver::new()),
            parsed_builder: ParsedDataBuilder::default(),
        }
    }

    pub fn with_resolver(mut self, resolver: Box<dyn ApplicationDescriptorResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_parsed_builder(mut self, builder: ParsedDataBuilder) -> Self {
        self.parsed_builder = builder;
        self
    }

    pub fn strictness(&self) -> UnexpectedFieldStrictness {
        self.strictness
    }

    /// Parses `path` with `parser` and lints the result.
    pub fn lint_file(&self, parser: &dyn FileParser, path: &Path) -> LintResult<LintReport> {
        let raw = parser.parse(path)?;
        self.lint(&raw)
    }

    /// # Errors
    ///
    /// Only a broken patch set fails the run. Problems in `raw` are
    /// reported as findings.
    pub fn lint(&self, raw: &RawData) -> LintResult<LintReport> {
        let records = raw.len().to_string();
        log_event_with_fields(Event::LintBegin, &[("records", records.as_str())]);

        let mut collector = ErrorCollector::new();
        let mut report = LintReport::default();

        let descriptor = match self.resolver.resolve(raw).into_result() {
            Ok(descriptor) => descriptor,
            Err(errors) => {
                for error in errors {
                    collector.add(ErrorLog::new(DESCRIPTOR_ERROR_SUBJECT, error.to_string()));
                }
                report.findings = collector.into_logs();
                self.log_complete(&report);
                return Ok(report);
            }
        };
        let version = descriptor.version();

        let layout = LayoutSpecificationBuilder::new().build(&version, &self.layout_patches)?;
        let rules = RuleSpecificationBuilder::new().build(&version, &self.rule_patches)?;

        let layout_valid =
            LayoutSpecificationValidator::new(self.strictness).validate(&layout, raw, &mut collector);

        let parsed = self.parsed_builder.build(raw);
        let rules_valid = RuleValidator::new().validate(&rules, &parsed, &mut collector);

        report.descriptor = Some(descriptor);
        report.layout_valid = Some(layout_valid);
        report.rules_valid = Some(rules_valid);
        report.findings = collector.into_logs();

        self.log_complete(&report);
        Ok(report)
    }

    fn log_complete(&self, report: &LintReport) {
        let findings = report.findings.len().to_string();
        let clean = report.is_clean().to_string();
        log_event_with_fields(
            Event::LintComplete,
            &[("clean", clean.as_str()), ("findings", findings.as_str())],
        );
    }
}
