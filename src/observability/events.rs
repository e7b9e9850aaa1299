//! Observable events
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events in a lint run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// CLI configuration loaded
    ConfigLoaded,
    /// Patch manifest loaded
    ManifestLoaded,

    // Specification resolution
    /// A patch covered the target version and was applied
    PatchApplied,
    /// A patch did not cover the target version
    PatchSkipped,
    /// Layout specification resolved
    LayoutResolved,
    /// Rule specification resolved
    RulesResolved,

    // Validation
    /// Layout validation finished
    LayoutValidated,
    /// Rule validation finished
    RulesValidated,

    // Descriptor
    /// Application name/version resolved from input
    DescriptorResolved,
    /// Application name/version could not be resolved
    DescriptorRejected,

    // Run
    /// Lint run begins
    LintBegin,
    /// Lint run finished
    LintComplete,
    /// Findings written to the report destination
    ReportWritten,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ManifestLoaded => "MANIFEST_LOADED",

            Event::PatchApplied => "PATCH_APPLIED",
            Event::PatchSkipped => "PATCH_SKIPPED",
            Event::LayoutResolved => "LAYOUT_RESOLVED",
            Event::RulesResolved => "RULES_RESOLVED",

            Event::LayoutValidated => "LAYOUT_VALIDATED",
            Event::RulesValidated => "RULES_VALIDATED",

            Event::DescriptorResolved => "DESCRIPTOR_RESOLVED",
            Event::DescriptorRejected => "DESCRIPTOR_REJECTED",

            Event::LintBegin => "LINT_BEGIN",
            Event::LintComplete => "LINT_COMPLETE",
            Event::ReportWritten => "REPORT_WRITTEN",
        }
    }

    /// Per-patch events are high volume
    pub fn is_detail(&self) -> bool {
        matches!(self, Event::PatchApplied | Event::PatchSkipped)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
