//! Folds rule patches into a specification for one version

use crate::observability::{log_event_with_fields, Event};
use crate::version::Version;

use super::errors::RuleResult;
use super::field_rule::RuleSpecification;
use super::patch::RulePatch;

/// Resolves a `RuleSpecification` from an ordered patch list.
///
/// Same folding order as the layout builder. Patches are only read, so
/// one patch list can be resolved for any number of versions.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleSpecificationBuilder;

impl RuleSpecificationBuilder {
    pub fn new() -> Self {
        Self
    }

    /// # Errors
    ///
    /// The first failing operation aborts the build, wrapped in
    /// `RuleError::Patch`.
    pub fn build(&self, version: &Version, patches: &[RulePatch]) -> RuleResult<RuleSpecification> {
        let mut spec = RuleSpecification::new();
        let version_str = version.to_string();

        for patch in patches {
            if !patch.applies_to().contains(version) {
                log_event_with_fields(
                    Event::PatchSkipped,
                    &[("patch", patch.name()), ("version", version_str.as_str())],
                );
                continue;
            }

            for op in patch.operations() {
                op.apply(&mut spec).map_err(|e| e.in_patch(patch.name()))?;
            }

            log_event_with_fields(
                Event::PatchApplied,
                &[("patch", patch.name()), ("version", version_str.as_str())],
            );
        }

        let rules = spec.len().to_string();
        log_event_with_fields(
            Event::RulesResolved,
            &[("rules", rules.as_str()), ("version", version_str.as_str())],
        );

        Ok(spec)
    }
}
