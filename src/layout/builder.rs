//! Folds layout patches into a specification for one version

use crate::observability::{log_event_with_fields, Event};
use crate::version::Version;

use super::errors::LayoutResult;
use super::patch::LayoutPatch;
use super::types::LayoutSpecification;

/// Resolves a `LayoutSpecification` from an ordered patch list.
///
/// Patches are applied in the order given, and only if their range
/// contains the target version. Patches are never reordered or
/// deduplicated: later patches refine earlier ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutSpecificationBuilder;

impl LayoutSpecificationBuilder {
    pub fn new() -> Self {
        Self
    }

    /// # Errors
    ///
    /// The first failing operation aborts the build. The error is wrapped
    /// in `LayoutError::Patch` naming the patch it came from.
    pub fn build(
        &self,
        version: &Version,
        patches: &[LayoutPatch],
    ) -> LayoutResult<LayoutSpecification> {
        let mut spec = LayoutSpecification::new();
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

        let fields = spec.fields().len().to_string();
        let orderings = spec.ordering_constraints().len().to_string();
        log_event_with_fields(
            Event::LayoutResolved,
            &[
                ("fields", fields.as_str()),
                ("orderings", orderings.as_str()),
                ("version", version_str.as_str()),
            ],
        );

        Ok(spec)
    }
}
