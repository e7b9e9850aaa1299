//! Patch manifests
//!
//! Layout and rule patches are authored as one JSON document and turned
//! into typed patch lists at startup. Patch order in the document is the
//! fold order.
//!
//! A malformed manifest is a startup failure; nothing is validated
//! against a partially loaded patch set.

mod errors;
mod model;

pub use errors::{ManifestError, ManifestResult};
pub use model::{
    LayoutOperationEntry, LayoutPatchEntry, PatchManifest, RuleOperationEntry, RulePatchEntry,
    ValueRuleEntry, ValueSelectorEntry,
};

use std::fs;
use std::path::Path;

use crate::layout::LayoutPatch;
use crate::observability::{log_event_with_fields, Event};
use crate::rules::RulePatch;

/// Typed patch lists, in manifest order.
#[derive(Debug, Default)]
pub struct PatchSet {
    pub layout_patches: Vec<LayoutPatch>,
    pub rule_patches: Vec<RulePatch>,
}

impl TryFrom<PatchManifest> for PatchSet {
    type Error = ManifestError;

    fn try_from(manifest: PatchManifest) -> ManifestResult<Self> {
        let layout_patches = manifest
            .layout_patches
            .into_iter()
            .map(LayoutPatchEntry::into_patch)
            .collect::<Result<Vec<_>, _>>()?;

        let rule_patches = manifest
            .rule_patches
            .into_iter()
            .map(RulePatchEntry::into_patch)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            layout_patches,
            rule_patches,
        })
    }
}

/// Reads patch manifests from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestLoader;

impl ManifestLoader {
    pub fn new() -> Self {
        Self
    }

    /// Loads and converts the manifest at `path`.
    pub fn load(&self, path: &Path) -> ManifestResult<PatchSet> {
        let content = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let path_str = path.display().to_string();
        let patches = self.load_str(&content, &path_str)?;

        let layout = patches.layout_patches.len().to_string();
        let rules = patches.rule_patches.len().to_string();
        log_event_with_fields(
            Event::ManifestLoaded,
            &[
                ("layout_patches", layout.as_str()),
                ("path", path_str.as_str()),
                ("rule_patches", rules.as_str()),
            ],
        );

        Ok(patches)
    }

    /// Parses manifest text. `origin` names the source in errors.
    pub fn load_str(&self, content: &str, origin: &str) -> ManifestResult<PatchSet> {
        let manifest: PatchManifest =
            serde_json::from_str(content).map_err(|source| ManifestError::Malformed {
                path: origin.to_string(),
                source,
            })?;

        PatchSet::try_from(manifest)
    }
}
