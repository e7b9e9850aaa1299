//! Inclusive version ranges

use serde::{Deserialize, Serialize};

use super::errors::{VersionError, VersionResult};
use super::Version;

/// A range of versions with optional bounds.
///
/// Both bounds are inclusive. A missing bound leaves that side open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct VersionRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min: Option<Version>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max: Option<Version>,
}

impl VersionRange {
    /// Creates a range, rejecting `min > max`.
    pub fn new(min: Option<Version>, max: Option<Version>) -> VersionResult<Self> {
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo > hi {
                return Err(VersionError::InvertedRange {
                    min: lo.to_string(),
                    max: hi.to_string(),
                });
            }
        }
        Ok(Self { min, max })
    }

    /// Every version.
    pub const fn all() -> Self {
        Self { min: None, max: None }
    }

    /// `min` and everything after it.
    pub const fn starting_at(min: Version) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Everything up to and including `max`.
    pub const fn until(max: Version) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// `[min, max]`, both ends inclusive.
    pub fn between(min: Version, max: Version) -> VersionResult<Self> {
        Self::new(Some(min), Some(max))
    }

    pub fn min(&self) -> Option<Version> {
        self.min
    }

    pub fn max(&self) -> Option<Version> {
        self.max
    }

    /// Returns true iff `version` lies within both bounds.
    pub fn contains(&self, version: &Version) -> bool {
        if let Some(min) = &self.min {
            if version < min {
                return false;
            }
        }
        if let Some(max) = &self.max {
            if version > max {
                return false;
            }
        }
        true
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRange {
    #[serde(default)]
    min: Option<Version>,
    #[serde(default)]
    max: Option<Version>,
}

impl<'de> Deserialize<'de> for VersionRange {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawRange::deserialize(deserializer)?;
        VersionRange::new(raw.min, raw.max).map_err(serde::de::Error::custom)
    }
}
