//! Application versions and version ranges
//!
//! Patches are scoped to a `VersionRange`; a specification is resolved for
//! exactly one `Version`.
//!
//! # Format
//!
//! Versions are written `MAJOR.MINOR.PATCH`. Parsing is strict: exactly
//! three dot-separated, non-negative, base-10 components with no signs or
//! whitespace.

mod errors;
mod range;

pub use errors::{VersionError, VersionResult};
pub use range::VersionRange;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An application version, ordered by major, then minor, then patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    major: u32,
    minor: u32,
    patch: u32,
}

impl Version {
    /// Creates a version from its three components.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch }
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> u32 {
        self.patch
    }

    /// Parses `MAJOR.MINOR.PATCH`.
    ///
    /// # Errors
    ///
    /// Returns `VersionError::Malformed` for any other component count,
    /// and `VersionError::InvalidComponent` for empty, signed, padded or
    /// non-numeric components.
    pub fn parse(input: &str) -> VersionResult<Self> {
        let parts: Vec<&str> = input.split('.').collect();
        if parts.len() != 3 {
            return Err(VersionError::Malformed(input.to_string()));
        }

        let major = parse_component(input, parts[0])?;
        let minor = parse_component(input, parts[1])?;
        let patch = parse_component(input, parts[2])?;

        Ok(Self::new(major, minor, patch))
    }
}

/// `u32::from_str` tolerates a leading `+`, so digits are checked first.
fn parse_component(input: &str, component: &str) -> VersionResult<u32> {
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VersionError::InvalidComponent {
            input: input.to_string(),
            component: component.to_string(),
        });
    }

    component.parse().map_err(|_| VersionError::InvalidComponent {
        input: input.to_string(),
        component: component.to_string(),
    })
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Version::parse(&raw).map_err(serde::de::Error::custom)
    }
}
