//! Spec version parsing and comparison
//!
//! Copyright (c) 2025 Petspec Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The highest pet spec version this crate knows how to validate.
///
/// Documents declaring a strictly greater version are rejected. There is
/// no lower bound: any parseable version up to and including this one is
/// accepted.
pub const SUPPORTED: SpecVersion = SpecVersion::new(0, 1, 0);

/// A pet spec schema version: a plain (major, minor, patch) triple.
///
/// Unlike full semver there is no pre-release or build metadata support.
/// Ordering is strictly lexicographic over (major, minor, patch), which
/// the derived `Ord` provides as long as the fields stay in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpecVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl SpecVersion {
    /// Create a new version
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a dotted version string.
    ///
    /// The string is split on `.` and the first three segments are parsed
    /// as non-negative integers. Segments past the third are ignored, so
    /// `"1.2.3.4"` parses as `1.2.3`; fewer than three segments is an
    /// error. This mirrors the behavior pet documents in the wild rely on.
    pub fn parse(version_str: &str) -> Result<Self, VersionError> {
        let parts: Vec<&str> = version_str.split('.').collect();
        if parts.len() < 3 {
            return Err(VersionError::InvalidFormat(format!(
                "expected X.Y.Z, got: {}",
                version_str
            )));
        }

        let major = parts[0].parse().map_err(|_| {
            VersionError::InvalidFormat(format!("invalid major version: {}", parts[0]))
        })?;
        let minor = parts[1].parse().map_err(|_| {
            VersionError::InvalidFormat(format!("invalid minor version: {}", parts[1]))
        })?;
        let patch = parts[2].parse().map_err(|_| {
            VersionError::InvalidFormat(format!("invalid patch version: {}", parts[2]))
        })?;

        Ok(Self {
            major,
            minor,
            patch,
        })
    }
}

impl fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for SpecVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Version parsing error
#[derive(Debug, Clone, thiserror::Error)]
pub enum VersionError {
    #[error("Invalid version format: {0}")]
    InvalidFormat(String),
}
