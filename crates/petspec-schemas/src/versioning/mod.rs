//! Spec version handling
//!
//! This module provides the minimal versioning support the pet spec
//! needs: parsing a dotted (major, minor, patch) triple and comparing
//! it against the highest version this crate supports.
//!
//! Copyright (c) 2025 Petspec Team
//! Licensed under the Apache-2.0 license

pub mod version;

pub use version::{SpecVersion, VersionError, SUPPORTED};

/// Check whether a document version can be validated by this crate.
///
/// Only an upper bound is enforced; there is no minimum-version floor.
pub fn is_supported(version: &SpecVersion) -> bool {
    *version <= SUPPORTED
}
