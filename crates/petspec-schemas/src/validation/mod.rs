//! Validation for pet spec documents
//!
//! This module checks an untyped JSON document against the fixed pet
//! spec schema: a `M3_pet` discriminator, a supported schema version,
//! required metadata fields, a `.glb` model reference (normalized to an
//! absolute URL in place), loose numeric movement fields, and an
//! optional list of emotes.
//!
//! Checks run in a fixed order and the first failure wins; nothing is
//! aggregated. Failures are short free-text messages whose wording is
//! stable and part of the contract.
//!
//! Copyright (c) 2025 Petspec Team
//! Licensed under the Apache-2.0 license

pub mod base;
pub mod error;
pub mod pet_spec;

pub use base::{coerces_to_number, is_truthy, resolve_url};
pub use error::{ValidationError, ValidationResult};
pub use pet_spec::{PetSpecValidator, PET_SPEC_TYPE};

use serde_json::Value;

/// Validate a pet spec document in one call.
///
/// `base_url` is the location the document itself was loaded from; it
/// is required to resolve a relative `model` path. On success the
/// document's `model` field holds an absolute URL and `emotes` is an
/// array. On failure the document may be partially normalized and
/// should be discarded.
///
/// # Examples
///
/// ```rust
/// use petspec_schemas::validate_pet_spec;
/// use serde_json::json;
///
/// let mut spec = json!({
///     "type": "M3_pet",
///     "version": "0.1.0",
///     "name": "Wolf",
///     "description": "A loyal companion",
///     "model": "wolf.glb",
///     "speed": 3, "near": 2, "far": 10
/// });
///
/// validate_pet_spec(&mut spec, Some("http://x.com/scene/doc.json"))?;
/// assert_eq!(spec["model"], "http://x.com/scene/wolf.glb");
/// # Ok::<(), petspec_schemas::ValidationError>(())
/// ```
pub fn validate_pet_spec(spec: &mut Value, base_url: Option<&str>) -> ValidationResult<()> {
    let validator = match base_url {
        Some(url) => PetSpecValidator::with_base_url(url),
        None => PetSpecValidator::new(),
    };
    validator.validate(spec)
}
