//! Petspec Schemas - validation for M3 pet specification documents
//!
//! This crate validates a declarative "pet" document against the fixed
//! `M3_pet` schema and normalizes its model asset reference:
//! - **Validation**: a fixed, ordered sequence of field checks that
//!   stops at the first failure and reports a short, stable message
//! - **Normalization**: a relative `model` path is rewritten in place
//!   to an absolute URL against the document's own location, and a
//!   missing `emotes` list is defaulted to empty
//! - **Versioning**: a minimal (major, minor, patch) comparator gating
//!   documents against the highest supported schema version
//! - **Loading**: reading documents from JSON or YAML files
//!
//! ## Quick Start
//!
//! ```rust
//! use petspec_schemas::validate_pet_spec;
//! use serde_json::json;
//!
//! let mut spec = json!({
//!     "type": "M3_pet",
//!     "version": "0.1.0",
//!     "name": "Wolf",
//!     "description": "A loyal companion",
//!     "model": "wolf.glb",
//!     "speed": 3,
//!     "near": 2,
//!     "far": 10,
//!     "emotes": [
//!         {"name": "wave", "animation": "wave_anim"}
//!     ]
//! });
//!
//! match validate_pet_spec(&mut spec, Some("http://pets.example.com/wolf/doc.json")) {
//!     Ok(()) => println!("Valid pet: {}", spec["model"]),
//!     Err(e) => println!("Invalid pet: {}", e),
//! }
//! # assert_eq!(spec["model"], "http://pets.example.com/wolf/wolf.glb");
//! ```
//!
//! Validation mutates the caller's document. On success `model` is
//! guaranteed absolute and `emotes` is guaranteed an array; on failure
//! the document may be partially normalized and should be discarded.
//!
//! Copyright (c) 2025 Petspec Team
//! Licensed under the Apache-2.0 license

pub mod loader;
pub mod validation;
pub mod versioning;

// Re-export commonly used types for convenience
pub use loader::{load_pet_spec, LoaderError, LoaderResult};
pub use validation::{
    validate_pet_spec, PetSpecValidator, ValidationError, ValidationResult, PET_SPEC_TYPE,
};
pub use versioning::{is_supported, SpecVersion, VersionError, SUPPORTED};
