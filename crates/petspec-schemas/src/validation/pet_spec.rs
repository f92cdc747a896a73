//! Pet spec validation with in-place asset URL normalization
//!
//! Copyright (c) 2025 Petspec Team
//! Licensed under the Apache-2.0 license

use crate::validation::base::{coerces_to_number, is_truthy, resolve_url};
use crate::validation::error::{ValidationError, ValidationResult};
use crate::versioning::{is_supported, SpecVersion};
use serde_json::Value;

/// The `type` discriminator every pet spec document must carry.
pub const PET_SPEC_TYPE: &str = "M3_pet";

/// Validator for pet spec documents.
///
/// Runs a fixed sequence of field checks against an untyped JSON
/// document and stops at the first failure. Two fields are normalized
/// in place as a side effect: `model` is rewritten to an absolute URL
/// once it validates, and a missing `emotes` field is defaulted to an
/// empty array. Because `model` is rewritten before the later checks
/// run, a rejected document may be left partially mutated and must be
/// discarded by the caller.
///
/// The validator holds no mutable state, so one instance can be shared
/// across threads as long as each call gets its own document.
///
/// # Examples
///
/// ```rust
/// use petspec_schemas::PetSpecValidator;
/// use serde_json::json;
///
/// let validator = PetSpecValidator::with_base_url("http://x.com/scene/doc.json");
/// let mut spec = json!({
///     "type": "M3_pet",
///     "version": "0.1.0",
///     "name": "Wolf",
///     "description": "A loyal companion",
///     "model": "wolf.glb",
///     "speed": 3, "near": 2, "far": 10
/// });
///
/// validator.validate(&mut spec)?;
/// assert_eq!(spec["model"], "http://x.com/scene/wolf.glb");
/// assert_eq!(spec["emotes"], json!([]));
/// # Ok::<(), petspec_schemas::ValidationError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PetSpecValidator {
    base_url: Option<String>,
}

impl PetSpecValidator {
    /// Create a validator that cannot resolve relative asset paths.
    ///
    /// Documents whose `model` is already an absolute URL still validate;
    /// a relative `model` is reported as an invalid url.
    pub fn new() -> Self {
        Self { base_url: None }
    }

    /// Create a validator that resolves relative asset paths against the
    /// document's own retrieval location.
    pub fn with_base_url<U: Into<String>>(base_url: U) -> Self {
        Self {
            base_url: Some(base_url.into()),
        }
    }

    /// The base URL used for relative asset resolution, if any
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Validate a pet spec document, normalizing `model` and `emotes`.
    ///
    /// Returns the first failing rule's message. On failure the document
    /// may be partially normalized; treat any error as "discard the
    /// document", not "this one field is bad".
    pub fn validate(&self, spec: &mut Value) -> ValidationResult<()> {
        if !is_truthy(spec) || spec.as_object().is_some_and(|obj| obj.is_empty()) {
            return Err(ValidationError::new("invalid"));
        }
        if !field_truthy(spec, "type") {
            return Err(ValidationError::new("missing 'type' attribute"));
        }
        if spec.get("type").and_then(Value::as_str) != Some(PET_SPEC_TYPE) {
            return Err(ValidationError::new("invalid 'type' attribute"));
        }
        if !field_truthy(spec, "version") {
            return Err(ValidationError::new("missing 'version' attribute"));
        }
        let version = spec
            .get("version")
            .and_then(Value::as_str)
            .and_then(|s| SpecVersion::parse(s).ok())
            .ok_or_else(|| ValidationError::new("invalid 'version' attribute"))?;
        if !is_supported(&version) {
            return Err(ValidationError::new("unsupported version"));
        }
        if !field_truthy(spec, "name") {
            return Err(ValidationError::new("missing 'name' attribute"));
        }
        if !field_truthy(spec, "description") {
            return Err(ValidationError::new("missing 'description' attribute"));
        }
        if !field_truthy(spec, "model") {
            return Err(ValidationError::new("missing 'model' attribute"));
        }
        let model_url = spec
            .get("model")
            .and_then(Value::as_str)
            .and_then(|path| resolve_url(path, self.base_url.as_deref()))
            .filter(|url| url.ends_with(".glb"))
            .ok_or_else(|| ValidationError::new("invalid 'model' url"))?;
        // Normalized before the remaining checks run; a later failure
        // leaves the document partially mutated.
        spec["model"] = Value::String(model_url);
        for field in ["speed", "near", "far"] {
            if !coerces_to_number(spec.get(field)) {
                return Err(ValidationError::new(format!(
                    "invalid '{}' attribute",
                    field
                )));
            }
        }
        if !field_truthy(spec, "emotes") {
            spec["emotes"] = Value::Array(Vec::new());
        }
        match spec.get("emotes") {
            Some(Value::Array(emotes)) => {
                for emote in emotes {
                    self.validate_emote(emote)?;
                }
            }
            // A truthy non-sequence cannot hold valid emotes, and a
            // successful validation guarantees `emotes` is an array.
            _ => return Err(ValidationError::new("missing emote 'name' attribute")),
        }
        Ok(())
    }

    fn validate_emote(&self, emote: &Value) -> ValidationResult<()> {
        if !field_truthy(emote, "name") {
            return Err(ValidationError::new("missing emote 'name' attribute"));
        }
        if !field_truthy(emote, "animation") {
            return Err(ValidationError::new("missing emote 'animation' attribute"));
        }
        if let Some(audio) = emote.get("audio").filter(|a| is_truthy(a)) {
            if !audio.as_str().is_some_and(|a| a.starts_with("http")) {
                return Err(ValidationError::new("invalid emote 'audio' attribute"));
            }
        }
        Ok(())
    }
}

fn field_truthy(value: &Value, key: &str) -> bool {
    value.get(key).is_some_and(is_truthy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hosted_pet_spec() -> Value {
        json!({
            "type": "M3_pet",
            "version": "0.1.0",
            "name": "n",
            "description": "d",
            "model": "http://x.com/wolf.glb",
            "speed": 1,
            "near": 1,
            "far": 1
        })
    }

    fn message(result: ValidationResult<()>) -> String {
        result.unwrap_err().message().to_string()
    }

    #[test]
    fn test_null_and_empty_input() {
        let validator = PetSpecValidator::new();
        assert_eq!(message(validator.validate(&mut Value::Null)), "invalid");
        assert_eq!(message(validator.validate(&mut json!({}))), "invalid");
        assert_eq!(message(validator.validate(&mut json!(false))), "invalid");
        assert_eq!(message(validator.validate(&mut json!(""))), "invalid");
    }

    #[test]
    fn test_type_checks() {
        let validator = PetSpecValidator::new();
        assert_eq!(
            message(validator.validate(&mut json!({"name": "n"}))),
            "missing 'type' attribute"
        );
        assert_eq!(
            message(validator.validate(&mut json!({"type": "X"}))),
            "invalid 'type' attribute"
        );
        // A non-string discriminator is invalid, not missing.
        assert_eq!(
            message(validator.validate(&mut json!({"type": 7}))),
            "invalid 'type' attribute"
        );
    }

    #[test]
    fn test_version_checks() {
        let validator = PetSpecValidator::new();
        let mut spec = hosted_pet_spec();
        spec.as_object_mut().unwrap().remove("version");
        assert_eq!(
            message(validator.validate(&mut spec)),
            "missing 'version' attribute"
        );

        let mut spec = hosted_pet_spec();
        spec["version"] = json!("1.0");
        assert_eq!(
            message(validator.validate(&mut spec)),
            "invalid 'version' attribute"
        );

        let mut spec = hosted_pet_spec();
        spec["version"] = json!(1);
        assert_eq!(
            message(validator.validate(&mut spec)),
            "invalid 'version' attribute"
        );

        let mut spec = hosted_pet_spec();
        spec["version"] = json!("0.2.0");
        assert_eq!(message(validator.validate(&mut spec)), "unsupported version");

        // Extra segments are ignored, so this is still 0.1.0.
        let mut spec = hosted_pet_spec();
        spec["version"] = json!("0.1.0.9");
        assert!(validator.validate(&mut spec).is_ok());

        // No minimum-version floor.
        let mut spec = hosted_pet_spec();
        spec["version"] = json!("0.0.1");
        assert!(validator.validate(&mut spec).is_ok());
    }

    #[test]
    fn test_required_string_fields() {
        let validator = PetSpecValidator::new();
        for (field, expected) in [
            ("name", "missing 'name' attribute"),
            ("description", "missing 'description' attribute"),
            ("model", "missing 'model' attribute"),
        ] {
            let mut spec = hosted_pet_spec();
            spec.as_object_mut().unwrap().remove(field);
            assert_eq!(message(validator.validate(&mut spec)), expected);

            // Empty strings count as missing.
            let mut spec = hosted_pet_spec();
            spec[field] = json!("");
            assert_eq!(message(validator.validate(&mut spec)), expected);
        }
    }

    #[test]
    fn test_relative_model_without_base_url() {
        let validator = PetSpecValidator::new();
        let mut spec = hosted_pet_spec();
        spec["model"] = json!("wolf.glb");
        assert_eq!(
            message(validator.validate(&mut spec)),
            "invalid 'model' url"
        );
    }

    #[test]
    fn test_model_extension_must_be_glb() {
        let validator = PetSpecValidator::new();
        let mut spec = hosted_pet_spec();
        spec["model"] = json!("http://x.com/wolf.gltf");
        assert_eq!(
            message(validator.validate(&mut spec)),
            "invalid 'model' url"
        );

        // Case-sensitive suffix check.
        let mut spec = hosted_pet_spec();
        spec["model"] = json!("http://x.com/wolf.GLB");
        assert_eq!(
            message(validator.validate(&mut spec)),
            "invalid 'model' url"
        );

        let mut spec = hosted_pet_spec();
        spec["model"] = json!(42);
        assert_eq!(
            message(validator.validate(&mut spec)),
            "invalid 'model' url"
        );
    }

    #[test]
    fn test_absolute_model_is_kept() {
        let validator = PetSpecValidator::new();
        let mut spec = hosted_pet_spec();
        assert!(validator.validate(&mut spec).is_ok());
        assert_eq!(spec["model"], "http://x.com/wolf.glb");
        assert_eq!(spec["emotes"], json!([]));
    }

    #[test]
    fn test_relative_model_is_resolved() {
        let validator = PetSpecValidator::with_base_url("http://x.com/scene/doc.json");
        let mut spec = hosted_pet_spec();
        spec["model"] = json!("wolf.glb");
        assert!(validator.validate(&mut spec).is_ok());
        assert_eq!(spec["model"], "http://x.com/scene/wolf.glb");
    }

    #[test]
    fn test_numeric_fields() {
        let validator = PetSpecValidator::new();
        for field in ["speed", "near", "far"] {
            let mut spec = hosted_pet_spec();
            spec.as_object_mut().unwrap().remove(field);
            assert_eq!(
                message(validator.validate(&mut spec)),
                format!("invalid '{}' attribute", field)
            );

            let mut spec = hosted_pet_spec();
            spec[field] = json!("fast");
            assert_eq!(
                message(validator.validate(&mut spec)),
                format!("invalid '{}' attribute", field)
            );
        }

        // Loose coercion: numeric text and null both pass.
        let mut spec = hosted_pet_spec();
        spec["speed"] = json!("2.5");
        spec["near"] = json!(null);
        assert!(validator.validate(&mut spec).is_ok());
    }

    #[test]
    fn test_model_mutated_even_when_later_check_fails() {
        let validator = PetSpecValidator::with_base_url("http://x.com/scene/doc.json");
        let mut spec = hosted_pet_spec();
        spec["model"] = json!("wolf.glb");
        spec["speed"] = json!({});
        assert_eq!(
            message(validator.validate(&mut spec)),
            "invalid 'speed' attribute"
        );
        // The rejected document is left partially normalized.
        assert_eq!(spec["model"], "http://x.com/scene/wolf.glb");
    }

    #[test]
    fn test_emote_checks_short_circuit_in_order() {
        let validator = PetSpecValidator::new();
        let mut spec = hosted_pet_spec();
        spec["emotes"] = json!([{"name": "wave"}]);
        assert_eq!(
            message(validator.validate(&mut spec)),
            "missing emote 'animation' attribute"
        );

        let mut spec = hosted_pet_spec();
        spec["emotes"] = json!([
            {"name": "wave", "animation": "wave_anim"},
            {"animation": "howl_anim"},
            {"name": "sit"}
        ]);
        assert_eq!(
            message(validator.validate(&mut spec)),
            "missing emote 'name' attribute"
        );
    }

    #[test]
    fn test_truthy_non_array_emotes_is_rejected() {
        let validator = PetSpecValidator::new();
        // A non-sequence can never satisfy the per-emote checks, so a
        // successful validation always leaves `emotes` as an array.
        for emotes in [json!("yes"), json!(5), json!({"name": "wave"})] {
            let mut spec = hosted_pet_spec();
            spec["emotes"] = emotes;
            assert_eq!(
                message(validator.validate(&mut spec)),
                "missing emote 'name' attribute"
            );
        }
    }

    #[test]
    fn test_emote_audio() {
        let validator = PetSpecValidator::new();
        let mut spec = hosted_pet_spec();
        spec["emotes"] = json!([{
            "name": "howl",
            "animation": "howl_anim",
            "audio": "howl.mp3"
        }]);
        assert_eq!(
            message(validator.validate(&mut spec)),
            "invalid emote 'audio' attribute"
        );

        let mut spec = hosted_pet_spec();
        spec["emotes"] = json!([{
            "name": "howl",
            "animation": "howl_anim",
            "audio": "https://x.com/howl.mp3"
        }]);
        assert!(validator.validate(&mut spec).is_ok());

        // Falsy audio is treated as absent.
        let mut spec = hosted_pet_spec();
        spec["emotes"] = json!([{
            "name": "howl",
            "animation": "howl_anim",
            "audio": ""
        }]);
        assert!(validator.validate(&mut spec).is_ok());
    }

    #[test]
    fn test_validation_is_idempotent_on_success() {
        let validator = PetSpecValidator::with_base_url("http://x.com/scene/doc.json");
        let mut spec = hosted_pet_spec();
        spec["model"] = json!("wolf.glb");
        assert!(validator.validate(&mut spec).is_ok());
        let normalized = spec.clone();

        // An already-normalized document revalidates cleanly and is
        // unchanged, including without the original base URL.
        assert!(PetSpecValidator::new().validate(&mut spec).is_ok());
        assert_eq!(spec, normalized);
    }
}
