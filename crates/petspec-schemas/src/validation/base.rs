//! Shared predicates for validating loosely-typed pet documents
//!
//! Pet spec documents come from untyped JSON (often hand-written), so
//! the checks here deliberately keep the loose field semantics those
//! documents rely on rather than enforcing strict types.
//!
//! Copyright (c) 2025 Petspec Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;

/// Loose truthiness over a JSON value.
///
/// Null and `false` are falsy, numbers are falsy iff zero, strings iff
/// empty. Arrays and objects are always truthy, even when empty.
/// Presence checks built on this treat an empty string as missing.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Loose "coerces to a number" check for the `speed`/`near`/`far` fields.
///
/// Mirrors a not-NaN check under loose numeric conversion: an absent
/// field fails, while null, booleans, and numbers pass. Strings pass if
/// blank or parseable as a finite-or-infinite float. Arrays and objects
/// fail. Numeric text like `"1.5"` is accepted on purpose.
pub fn coerces_to_number(value: Option<&Value>) -> bool {
    match value {
        None => false,
        Some(Value::Null) | Some(Value::Bool(_)) | Some(Value::Number(_)) => true,
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            trimmed.is_empty() || trimmed.parse::<f64>().is_ok_and(|n| !n.is_nan())
        }
        Some(Value::Array(_)) | Some(Value::Object(_)) => false,
    }
}

/// Resolve an asset path against the document's own location.
///
/// A path already starting with `http` is returned unchanged. Otherwise
/// a base URL is required; the base is treated as a document location,
/// so its final path component (everything from the last `/` onward) is
/// dropped before joining. A path with a leading `/` concatenates
/// directly, anything else joins with a single `/`.
///
/// This is a naive string join, not RFC 3986 resolution: `..`, `.`,
/// query strings, and repeated slashes are passed through untouched.
/// That scope is deliberate and relied on by existing documents.
pub fn resolve_url(path: &str, base_url: Option<&str>) -> Option<String> {
    if path.is_empty() {
        return None;
    }
    if path.starts_with("http") {
        return Some(path.to_string());
    }
    let base = base_url.filter(|b| !b.is_empty())?;
    let dir = match base.rfind('/') {
        Some(idx) => &base[..idx],
        None => "",
    };
    if path.starts_with('/') {
        Some(format!("{}{}", dir, path))
    } else {
        Some(format!("{}/{}", dir, path))
    }
}
