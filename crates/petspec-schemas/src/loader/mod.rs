//! Loading pet spec documents from disk
//!
//! The validator itself never touches the filesystem; this module is
//! the thin layer that reads a document (JSON or YAML) into a
//! `serde_json::Value` ready for validation.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use petspec_schemas::loader::load_pet_spec;
//! use std::path::Path;
//!
//! let spec = load_pet_spec(Path::new("wolf.json"))?;
//! println!("Loaded spec: {}", serde_json::to_string_pretty(&spec)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Copyright (c) 2025 Petspec Team
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod parser;

pub use error::{LoaderError, LoaderResult};
pub use parser::{Format, SpecParser};

use serde_json::Value;
use std::path::Path;

/// Read a pet spec document from a JSON or YAML file.
///
/// The format is chosen by file extension. The document is parsed but
/// not validated; pass the result to the validation module.
pub fn load_pet_spec(path: &Path) -> LoaderResult<Value> {
    SpecParser::new().parse_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_pet_spec_yaml() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        writeln!(file, "type: M3_pet").unwrap();
        writeln!(file, "name: Wolf").unwrap();

        let spec = load_pet_spec(file.path()).unwrap();
        assert_eq!(spec["type"], "M3_pet");
        assert_eq!(spec["name"], "Wolf");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_pet_spec(Path::new("/nonexistent/wolf.json")).unwrap_err();
        assert!(matches!(err, LoaderError::Io { .. }));
    }
}
