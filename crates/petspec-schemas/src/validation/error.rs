//! Validation error type for pet spec documents
//!
//! Copyright (c) 2025 Petspec Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A pet spec validation failure.
///
/// Validation reports a single short human-readable message for the
/// first rule that failed; there are no error codes and no aggregation
/// of multiple defects. The exact wording is part of the crate's
/// contract (callers and external tooling match on it), so `Display`
/// prints the bare message with no decoration.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new<M: Into<String>>(message: M) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human-readable failure message
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;
