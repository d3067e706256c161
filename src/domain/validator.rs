// Copyright (c) 2025 - Cowboy AI, Inc.
//! Final Name Checks
//!
//! The last two pipeline steps: [`finalize`] truncates and case folds a
//! candidate, [`validate`] accepts or rejects it. Both are pure.

use super::catalog::CatalogEntry;
use crate::errors::{NamingError, NamingResult};

/// Truncate to `max_length` characters, then lowercase if the type requires it
pub fn finalize(candidate: &str, entry: &CatalogEntry) -> String {
    let truncated: String = candidate.chars().take(entry.max_length()).collect();
    if entry.lowercase() {
        truncated.to_lowercase()
    } else {
        truncated
    }
}

/// Check a finished name against the type's pattern and length bounds
///
/// # Errors
/// [`NamingError::ValidationFailed`] carrying the name and the pattern when
/// the regex does not match or the length lies outside
/// `[min_length, max_length]`.
pub fn validate(name: &str, entry: &CatalogEntry) -> NamingResult<()> {
    let length = name.chars().count();
    let in_bounds = (entry.min_length()..=entry.max_length()).contains(&length);
    if in_bounds && entry.validation_regex().is_match(name) {
        return Ok(());
    }
    Err(NamingError::ValidationFailed {
        type_id: entry.type_id().to_string(),
        name: name.to_string(),
        pattern: entry.validation_regex().as_str().to_string(),
    })
}
