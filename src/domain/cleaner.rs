// Copyright (c) 2025 - Cowboy AI, Inc.
//! Input Cleaning
//!
//! Removes every character matched by a resource type's cleaning regex.
//! The regex is the sole source of truth: no trimming, no case changes.

use super::catalog::CatalogEntry;

/// Remove forbidden characters from a fragment
///
/// Order-preserving and idempotent.
pub fn clean(fragment: &str, entry: &CatalogEntry) -> String {
    entry.clean_regex().replace_all(fragment, "").into_owned()
}

/// Clean each fragment, dropping those that end up empty
pub fn clean_all<S: AsRef<str>>(fragments: &[S], entry: &CatalogEntry) -> Vec<String> {
    fragments
        .iter()
        .map(|fragment| clean(fragment.as_ref(), entry))
        .filter(|fragment| !fragment.is_empty())
        .collect()
}
