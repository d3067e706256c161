// Copyright (c) 2025 - Cowboy AI, Inc.
//! Import and State Upgrade Helpers
//!
//! - [`import_id`] - Parse import identifiers and adopt existing names
//! - [`decompose`] - Recover the random token behind a stored name

pub mod decompose;
pub mod import_id;

pub use decompose::recover_random;
pub use import_id::{import_name, import_name_with, ImportId, ImportedName};
