// Copyright (c) 2025 - Cowboy AI, Inc.
//! Import Identifiers
//!
//! An existing resource is adopted through a colon-delimited identifier:
//!
//! ```text
//! <type_id>:<name>[:<separator>:<clean_input>:<passthrough>:<use_slug>:<random_length>]
//! ```
//!
//! Optional segments parse leniently: an empty or unparseable value takes
//! its default. An adopted name is taken as is, so `passthrough` defaults to
//! true. Segments past the seventh are ignored.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::config::NamingConfig;
use crate::domain::{NameResult, NameSpec, NameSpecBuilder};
use crate::errors::{NamingError, NamingResult};
use crate::service::{NameGenerator, NamingEngine};

const MIN_SEGMENTS: usize = 2;

/// Parsed import identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportId {
    pub type_id: String,
    pub name: String,
    pub separator: String,
    pub clean_input: bool,
    pub passthrough: bool,
    pub use_slug: bool,
    pub random_length: usize,
}

impl ImportId {
    /// Parse an identifier, taking defaults from `config`
    pub fn parse_with(id: &str, config: &NamingConfig) -> NamingResult<Self> {
        let segments: Vec<&str> = id.split(':').collect();
        if segments.len() < MIN_SEGMENTS {
            return Err(invalid(
                id,
                format!(
                    "expected at least {MIN_SEGMENTS} colon-separated segments, got {}",
                    segments.len()
                ),
            ));
        }
        if segments[0].is_empty() {
            return Err(invalid(id, "empty resource type".to_string()));
        }
        if segments[1].is_empty() {
            return Err(invalid(id, "empty name".to_string()));
        }

        let segment = |index: usize| segments.get(index).copied().unwrap_or_default();
        Ok(Self {
            type_id: segments[0].to_string(),
            name: segments[1].to_string(),
            separator: match segment(2) {
                "" => config.separator.clone(),
                separator => separator.to_string(),
            },
            clean_input: lenient(segment(3), config.clean_input),
            passthrough: lenient(segment(4), true),
            use_slug: lenient(segment(5), config.use_slug),
            random_length: lenient(segment(6), 0),
        })
    }

    /// Spec carrying the identifier's segments
    pub fn to_name_spec(&self, config: &NamingConfig) -> NameSpec {
        NameSpecBuilder::with_config(config)
            .base_name(self.name.as_str())
            .separator(self.separator.as_str())
            .type_id(self.type_id.as_str())
            .clean_input(self.clean_input)
            .passthrough(self.passthrough)
            .use_slug(self.use_slug)
            .random_length(self.random_length)
            .build()
    }
}

impl FromStr for ImportId {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, &NamingConfig::default())
    }
}

fn invalid(id: &str, reason: String) -> NamingError {
    NamingError::InvalidImportIdFormat {
        id: id.to_string(),
        reason,
    }
}

fn lenient<T: FromStr>(value: &str, default: T) -> T {
    value.trim().parse().unwrap_or(default)
}

/// Outcome of adopting an existing resource name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedName {
    pub id: ImportId,
    /// Spec to persist for the adopted resource; regenerates `result`
    pub spec: NameSpec,
    pub result: NameResult,
}

/// Adopt an existing name with the bundled catalog
pub fn import_name(id: &str) -> NamingResult<ImportedName> {
    import_name_with(&NamingEngine::global()?, id, &NamingConfig::default())
}

/// Adopt an existing name
///
/// The name is run through the passthrough pipeline and must come out
/// unchanged: a name that cleaning, case folding or truncation would alter
/// is rejected with [`NamingError::ValidationFailed`]. The persisted spec is
/// that passthrough spec, whatever the identifier's passthrough segment says.
pub fn import_name_with(
    engine: &NamingEngine<'_>,
    id: &str,
    config: &NamingConfig,
) -> NamingResult<ImportedName> {
    let id = ImportId::parse_with(id, config)?;
    let spec = NameSpec {
        passthrough: true,
        ..id.to_name_spec(config)
    };

    let result = engine.generate_name(&spec)?;
    match result.result.as_deref() {
        Some(name) if name == id.name => {}
        _ => {
            let entry = engine.catalog().get_entry(&id.type_id)?;
            return Err(NamingError::ValidationFailed {
                type_id: entry.type_id().to_string(),
                name: id.name,
                pattern: entry.validation_regex().as_str().to_string(),
            });
        }
    }

    Ok(ImportedName { id, spec, result })
}
