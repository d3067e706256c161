// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource Catalog and Alias Map
//!
//! The catalog maps every supported Azure resource type to its naming rules.
//! It is materialized once from the bundled data files, every regex is
//! compiled up front, and the result is published read-only for the life of
//! the process.
//!
//! # Lookup
//!
//! ```text
//! key ──alias?──> canonical type id ──catalog?──> CatalogEntry
//!                                        └── UnknownResourceType
//! ```
//!
//! # Examples
//!
//! ```rust
//! use cim_azure_naming::domain::Catalog;
//!
//! let catalog = Catalog::global().unwrap();
//! let by_alias = catalog.get_entry("st").unwrap();
//! let direct = catalog.get_entry("azurerm_storage_account").unwrap();
//! assert_eq!(by_alias.type_id(), direct.type_id());
//! assert_eq!(direct.slug(), "st");
//! ```

use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;
use tracing::debug;

use super::resource_definition::ResourceDefinition;
use crate::errors::{NamingError, NamingResult};

const BUNDLED_DEFINITIONS: &str = include_str!("../../data/resource_definitions.json");
const BUNDLED_ALIASES: &str = include_str!("../../data/resource_aliases.json");

static CATALOG: LazyLock<NamingResult<Catalog>> =
    LazyLock::new(|| Catalog::from_json(BUNDLED_DEFINITIONS, BUNDLED_ALIASES));

/// A resource definition with its regexes compiled
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    definition: ResourceDefinition,
    clean: Regex,
    validation: Regex,
}

impl CatalogEntry {
    /// Compile the regexes of a definition
    pub fn new(definition: ResourceDefinition) -> NamingResult<Self> {
        definition.check_bounds().map_err(NamingError::CatalogInit)?;
        let clean = compile(&definition.type_id, "clean_regex", &definition.clean_regex)?;
        let validation = compile(
            &definition.type_id,
            "validation_regex",
            &definition.validation_regex,
        )?;
        Ok(Self {
            definition,
            clean,
            validation,
        })
    }

    pub fn definition(&self) -> &ResourceDefinition {
        &self.definition
    }

    pub fn type_id(&self) -> &str {
        &self.definition.type_id
    }

    pub fn slug(&self) -> &str {
        &self.definition.slug
    }

    pub fn min_length(&self) -> usize {
        self.definition.min_length
    }

    pub fn max_length(&self) -> usize {
        self.definition.max_length
    }

    pub fn lowercase(&self) -> bool {
        self.definition.lowercase
    }

    /// Character class of forbidden characters
    pub fn clean_regex(&self) -> &Regex {
        &self.clean
    }

    /// Anchored pattern the final name must match
    pub fn validation_regex(&self) -> &Regex {
        &self.validation
    }
}

fn compile(type_id: &str, field: &str, pattern: &str) -> NamingResult<Regex> {
    Regex::new(pattern)
        .map_err(|e| NamingError::CatalogInit(format!("{type_id}: invalid {field}: {e}")))
}

/// Immutable catalog of resource naming rules plus the alias map
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: BTreeMap<String, CatalogEntry>,
    aliases: BTreeMap<String, String>,
}

impl Catalog {
    /// Process-wide catalog built from the bundled data files
    ///
    /// Built on first access. A malformed bundle yields
    /// [`NamingError::CatalogInit`] on every call.
    pub fn global() -> NamingResult<&'static Catalog> {
        CATALOG.as_ref().map_err(Clone::clone)
    }

    /// Build a catalog from JSON sources
    ///
    /// `definitions` is an array of [`ResourceDefinition`]; `aliases` is an
    /// object mapping short code to canonical type id.
    pub fn from_json(definitions: &str, aliases: &str) -> NamingResult<Self> {
        let definitions: Vec<ResourceDefinition> = serde_json::from_str(definitions)
            .map_err(|e| NamingError::CatalogInit(format!("resource definitions: {e}")))?;
        let aliases: BTreeMap<String, String> = serde_json::from_str(aliases)
            .map_err(|e| NamingError::CatalogInit(format!("resource aliases: {e}")))?;
        Self::new(definitions, aliases)
    }

    /// Build a catalog, enforcing the catalog-wide invariants
    ///
    /// # Invariants
    /// - Every regex compiles
    /// - `1 <= min_length <= max_length`
    /// - At most one entry per type id
    /// - Every alias targets an existing entry
    pub fn new(
        definitions: Vec<ResourceDefinition>,
        aliases: BTreeMap<String, String>,
    ) -> NamingResult<Self> {
        let mut entries = BTreeMap::new();
        for definition in definitions {
            let entry = CatalogEntry::new(definition)?;
            let type_id = entry.type_id().to_string();
            if entries.insert(type_id.clone(), entry).is_some() {
                return Err(NamingError::CatalogInit(format!(
                    "duplicate entry for {type_id}"
                )));
            }
        }

        for (alias, target) in &aliases {
            if !entries.contains_key(target) {
                return Err(NamingError::CatalogInit(format!(
                    "alias {alias} targets unknown type {target}"
                )));
            }
        }

        debug!(
            entries = entries.len(),
            aliases = aliases.len(),
            "Resource catalog materialized"
        );

        Ok(Self { entries, aliases })
    }

    /// Canonical type id for a key, applying alias resolution first
    pub fn resolve(&self, key: &str) -> Option<&str> {
        let canonical = self.aliases.get(key).map(String::as_str).unwrap_or(key);
        self.entries
            .get_key_value(canonical)
            .map(|(type_id, _)| type_id.as_str())
    }

    /// Look up an entry by alias or canonical type id
    pub fn get_entry(&self, key: &str) -> NamingResult<&CatalogEntry> {
        self.resolve(key)
            .and_then(|type_id| self.entries.get(type_id))
            .ok_or_else(|| NamingError::UnknownResourceType {
                type_id: key.to_string(),
            })
    }

    /// All canonical type ids, sorted
    pub fn list_type_ids(&self) -> BTreeSet<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Short code to canonical type id
    pub fn aliases(&self) -> &BTreeMap<String, String> {
        &self.aliases
    }

    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
