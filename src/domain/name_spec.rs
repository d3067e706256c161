// Copyright (c) 2025 - Cowboy AI, Inc.
//! Name Specification and Result
//!
//! The host hands the engine an untyped map of schema values. It is decoded
//! exactly once, here, into a statically typed [`NameSpec`]; nothing past
//! this boundary sees untyped data.
//!
//! # Examples
//!
//! ```rust
//! use cim_azure_naming::domain::NameSpec;
//!
//! let spec = NameSpec::builder()
//!     .base_name("myrg")
//!     .prefix("dev")
//!     .type_id("azurerm_resource_group")
//!     .build();
//! assert_eq!(spec.separator, "-");
//! assert!(spec.clean_input);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::convention::Convention;
use super::random::derive_seed;
use crate::config::NamingConfig;
use crate::errors::{NamingError, NamingResult};

/// Fragment kinds the composer lays out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precedence {
    /// The base name, appended right
    Name,
    /// The CAF slug, prepended left
    Slug,
    /// The random token, appended right
    Random,
    /// Suffixes, head first, appended right
    Suffixes,
    /// Prefixes, tail first, prepended left
    Prefixes,
}

/// Layout used when the caller does not choose one
pub const DEFAULT_PRECEDENCE: [Precedence; 5] = [
    Precedence::Name,
    Precedence::Slug,
    Precedence::Random,
    Precedence::Suffixes,
    Precedence::Prefixes,
];

impl Precedence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Slug => "slug",
            Self::Random => "random",
            Self::Suffixes => "suffixes",
            Self::Prefixes => "prefixes",
        }
    }

    /// Parse a comma-separated precedence list
    pub fn parse_list(list: &str) -> NamingResult<Vec<Self>> {
        list.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::parse::<Self>)
            .collect()
    }
}

impl fmt::Display for Precedence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Precedence {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "slug" => Ok(Self::Slug),
            "random" => Ok(Self::Random),
            "suffixes" => Ok(Self::Suffixes),
            "prefixes" => Ok(Self::Prefixes),
            other => Err(NamingError::Configuration(format!(
                "unknown precedence token '{other}'"
            ))),
        }
    }
}

/// Per-call naming input
///
/// At least one of `type_id` / `type_ids` must be set. Host keys from the
/// plugin schema (`name`, `resource_type`, `resource_types`) are accepted as
/// aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameSpec {
    #[serde(alias = "name")]
    pub base_name: String,
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
    pub separator: String,
    #[serde(alias = "resource_type")]
    pub type_id: Option<String>,
    #[serde(alias = "resource_types")]
    pub type_ids: Vec<String>,
    pub random_length: usize,
    /// Explicit seed; absent or zero means derive one from the inputs
    pub random_seed: Option<i64>,
    pub clean_input: bool,
    pub use_slug: bool,
    pub passthrough: bool,
    pub convention: Convention,
    #[serde(alias = "name_precedence")]
    pub precedence: Vec<Precedence>,
}

impl Default for NameSpec {
    fn default() -> Self {
        NameSpecBuilder::with_config(&NamingConfig::default()).build()
    }
}

impl NameSpec {
    /// Builder seeded with [`NamingConfig::default`]
    pub fn builder() -> NameSpecBuilder {
        NameSpecBuilder::with_config(&NamingConfig::default())
    }

    /// Decode an untyped host map
    ///
    /// Absent keys take their defaults; unknown precedence tokens or
    /// conventions are rejected.
    pub fn from_value(value: serde_json::Value) -> NamingResult<Self> {
        Self::from_value_with(value, &NamingConfig::default())
    }

    /// Decode an untyped host map, taking absent defaults from `config`
    pub fn from_value_with(value: serde_json::Value, config: &NamingConfig) -> NamingResult<Self> {
        let present = |keys: &[&str]| {
            value
                .as_object()
                .is_some_and(|map| keys.iter().any(|key| map.contains_key(*key)))
        };
        let separator = present(&["separator"]);
        let precedence = present(&["precedence", "name_precedence"]);
        let convention = present(&["convention"]);
        let clean_input = present(&["clean_input"]);
        let use_slug = present(&["use_slug"]);

        let mut spec: Self = serde_json::from_value(value)?;
        if !separator {
            spec.separator = config.separator.clone();
        }
        if !precedence {
            spec.precedence = config.precedence.clone();
        }
        if !convention {
            spec.convention = config.convention;
        }
        if !clean_input {
            spec.clean_input = config.clean_input;
        }
        if !use_slug {
            spec.use_slug = config.use_slug;
        }
        Ok(spec)
    }

    /// Seed the random token is drawn from
    ///
    /// An explicit non-zero seed is used verbatim (two's complement for
    /// negative values). Otherwise the seed is derived from every input that
    /// shapes the name, so repeated calls agree without the caller choosing
    /// a seed.
    pub fn effective_seed(&self) -> u64 {
        match self.random_seed {
            Some(seed) if seed != 0 => seed as u64,
            _ => self.derived_seed(),
        }
    }

    fn derived_seed(&self) -> u64 {
        let mut type_ids: Vec<&str> = self.type_ids.iter().map(String::as_str).collect();
        type_ids.sort_unstable();

        let mut fields: Vec<String> = Vec::new();
        fields.push(self.base_name.clone());
        fields.push(self.prefixes.len().to_string());
        fields.extend(self.prefixes.iter().cloned());
        fields.push(self.suffixes.len().to_string());
        fields.extend(self.suffixes.iter().cloned());
        fields.push(self.separator.clone());
        fields.push(self.type_id.clone().unwrap_or_default());
        fields.push(type_ids.len().to_string());
        fields.extend(type_ids.iter().map(|id| id.to_string()));
        fields.push(self.random_length.to_string());

        derive_seed(fields)
    }

    /// Slug is used only when requested and the convention exposes it
    pub fn slug_enabled(&self) -> bool {
        self.use_slug && self.convention.exposes_slug()
    }

    /// Composition is skipped by flag or by convention
    pub fn passthrough_enabled(&self) -> bool {
        self.passthrough || self.convention.forces_passthrough()
    }

    /// Whether any resource type was requested
    pub fn has_selection(&self) -> bool {
        self.type_id.as_deref().is_some_and(|id| !id.is_empty()) || !self.type_ids.is_empty()
    }
}

/// Builder for [`NameSpec`]
#[derive(Debug, Clone)]
pub struct NameSpecBuilder {
    spec: NameSpec,
}

impl NameSpecBuilder {
    /// Start from configured defaults
    pub fn with_config(config: &NamingConfig) -> Self {
        Self {
            spec: NameSpec {
                base_name: String::new(),
                prefixes: Vec::new(),
                suffixes: Vec::new(),
                separator: config.separator.clone(),
                type_id: None,
                type_ids: Vec::new(),
                random_length: 0,
                random_seed: None,
                clean_input: config.clean_input,
                use_slug: config.use_slug,
                passthrough: false,
                convention: config.convention,
                precedence: config.precedence.clone(),
            },
        }
    }

    pub fn base_name(mut self, name: impl Into<String>) -> Self {
        self.spec.base_name = name.into();
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.spec.prefixes.push(prefix.into());
        self
    }

    pub fn prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.spec.prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.spec.suffixes.push(suffix.into());
        self
    }

    pub fn suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.spec.suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.spec.separator = separator.into();
        self
    }

    pub fn type_id(mut self, type_id: impl Into<String>) -> Self {
        self.spec.type_id = Some(type_id.into());
        self
    }

    pub fn type_ids<I, S>(mut self, type_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.spec.type_ids = type_ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn random_length(mut self, length: usize) -> Self {
        self.spec.random_length = length;
        self
    }

    pub fn random_seed(mut self, seed: i64) -> Self {
        self.spec.random_seed = Some(seed);
        self
    }

    pub fn clean_input(mut self, clean: bool) -> Self {
        self.spec.clean_input = clean;
        self
    }

    pub fn use_slug(mut self, use_slug: bool) -> Self {
        self.spec.use_slug = use_slug;
        self
    }

    pub fn passthrough(mut self, passthrough: bool) -> Self {
        self.spec.passthrough = passthrough;
        self
    }

    pub fn convention(mut self, convention: Convention) -> Self {
        self.spec.convention = convention;
        self
    }

    pub fn precedence(mut self, precedence: impl Into<Vec<Precedence>>) -> Self {
        self.spec.precedence = precedence.into();
        self
    }

    pub fn build(self) -> NameSpec {
        self.spec
    }
}

/// Output of one naming call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameResult {
    /// Name for `type_id`, when one was requested
    pub result: Option<String>,
    /// Name per entry of `type_ids`, keyed as requested
    pub results: BTreeMap<String, String>,
    /// Random token the names were composed from
    pub random_string: String,
}

impl NameResult {
    /// Name generated for a batch key, as it was requested
    pub fn name_for(&self, key: &str) -> Option<&str> {
        self.results.get(key).map(String::as_str)
    }
}
