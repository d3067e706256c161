// Copyright (c) 2025 - Cowboy AI, Inc.
//! Naming defaults
//!
//! Defaults a [`NameSpecBuilder`](crate::domain::NameSpecBuilder) starts
//! from. The process-level overrides come from the environment:
//!
//! | Variable | Meaning |
//! |---|---|
//! | `AZURECAF_SEPARATOR` | fragment separator |
//! | `AZURECAF_PRECEDENCE` | comma list of `name,slug,random,suffixes,prefixes` |
//! | `AZURECAF_CONVENTION` | `cafclassic`, `cafrandom`, `random` or `passthrough` |
//! | `AZURECAF_CLEAN_INPUT` | `true`/`false` |
//! | `AZURECAF_USE_SLUG` | `true`/`false` |

use serde::{Deserialize, Serialize};

use crate::domain::{Convention, Precedence, DEFAULT_PRECEDENCE};
use crate::errors::{NamingError, NamingResult};

pub const ENV_SEPARATOR: &str = "AZURECAF_SEPARATOR";
pub const ENV_PRECEDENCE: &str = "AZURECAF_PRECEDENCE";
pub const ENV_CONVENTION: &str = "AZURECAF_CONVENTION";
pub const ENV_CLEAN_INPUT: &str = "AZURECAF_CLEAN_INPUT";
pub const ENV_USE_SLUG: &str = "AZURECAF_USE_SLUG";

/// Default values for new name specifications
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Separator inserted between fragments
    pub separator: String,
    /// Order in which fragments are laid out
    pub precedence: Vec<Precedence>,
    pub convention: Convention,
    pub clean_input: bool,
    pub use_slug: bool,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            separator: "-".to_string(),
            precedence: DEFAULT_PRECEDENCE.to_vec(),
            convention: Convention::CafClassic,
            clean_input: true,
            use_slug: true,
        }
    }
}

impl NamingConfig {
    /// Load defaults, overlaying any `AZURECAF_*` environment variables
    pub fn from_env() -> NamingResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load defaults from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> NamingResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(separator) = lookup(ENV_SEPARATOR) {
            config.separator = separator;
        }
        if let Some(precedence) = lookup(ENV_PRECEDENCE) {
            config.precedence = Precedence::parse_list(&precedence)?;
        }
        if let Some(convention) = lookup(ENV_CONVENTION) {
            config.convention = convention.parse()?;
        }
        if let Some(value) = lookup(ENV_CLEAN_INPUT) {
            config.clean_input = parse_flag(ENV_CLEAN_INPUT, &value)?;
        }
        if let Some(value) = lookup(ENV_USE_SLUG) {
            config.use_slug = parse_flag(ENV_USE_SLUG, &value)?;
        }

        Ok(config)
    }
}

fn parse_flag(key: &str, value: &str) -> NamingResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(NamingError::Configuration(format!(
            "{key}: expected a boolean, got '{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = NamingConfig::default();
        assert_eq!(config.separator, "-");
        assert_eq!(config.precedence, DEFAULT_PRECEDENCE.to_vec());
        assert_eq!(config.convention, Convention::CafClassic);
        assert!(config.clean_input);
        assert!(config.use_slug);
    }

    #[test]
    fn test_empty_environment_is_default() {
        let config = NamingConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, NamingConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = NamingConfig::from_lookup(lookup(&[
            (ENV_SEPARATOR, "_"),
            (ENV_PRECEDENCE, "prefixes, name"),
            (ENV_CONVENTION, "random"),
            (ENV_CLEAN_INPUT, "no"),
            (ENV_USE_SLUG, "0"),
        ]))
        .unwrap();
        assert_eq!(config.separator, "_");
        assert_eq!(config.precedence, vec![Precedence::Prefixes, Precedence::Name]);
        assert_eq!(config.convention, Convention::Random);
        assert!(!config.clean_input);
        assert!(!config.use_slug);
    }

    #[test]
    fn test_malformed_values() {
        for pairs in [
            [(ENV_PRECEDENCE, "name,bogus")],
            [(ENV_CONVENTION, "azure")],
            [(ENV_USE_SLUG, "maybe")],
        ] {
            let err = NamingConfig::from_lookup(lookup(&pairs)).unwrap_err();
            assert!(matches!(err, NamingError::Configuration(_)));
        }
    }
}
