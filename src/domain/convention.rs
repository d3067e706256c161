// Copyright (c) 2025 - Cowboy AI, Inc.
//! Naming Conventions
//!
//! Legacy conventions kept at the façade. They never change the composition
//! algorithm; they only decide which fragments reach the composer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::NamingError;

/// Fragment-selection strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// Slug honored, random only when requested
    #[default]
    CafClassic,
    /// Slug honored, callers normally request a random token
    CafRandom,
    /// Slug suppressed
    Random,
    /// Composition bypassed; only cleaning, casing and validation run
    Passthrough,
}

impl Convention {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CafClassic => "cafclassic",
            Self::CafRandom => "cafrandom",
            Self::Random => "random",
            Self::Passthrough => "passthrough",
        }
    }

    /// Whether the slug may be used when the caller asks for it
    pub fn exposes_slug(&self) -> bool {
        matches!(self, Self::CafClassic | Self::CafRandom)
    }

    /// Whether composition is skipped regardless of the passthrough flag
    pub fn forces_passthrough(&self) -> bool {
        matches!(self, Self::Passthrough)
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Convention {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cafclassic" => Ok(Self::CafClassic),
            "cafrandom" => Ok(Self::CafRandom),
            "random" => Ok(Self::Random),
            "passthrough" => Ok(Self::Passthrough),
            other => Err(NamingError::Configuration(format!(
                "unknown convention '{other}'"
            ))),
        }
    }
}
