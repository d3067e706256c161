// Copyright (c) 2025 - Cowboy AI, Inc.
//! Azure Resource Definition
//!
//! One row of the resource catalog: the syntactic rules Azure imposes on the
//! name of a single resource type, plus the CAF slug used when composing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespace in which a resource name must be unique
///
/// Informational only. The engine never checks uniqueness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NameScope {
    /// Unique across all of Azure (usually a DNS label)
    Global,
    /// Unique within the Entra tenant
    Tenant,
    /// Unique within the subscription
    Subscription,
    /// Unique within the resource group
    ResourceGroup,
    /// Unique within the parent resource
    Parent,
    /// Unique within the region
    Region,
}

impl NameScope {
    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Tenant => "tenant",
            Self::Subscription => "subscription",
            Self::ResourceGroup => "resourceGroup",
            Self::Parent => "parent",
            Self::Region => "region",
        }
    }
}

impl fmt::Display for NameScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Naming rules for one Azure resource type
///
/// `clean_regex` is a character class of *forbidden* characters; every match
/// is removed from input fragments. `validation_regex` is the anchored
/// pattern the final name must satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDefinition {
    /// Canonical identifier, e.g. `azurerm_storage_account`
    pub type_id: String,
    /// CAF abbreviation, empty for the general entries
    #[serde(default)]
    pub slug: String,
    pub min_length: usize,
    pub max_length: usize,
    /// Final name is folded to lowercase
    #[serde(default)]
    pub lowercase: bool,
    /// Whether `-` may appear in the name
    #[serde(default)]
    pub dashes: bool,
    pub scope: NameScope,
    pub clean_regex: String,
    pub validation_regex: String,
}

impl ResourceDefinition {
    /// Check the structural rules every catalog row must satisfy
    ///
    /// # Rules
    /// - Type identifier is non-empty
    /// - `1 <= min_length <= max_length`
    pub fn check_bounds(&self) -> Result<(), String> {
        if self.type_id.is_empty() {
            return Err("entry with empty type_id".to_string());
        }
        if self.min_length == 0 {
            return Err(format!("{}: min_length must be at least 1", self.type_id));
        }
        if self.min_length > self.max_length {
            return Err(format!(
                "{}: min_length {} exceeds max_length {}",
                self.type_id, self.min_length, self.max_length
            ));
        }
        Ok(())
    }
}
