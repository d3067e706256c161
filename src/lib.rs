// Copyright (c) 2025 - Cowboy AI, Inc.
//! Deterministic Azure resource naming
//!
//! Builds resource names that satisfy each Azure resource type's length,
//! character set and case rules, laid out after the Cloud Adoption
//! Framework conventions. Names are reproducible: the same inputs always
//! give the same name.
//!
//! # Example
//!
//! ```rust
//! use cim_azure_naming::{generate_name, NameSpec};
//!
//! let spec = NameSpec::builder()
//!     .base_name("test")
//!     .type_id("azurerm_storage_account")
//!     .build();
//! assert_eq!(generate_name(&spec).unwrap().result.as_deref(), Some("sttest"));
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod import;
pub mod service;
pub mod state_machine;

// Re-export commonly used types
pub use config::NamingConfig;
pub use domain::{Catalog, CatalogEntry, Convention, NameResult, NameSpec, Precedence};
pub use errors::{NamingError, NamingResult};
pub use import::{import_name, recover_random, ImportId};
pub use service::{generate_name, generate_names, NameGenerator, NamingEngine};
