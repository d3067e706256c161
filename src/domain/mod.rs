// Copyright (c) 2025 - Cowboy AI, Inc.
//! Naming Domain Models
//!
//! Pure building blocks of the naming engine: the resource catalog, the
//! per-call input and output types, and the leaf algorithms the engine
//! orchestrates.
//!
//! # Catalog
//!
//! - [`ResourceDefinition`] - Naming rules of one Azure resource type
//! - [`Catalog`] - Compiled, read-only table of definitions plus aliases
//!
//! # Pipeline Steps
//!
//! ```text
//! clean ──> random ──> compose ──> finalize ──> validate
//! ```
//!
//! - [`cleaner`] - Strip forbidden characters
//! - [`random`] - Deterministic random token
//! - [`composer`] - Precedence-driven layout under the length ceiling
//! - [`validator`] - Truncate, case fold, regex and length check

pub mod catalog;
pub mod cleaner;
pub mod composer;
pub mod convention;
pub mod name_spec;
pub mod random;
pub mod resource_definition;
pub mod validator;

pub use catalog::{Catalog, CatalogEntry};
pub use cleaner::{clean, clean_all};
pub use composer::{compose, Composition, Fragment, FragmentKind, Fragments};
pub use convention::Convention;
pub use name_spec::{NameResult, NameSpec, NameSpecBuilder, Precedence, DEFAULT_PRECEDENCE};
pub use random::{derive_seed, random_string, Lcg};
pub use resource_definition::{NameScope, ResourceDefinition};
pub use validator::{finalize, validate};
