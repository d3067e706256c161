// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service Layer for Resource Naming
//!
//! Orchestrates the pure domain steps into the public naming operations.
//!
//! # Architecture
//!
//! ```text
//! Host input (untyped map)
//!     ↓
//! NameSpec::from_value (typed boundary)
//!     ↓
//! Service Layer (this module)
//!     ↓
//! Catalog → Cleaner → Random → Composer → Validator
//!     ↓
//! NameResult
//! ```
//!
//! # Design Principles
//!
//! 1. **Pure**: no I/O, no shared mutable state
//! 2. **Deterministic**: identical specs give identical names
//! 3. **All or nothing**: a batch fails as a whole

pub mod naming;

pub use naming::{generate_name, generate_names, NameGenerator, NamingEngine};
