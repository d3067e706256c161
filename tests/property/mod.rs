// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! Quantified invariants of the naming engine: validity, determinism,
//! cleaning, casing, passthrough, batch consistency and token recovery.

mod naming_properties;
