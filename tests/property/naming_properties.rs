// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Name Generation
//!
//! Every property draws its resource type from the full bundled catalog.

use cim_azure_naming::domain::{clean, finalize, validate};
use cim_azure_naming::{
    recover_random, Catalog, NameGenerator, NameSpec, NamingEngine, NamingError,
};
use proptest::prelude::*;

// ============================================================================
// Property Test Strategies
// ============================================================================

fn engine() -> NamingEngine<'static> {
    NamingEngine::global().expect("bundled catalog must load")
}

/// Any canonical type id of the bundled catalog
fn type_id() -> impl Strategy<Value = String> {
    let ids: Vec<String> = Catalog::global()
        .expect("bundled catalog must load")
        .list_type_ids()
        .into_iter()
        .map(str::to_string)
        .collect();
    prop::sample::select(ids)
}

/// Free text, including characters most types forbid
fn fragment() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 _.()!-]{0,12}"
}

fn affixes() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z0-9-]{1,8}", 0..3)
}

/// Composable spec for one type; the shortest catalog maximum is 9
fn name_spec() -> impl Strategy<Value = NameSpec> {
    (
        fragment(),
        affixes(),
        affixes(),
        prop_oneof![Just("-".to_string()), Just("_".to_string()), Just(String::new())],
        type_id(),
        0usize..=8,
        any::<i64>(),
        any::<bool>(),
    )
        .prop_map(
            |(base, prefixes, suffixes, separator, type_id, random_length, seed, use_slug)| {
                NameSpec::builder()
                    .base_name(base)
                    .prefixes(prefixes)
                    .suffixes(suffixes)
                    .separator(separator)
                    .type_id(type_id)
                    .random_length(random_length)
                    .random_seed(seed)
                    .use_slug(use_slug)
                    .build()
            },
        )
}

fn primary_type(spec: &NameSpec) -> &str {
    spec.type_id.as_deref().unwrap_or_default()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Every produced name is valid for its type
    ///
    /// Length lies in [min_length, max_length] and the validation regex
    /// matches. Inputs that cannot form a valid name fail validation and
    /// nothing else.
    #[test]
    fn prop_results_are_valid(spec in name_spec()) {
        let entry = Catalog::global().unwrap().get_entry(primary_type(&spec)).unwrap();
        match engine().generate_name(&spec) {
            Ok(result) => {
                let name = result.result.unwrap();
                let length = name.chars().count();
                prop_assert!(length >= entry.min_length() && length <= entry.max_length());
                prop_assert!(entry.validation_regex().is_match(&name));
            }
            Err(err) => prop_assert!(
                matches!(err, NamingError::ValidationFailed { .. }),
                "unexpected error {:?}",
                err
            ),
        }
    }

    /// Property: Identical specs give identical results
    #[test]
    fn prop_generation_is_deterministic(spec in name_spec()) {
        let copy = spec.clone();
        prop_assert_eq!(engine().generate_name(&spec), engine().generate_name(&copy));
    }

    /// Property: Derived seeds are deterministic too
    #[test]
    fn prop_derived_seed_is_deterministic(spec in name_spec()) {
        let derived = NameSpec { random_seed: None, ..spec };
        prop_assert_eq!(derived.effective_seed(), derived.clone().effective_seed());
        prop_assert_eq!(engine().generate_name(&derived), engine().generate_name(&derived));
    }

    /// Property: Without a random token the seed is irrelevant
    #[test]
    fn prop_no_random_ignores_seed(spec in name_spec(), other_seed in any::<i64>()) {
        let spec = NameSpec { random_length: 0, ..spec };
        let reseeded = NameSpec { random_seed: Some(other_seed), ..spec.clone() };
        prop_assert_eq!(
            engine().generate_name(&spec).map(|r| r.result),
            engine().generate_name(&reseeded).map(|r| r.result)
        );
    }

    /// Property: Cleaning is idempotent
    #[test]
    fn prop_cleaning_is_idempotent(type_id in type_id(), input in fragment()) {
        let entry = Catalog::global().unwrap().get_entry(&type_id).unwrap();
        let once = clean(&input, entry);
        prop_assert_eq!(clean(&once, entry), once);
    }

    /// Property: Lowercase types never emit uppercase letters
    #[test]
    fn prop_lowercase_types_emit_lowercase(spec in name_spec()) {
        let entry = Catalog::global().unwrap().get_entry(primary_type(&spec)).unwrap();
        if let Ok(result) = engine().generate_name(&spec) {
            let name = result.result.unwrap();
            if entry.lowercase() {
                prop_assert!(!name.chars().any(|c| c.is_ascii_uppercase()));
            }
        }
    }

    /// Property: Passthrough returns the cleaned, cased base name
    #[test]
    fn prop_passthrough_is_cleaned_base(spec in name_spec()) {
        let spec = NameSpec { passthrough: true, ..spec };
        let entry = Catalog::global().unwrap().get_entry(primary_type(&spec)).unwrap();
        let expected = finalize(&clean(&spec.base_name, entry), entry);
        match engine().generate_name(&spec) {
            Ok(result) => prop_assert_eq!(result.result, Some(expected)),
            Err(_) => prop_assert!(validate(&expected, entry).is_err()),
        }
    }

    /// Property: Batch siblings share the token and the inputs
    ///
    /// Each batch name equals the name of a single-type call made with the
    /// batch's token.
    #[test]
    fn prop_batch_is_consistent(spec in name_spec(), second in type_id()) {
        let first = primary_type(&spec).to_string();
        let batch = NameSpec { type_id: None, type_ids: vec![first, second], ..spec };
        if let Ok(result) = engine().generate_name(&batch) {
            for type_id in &batch.type_ids {
                let single = NameSpec {
                    type_id: Some(type_id.clone()),
                    type_ids: Vec::new(),
                    ..batch.clone()
                };
                let alone = engine()
                    .generate_with_random(&single, &result.random_string)
                    .unwrap();
                prop_assert_eq!(alone.result.as_deref(), result.name_for(type_id));
            }
        }
    }

    /// Property: Recovery finds a token that regenerates the result
    #[test]
    fn prop_recovery_round_trips(spec in name_spec()) {
        if let Ok(produced) = engine().generate_name(&spec) {
            let token = recover_random(&engine(), &spec, &produced).unwrap();
            let regenerated = engine().generate_with_random(&spec, &token).unwrap();
            prop_assert_eq!(regenerated.result, produced.result);
        }
    }
}
