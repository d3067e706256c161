// Copyright (c) 2025 - Cowboy AI, Inc.
//! Catalog-Wide Tests
//!
//! Checks every bundled resource definition and alias, not a sample.

mod fixtures;

use cim_azure_naming::domain::{clean, finalize, validate, NameScope};
use cim_azure_naming::{Catalog, NameGenerator, NameSpec};
use fixtures::engine;
use pretty_assertions::assert_eq;

#[test]
fn test_bounds_and_anchors() {
    let catalog = Catalog::global().unwrap();
    for entry in catalog.entries() {
        assert!(entry.min_length() >= 1, "{}", entry.type_id());
        assert!(entry.min_length() <= entry.max_length(), "{}", entry.type_id());
        let pattern = entry.validation_regex().as_str();
        assert!(
            pattern.starts_with('^') && pattern.ends_with('$'),
            "{} validation regex is not anchored",
            entry.type_id()
        );
    }
}

#[test]
fn test_every_alias_resolves() {
    let catalog = Catalog::global().unwrap();
    assert!(!catalog.aliases().is_empty());
    for (alias, type_id) in catalog.aliases() {
        assert_eq!(catalog.resolve(alias), Some(type_id.as_str()));
        assert_eq!(catalog.get_entry(alias).unwrap().type_id(), type_id);
    }
}

#[test]
fn test_type_ids_are_sorted_and_unique() {
    let catalog = Catalog::global().unwrap();
    let ids: Vec<&str> = catalog.list_type_ids().into_iter().collect();
    assert_eq!(ids.len(), catalog.len());
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[test]
fn test_every_type_names_a_simple_base() {
    let catalog = Catalog::global().unwrap();
    for type_id in catalog.list_type_ids() {
        let spec = NameSpec::builder().base_name("app").type_id(type_id).build();
        let name = engine()
            .generate_name(&spec)
            .unwrap_or_else(|e| panic!("{type_id}: {e}"))
            .result
            .unwrap();
        let entry = catalog.get_entry(type_id).unwrap();
        assert!(validate(&name, entry).is_ok(), "{type_id}: {name}");
        assert!(name.contains("app"), "{type_id}: {name}");
    }
}

#[test]
fn test_cleaning_is_idempotent_everywhere() {
    let catalog = Catalog::global().unwrap();
    let input = "Mixed_Case-name.with (all) sorts!@#of~chars";
    for entry in catalog.entries() {
        let once = clean(input, entry);
        assert_eq!(clean(&once, entry), once, "{}", entry.type_id());
    }
}

#[test]
fn test_lowercase_types_never_emit_uppercase() {
    let catalog = Catalog::global().unwrap();
    for entry in catalog.entries().filter(|entry| entry.lowercase()) {
        let name = finalize("ABCdef", entry);
        assert!(!name.chars().any(|c| c.is_ascii_uppercase()), "{}", entry.type_id());
    }
}

#[test]
fn test_known_definitions() {
    let catalog = Catalog::global().unwrap();

    let storage = catalog.get_entry("azurerm_storage_account").unwrap();
    assert_eq!(storage.slug(), "st");
    assert_eq!((storage.min_length(), storage.max_length()), (3, 24));
    assert!(storage.lowercase());
    assert_eq!(storage.definition().scope, NameScope::Global);

    let group = catalog.get_entry("azurerm_resource_group").unwrap();
    assert_eq!(group.slug(), "rg");
    assert_eq!(group.max_length(), 90);
    assert_eq!(group.definition().scope, NameScope::Subscription);

    let general = catalog.get_entry("general").unwrap();
    assert_eq!(general.slug(), "");
}
