// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-azure-naming
//!
//! Deterministic specs shared by the integration suites. Seeds are fixed
//! constants so expected names never drift between runs.

#![allow(dead_code)]

use cim_azure_naming::{NameSpec, NamingEngine};

pub const STORAGE_ACCOUNT: &str = "azurerm_storage_account";
pub const RESOURCE_GROUP: &str = "azurerm_resource_group";
pub const KEY_VAULT: &str = "azurerm_key_vault";

/// Fixed explicit seed
pub const SEED: i64 = 20_260_119;

pub fn engine() -> NamingEngine<'static> {
    NamingEngine::global().expect("bundled catalog must load")
}

/// S1: storage account, no random token
pub fn storage_account_spec() -> NameSpec {
    NameSpec::builder()
        .base_name("test")
        .type_id(STORAGE_ACCOUNT)
        .build()
}

/// S2: resource group with one prefix
pub fn resource_group_spec() -> NameSpec {
    NameSpec::builder()
        .base_name("myrg")
        .prefix("dev")
        .separator("-")
        .type_id(RESOURCE_GROUP)
        .build()
}

/// Batch over three types sharing one random token
pub fn batch_spec() -> NameSpec {
    NameSpec::builder()
        .base_name("payments")
        .prefixes(["corp", "prod"])
        .suffixes(["weu", "01"])
        .type_ids([RESOURCE_GROUP, STORAGE_ACCOUNT, KEY_VAULT])
        .random_length(5)
        .random_seed(SEED)
        .build()
}
