// Copyright (c) 2025 - Cowboy AI, Inc.
//! Naming Engine Service
//!
//! Public entry points of the engine. A call resolves each requested type,
//! cleans the fragments with that type's rules, lays them out, truncates,
//! case folds and validates.
//!
//! # Pipeline (per type)
//!
//! ```text
//! resolve → bound check → clean → slug → compose | bypass
//!         → finalize → validate
//! ```
//!
//! Every type in a call shares one random token. A failure for any type
//! aborts the call with an error naming that type; partial results are
//! never returned.
//!
//! # Example
//!
//! ```rust
//! use cim_azure_naming::domain::NameSpec;
//! use cim_azure_naming::service::generate_name;
//!
//! let spec = NameSpec::builder()
//!     .base_name("myrg")
//!     .prefix("dev")
//!     .type_id("azurerm_resource_group")
//!     .build();
//! let result = generate_name(&spec).unwrap();
//! assert_eq!(result.result.as_deref(), Some("dev-rg-myrg"));
//! ```

use tracing::{debug, trace};

use crate::domain::{
    clean, clean_all, compose, finalize, random_string, validate, Catalog, CatalogEntry,
    Composition, Fragments, NameResult, NameSpec,
};
use crate::errors::{NamingError, NamingResult};
use crate::state_machine::{NamingPhase, PhaseInput, StateMachine};

/// Name generation interface
///
/// Implemented by [`NamingEngine`]; the recovery helpers are written
/// against this trait.
pub trait NameGenerator {
    /// Generate names for every type `spec` selects
    fn generate_name(&self, spec: &NameSpec) -> NamingResult<NameResult>;

    /// Generate names using `random` instead of the token `spec` derives
    fn generate_with_random(&self, spec: &NameSpec, random: &str) -> NamingResult<NameResult>;

    /// Fragment layout the composer picks for one type
    ///
    /// `None` when `spec` bypasses composition.
    fn composition(
        &self,
        spec: &NameSpec,
        type_id: &str,
        random: &str,
    ) -> NamingResult<Option<Composition>>;
}

/// Naming engine over a catalog
#[derive(Debug, Clone, Copy)]
pub struct NamingEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> NamingEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Engine over the bundled catalog
    pub fn global() -> NamingResult<NamingEngine<'static>> {
        Catalog::global().map(NamingEngine::new)
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    fn name_for_type(&self, spec: &NameSpec, key: &str, random: &str) -> NamingResult<String> {
        let mut tracker = PhaseTracker::new(key);
        let outcome = self.run_pipeline(spec, key, random, &mut tracker);
        if let Err(err) = &outcome {
            tracker.advance(PhaseInput::Fail(err.into()));
        }
        outcome
    }

    fn run_pipeline(
        &self,
        spec: &NameSpec,
        key: &str,
        random: &str,
        tracker: &mut PhaseTracker<'_>,
    ) -> NamingResult<String> {
        let prepared = self.prepare(spec, key, random, tracker)?;

        let candidate = if spec.passthrough_enabled() {
            tracker.advance(PhaseInput::Bypass);
            prepared.name.clone()
        } else {
            let composition = prepared.compose(spec);
            tracker.advance(PhaseInput::Compose);
            composition.join()
        };

        let name = finalize(&candidate, prepared.entry);
        tracker.advance(PhaseInput::Finalize);

        validate(&name, prepared.entry)?;
        tracker.advance(PhaseInput::Validate);
        tracker.advance(PhaseInput::Complete);

        debug!(
            type_id = prepared.entry.type_id(),
            name = %name,
            "Name generated"
        );
        Ok(name)
    }

    /// Resolve, bound check and clean
    fn prepare(
        &self,
        spec: &NameSpec,
        key: &str,
        random: &str,
        tracker: &mut PhaseTracker<'_>,
    ) -> NamingResult<Prepared<'a>> {
        let entry = self.catalog.get_entry(key)?;
        tracker.advance(PhaseInput::Resolve);

        if spec.random_length > entry.max_length() {
            return Err(NamingError::LengthExceeded {
                type_id: entry.type_id().to_string(),
                random_length: spec.random_length,
                max_length: entry.max_length(),
            });
        }

        let prepared = Prepared::new(spec, entry, random);
        tracker.advance(PhaseInput::Clean);
        Ok(prepared)
    }

    fn selected<'s>(spec: &'s NameSpec) -> Option<&'s str> {
        spec.type_id.as_deref().filter(|type_id| !type_id.is_empty())
    }
}

impl NameGenerator for NamingEngine<'_> {
    fn generate_name(&self, spec: &NameSpec) -> NamingResult<NameResult> {
        let random = random_string(spec.random_length, spec.effective_seed());
        self.generate_with_random(spec, &random)
    }

    fn generate_with_random(&self, spec: &NameSpec, random: &str) -> NamingResult<NameResult> {
        if !spec.has_selection() {
            return Err(NamingError::EmptyResourceSelection);
        }

        let mut output = NameResult {
            random_string: random.to_string(),
            ..NameResult::default()
        };
        if let Some(type_id) = Self::selected(spec) {
            output.result = Some(self.name_for_type(spec, type_id, random)?);
        }
        for type_id in &spec.type_ids {
            let name = self.name_for_type(spec, type_id, random)?;
            output.results.insert(type_id.clone(), name);
        }
        Ok(output)
    }

    fn composition(
        &self,
        spec: &NameSpec,
        type_id: &str,
        random: &str,
    ) -> NamingResult<Option<Composition>> {
        let mut tracker = PhaseTracker::new(type_id);
        let prepared = self.prepare(spec, type_id, random, &mut tracker)?;
        if spec.passthrough_enabled() {
            return Ok(None);
        }
        Ok(Some(prepared.compose(spec)))
    }
}

/// Generate names with the bundled catalog
pub fn generate_name(spec: &NameSpec) -> NamingResult<NameResult> {
    NamingEngine::global()?.generate_name(spec)
}

/// Generate one name per entry of `type_ids`, replacing the batch of `spec`
///
/// The primary `type_id` of `spec`, if any, is still honored.
pub fn generate_names<S>(spec: &NameSpec, type_ids: &[S]) -> NamingResult<NameResult>
where
    S: AsRef<str>,
{
    let mut batch = spec.clone();
    batch.type_ids = type_ids.iter().map(|id| id.as_ref().to_string()).collect();
    generate_name(&batch)
}

/// Fragments of one type after cleaning
struct Prepared<'e> {
    entry: &'e CatalogEntry,
    prefixes: Vec<String>,
    suffixes: Vec<String>,
    name: String,
    separator: String,
    random: String,
    slug: &'e str,
}

impl<'e> Prepared<'e> {
    fn new(spec: &NameSpec, entry: &'e CatalogEntry, random: &str) -> Self {
        let slug = if spec.slug_enabled() { entry.slug() } else { "" };
        if spec.clean_input {
            Self {
                entry,
                prefixes: clean_all(&spec.prefixes, entry),
                suffixes: clean_all(&spec.suffixes, entry),
                name: clean(&spec.base_name, entry),
                separator: clean(&spec.separator, entry),
                random: clean(random, entry),
                slug,
            }
        } else {
            Self {
                entry,
                prefixes: non_empty(&spec.prefixes),
                suffixes: non_empty(&spec.suffixes),
                name: spec.base_name.clone(),
                separator: spec.separator.clone(),
                random: random.to_string(),
                slug,
            }
        }
    }

    fn compose(&self, spec: &NameSpec) -> Composition {
        let fragments = Fragments {
            prefixes: &self.prefixes,
            slug: self.slug,
            name: &self.name,
            random: &self.random,
            suffixes: &self.suffixes,
            separator: &self.separator,
        };
        compose(&fragments, self.entry.max_length(), &spec.precedence)
    }
}

fn non_empty(fragments: &[String]) -> Vec<String> {
    fragments
        .iter()
        .filter(|fragment| !fragment.is_empty())
        .cloned()
        .collect()
}

/// Drives the per-type phase machine and traces each step
struct PhaseTracker<'k> {
    type_id: &'k str,
    phase: NamingPhase,
}

impl<'k> PhaseTracker<'k> {
    fn new(type_id: &'k str) -> Self {
        Self {
            type_id,
            phase: NamingPhase::Init,
        }
    }

    fn advance(&mut self, input: PhaseInput) {
        match self.phase.transition(&input) {
            Ok((next, ())) => {
                self.phase = next;
                trace!(type_id = self.type_id, phase = %self.phase, "Naming phase");
            }
            Err(err) => trace!(type_id = self.type_id, error = %err, "Phase input rejected"),
        }
    }

    #[cfg(test)]
    fn phase(&self) -> NamingPhase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Convention, FragmentKind, Precedence};
    use crate::state_machine::FailureKind;
    use pretty_assertions::assert_eq;

    fn engine() -> NamingEngine<'static> {
        NamingEngine::global().unwrap()
    }

    fn primary(spec: &NameSpec) -> String {
        engine().generate_name(spec).unwrap().result.unwrap()
    }

    #[test]
    fn test_storage_account_strips_separator() {
        let spec = NameSpec::builder()
            .base_name("test")
            .type_id("azurerm_storage_account")
            .build();
        assert_eq!(primary(&spec), "sttest");
    }

    #[test]
    fn test_alias_is_accepted() {
        let spec = NameSpec::builder().base_name("myrg").prefix("dev").type_id("rg").build();
        assert_eq!(primary(&spec), "dev-rg-myrg");
    }

    #[test]
    fn test_random_token_is_placed() {
        let spec = NameSpec::builder()
            .base_name("app")
            .type_id("azurerm_key_vault")
            .random_length(5)
            .random_seed(42)
            .build();
        let result = engine().generate_name(&spec).unwrap();
        assert_eq!(result.random_string, random_string(5, 42));
        assert_eq!(
            result.result.unwrap(),
            format!("kv-app-{}", result.random_string)
        );
    }

    #[test]
    fn test_empty_selection() {
        let spec = NameSpec::builder().base_name("x").build();
        assert_eq!(
            engine().generate_name(&spec).unwrap_err(),
            NamingError::EmptyResourceSelection
        );
    }

    #[test]
    fn test_length_exceeded() {
        let spec = NameSpec::builder()
            .base_name("test")
            .type_id("st")
            .random_length(25)
            .build();
        assert_eq!(
            engine().generate_name(&spec).unwrap_err(),
            NamingError::LengthExceeded {
                type_id: "azurerm_storage_account".to_string(),
                random_length: 25,
                max_length: 24,
            }
        );
    }

    #[test]
    fn test_random_convention_drops_slug() {
        let spec = NameSpec::builder()
            .base_name("myrg")
            .type_id("rg")
            .convention(Convention::Random)
            .build();
        assert_eq!(primary(&spec), "myrg");
    }

    #[test]
    fn test_passthrough_convention() {
        let spec = NameSpec::builder()
            .base_name("Exact-Name")
            .prefix("dev")
            .type_id("st")
            .random_length(4)
            .convention(Convention::Passthrough)
            .build();
        assert_eq!(primary(&spec), "exactname");
    }

    #[test]
    fn test_clean_input_disabled_fails_validation() {
        let spec = NameSpec::builder()
            .base_name("bad name")
            .type_id("st")
            .clean_input(false)
            .build();
        let err = engine().generate_name(&spec).unwrap_err();
        assert!(matches!(err, NamingError::ValidationFailed { .. }));
        assert_eq!(err.type_id(), Some("azurerm_storage_account"));
    }

    #[test]
    fn test_batch_shares_token_and_aborts_on_failure() {
        let spec = NameSpec::builder()
            .base_name("app")
            .type_ids(["rg", "kv", "azurerm_storage_account"])
            .random_length(4)
            .build();
        let result = engine().generate_name(&spec).unwrap();
        assert!(result.result.is_none());
        assert_eq!(result.results.len(), 3);
        for name in result.results.values() {
            assert!(name.contains(&result.random_string));
        }

        let failing = NameSpec::builder()
            .type_ids(["rg", "azurerm_nope"])
            .build();
        assert_eq!(
            engine().generate_name(&failing).unwrap_err(),
            NamingError::UnknownResourceType {
                type_id: "azurerm_nope".to_string()
            }
        );
    }

    #[test]
    fn test_primary_and_batch_together() {
        let spec = NameSpec::builder()
            .base_name("app")
            .type_id("rg")
            .type_ids(["kv"])
            .build();
        let result = engine().generate_name(&spec).unwrap();
        assert_eq!(result.result.as_deref(), Some("rg-app"));
        assert_eq!(result.name_for("kv"), Some("kv-app"));
    }

    #[test]
    fn test_generate_names_replaces_batch() {
        let spec = NameSpec::builder().base_name("app").type_ids(["vm"]).build();
        let result = generate_names(&spec, &["rg", "kv"]).unwrap();
        assert_eq!(result.results.keys().collect::<Vec<_>>(), vec!["kv", "rg"]);
    }

    #[test]
    fn test_composition_exposes_layout() {
        let spec = NameSpec::builder()
            .base_name("app")
            .type_id("rg")
            .precedence(vec![Precedence::Random, Precedence::Name])
            .build();
        let composition = engine().composition(&spec, "rg", "xyz").unwrap().unwrap();
        assert_eq!(composition.join(), "xyz-app");
        assert!(!composition.contains(FragmentKind::Slug));

        let passthrough = NameSpec { passthrough: true, ..spec };
        assert!(engine().composition(&passthrough, "rg", "xyz").unwrap().is_none());
    }

    #[test]
    fn test_phase_tracking() {
        let spec = NameSpec::builder().base_name("app").type_id("rg").build();
        let mut tracker = PhaseTracker::new("rg");
        engine().run_pipeline(&spec, "rg", "", &mut tracker).unwrap();
        assert_eq!(tracker.phase(), NamingPhase::Done);

        let mut tracker = PhaseTracker::new("st");
        let bad = NameSpec::builder().base_name("a").type_id("st").random_length(30).build();
        let err = engine().run_pipeline(&bad, "st", "", &mut tracker).unwrap_err();
        tracker.advance(PhaseInput::Fail((&err).into()));
        assert_eq!(tracker.phase(), NamingPhase::Failed(FailureKind::LengthExceeded));
    }
}
