// Copyright (c) 2025 - Cowboy AI, Inc.
//! Random Token Recovery
//!
//! State upgrades and imports know the inputs of a stored name but not the
//! random token it was drawn with. Recovery strips the known fragments off
//! each stored name and keeps the residual as a candidate token.
//!
//! Stripping is only a guess. A candidate is accepted when regenerating
//! every stored name with it reproduces them exactly, and only when exactly
//! one candidate does.
//!
//! ```text
//! stored name ──strip known fragments──> candidates
//!   candidates ──regenerate batch──> consistent?
//!     exactly one ──> token
//!     none / many ──> InconsistentRecovery
//! ```

use std::collections::BTreeSet;
use tracing::{debug, trace};

use crate::domain::{Composition, Fragment, FragmentKind, NameResult, NameSpec};
use crate::errors::{NamingError, NamingResult};
use crate::service::NameGenerator;

/// Placeholder letter used to learn where the token lands
const PLACEHOLDER: char = 'x';

/// Recover the random token a stored result was generated with
///
/// `produced` must hold a name for the primary type (if `spec` has one)
/// and for every batch type.
///
/// # Errors
/// - [`NamingError::InconsistentRecovery`] when no candidate, or more than
///   one, regenerates every stored name
/// - any error `spec` itself raises during regeneration
pub fn recover_random<G: NameGenerator>(
    generator: &G,
    spec: &NameSpec,
    produced: &NameResult,
) -> NamingResult<String> {
    let stored = stored_names(spec, produced)?;
    let placeholder: String = std::iter::repeat(PLACEHOLDER)
        .take(spec.random_length)
        .collect();

    let mut candidates = BTreeSet::new();
    for (type_id, name) in &stored {
        let layout = generator.composition(spec, type_id, &placeholder)?;
        if let Some(candidate) = layout.as_ref().and_then(|layout| residual(layout, name)) {
            trace!(type_id = %type_id, candidate = %candidate, "Recovery candidate");
            candidates.insert(candidate);
        } else {
            candidates.insert(String::new());
        }
    }

    let mut consistent = Vec::new();
    for candidate in candidates {
        let regenerated = generator.generate_with_random(spec, &candidate)?;
        if regenerated.result == produced_primary(spec, produced)
            && batch_matches(spec, &regenerated, produced)
        {
            consistent.push(candidate);
        }
    }

    let type_id = stored
        .first()
        .map(|(type_id, _)| type_id.to_string())
        .unwrap_or_default();
    match consistent.len() {
        1 => {
            let token = consistent.remove(0);
            debug!(type_id = %type_id, token = %token, "Random token recovered");
            Ok(token)
        }
        0 => Err(NamingError::InconsistentRecovery {
            type_id,
            reason: "no candidate token regenerates the stored names".to_string(),
        }),
        n => Err(NamingError::InconsistentRecovery {
            type_id,
            reason: format!("{n} candidate tokens regenerate the stored names"),
        }),
    }
}

/// Requested type id paired with its stored name
fn stored_names<'s>(
    spec: &'s NameSpec,
    produced: &'s NameResult,
) -> NamingResult<Vec<(&'s str, &'s str)>> {
    if !spec.has_selection() {
        return Err(NamingError::EmptyResourceSelection);
    }

    let mut stored = Vec::new();
    if let Some(type_id) = spec.type_id.as_deref().filter(|id| !id.is_empty()) {
        let name = produced.result.as_deref().ok_or_else(|| missing(type_id))?;
        stored.push((type_id, name));
    }
    for type_id in &spec.type_ids {
        let name = produced.name_for(type_id).ok_or_else(|| missing(type_id))?;
        stored.push((type_id.as_str(), name));
    }
    Ok(stored)
}

fn missing(type_id: &str) -> NamingError {
    NamingError::InconsistentRecovery {
        type_id: type_id.to_string(),
        reason: "no stored name".to_string(),
    }
}

fn produced_primary(spec: &NameSpec, produced: &NameResult) -> Option<String> {
    spec.type_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .and(produced.result.clone())
}

fn batch_matches(spec: &NameSpec, regenerated: &NameResult, produced: &NameResult) -> bool {
    spec.type_ids
        .iter()
        .all(|type_id| regenerated.name_for(type_id) == produced.name_for(type_id))
}

/// Text of `name` between the fragments laid out left and right of the token
///
/// `None` when the layout has no token or the name does not carry the
/// expected fragments.
fn residual(layout: &Composition, name: &str) -> Option<String> {
    let parts = layout.parts();
    let index = parts
        .iter()
        .position(|part| part.kind == FragmentKind::Random)?;
    let separator = layout.separator();

    let mut left = join(&parts[..index], separator);
    if !left.is_empty() {
        left.push_str(separator);
    }
    let mut right = join(&parts[index + 1..], separator);
    if !right.is_empty() {
        right.insert_str(0, separator);
    }

    // the stored name may have been case folded
    if !name.chars().any(char::is_uppercase) {
        left = left.to_lowercase();
        right = right.to_lowercase();
    }

    name.strip_prefix(left.as_str())
        .and_then(|rest| rest.strip_suffix(right.as_str()))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

fn join(parts: &[Fragment], separator: &str) -> String {
    parts
        .iter()
        .map(|part| part.value.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}
