// Copyright (c) 2025 - Cowboy AI, Inc.
//! Name Composition
//!
//! Lays fragments out according to a precedence list while keeping the
//! joined name strictly shorter than the type's maximum length.
//!
//! # Layout Rules
//!
//! ```text
//! name, random, suffixes  → appended on the right
//! slug, prefixes          → prepended on the left
//! suffixes                → consumed head first
//! prefixes                → consumed tail first
//! ```
//!
//! A fragment fits when
//! `current + len(fragment) + (separator if non-empty so far) < max_length`.
//! The strict `<` keeps outputs identical to previously generated names and
//! must not be relaxed to `<=`.
//!
//! A list step fires again while the list still has items, whether or not
//! the consumed item fitted, so a long item in the middle of a list does not
//! stop shorter ones after it.

use std::collections::VecDeque;

use super::name_spec::Precedence;

/// Origin of a composed fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    Prefix,
    Slug,
    Name,
    Random,
    Suffix,
}

/// One placed fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub value: String,
}

/// Already-cleaned inputs to the composer
#[derive(Debug, Clone, Copy)]
pub struct Fragments<'a> {
    pub prefixes: &'a [String],
    pub slug: &'a str,
    pub name: &'a str,
    pub random: &'a str,
    pub suffixes: &'a [String],
    pub separator: &'a str,
}

/// Ordered fragments, left to right
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composition {
    parts: Vec<Fragment>,
    separator: String,
}

impl Composition {
    pub fn parts(&self) -> &[Fragment] {
        &self.parts
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Whether a fragment of this kind was placed
    pub fn contains(&self, kind: FragmentKind) -> bool {
        self.parts.iter().any(|part| part.kind == kind)
    }

    /// Join the fragments with the separator
    pub fn join(&self) -> String {
        self.parts
            .iter()
            .map(|part| part.value.as_str())
            .collect::<Vec<_>>()
            .join(&self.separator)
    }
}

struct Layout {
    parts: VecDeque<Fragment>,
    length: usize,
    separator_len: usize,
    max_length: usize,
}

impl Layout {
    fn framing(&self) -> usize {
        if self.parts.is_empty() {
            0
        } else {
            self.separator_len
        }
    }

    fn place(&mut self, kind: FragmentKind, value: &str, left: bool) {
        if value.is_empty() {
            return;
        }
        let grown = self.length + value.chars().count() + self.framing();
        if grown >= self.max_length {
            return;
        }
        self.length = grown;
        let fragment = Fragment {
            kind,
            value: value.to_string(),
        };
        if left {
            self.parts.push_front(fragment);
        } else {
            self.parts.push_back(fragment);
        }
    }
}

/// Compose fragments under `max_length` following `precedence`
pub fn compose(
    fragments: &Fragments<'_>,
    max_length: usize,
    precedence: &[Precedence],
) -> Composition {
    let mut layout = Layout {
        parts: VecDeque::new(),
        length: 0,
        separator_len: fragments.separator.chars().count(),
        max_length,
    };
    let mut prefixes: Vec<&str> = fragments.prefixes.iter().map(String::as_str).collect();
    let mut suffixes: VecDeque<&str> = fragments.suffixes.iter().map(String::as_str).collect();

    let mut step = 0;
    while step < precedence.len() {
        let mut revisit = false;
        match precedence[step] {
            Precedence::Name => layout.place(FragmentKind::Name, fragments.name, false),
            Precedence::Slug => layout.place(FragmentKind::Slug, fragments.slug, true),
            Precedence::Random => layout.place(FragmentKind::Random, fragments.random, false),
            Precedence::Suffixes => {
                if let Some(suffix) = suffixes.pop_front() {
                    layout.place(FragmentKind::Suffix, suffix, false);
                    revisit = !suffixes.is_empty();
                }
            }
            Precedence::Prefixes => {
                if let Some(prefix) = prefixes.pop() {
                    layout.place(FragmentKind::Prefix, prefix, true);
                    revisit = !prefixes.is_empty();
                }
            }
        }
        if !revisit {
            step += 1;
        }
    }

    Composition {
        parts: layout.parts.into(),
        separator: fragments.separator.to_string(),
    }
}
