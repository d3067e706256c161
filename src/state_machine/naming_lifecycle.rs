// Copyright (c) 2025 - Cowboy AI, Inc.
//! Naming Pipeline State Machine
//!
//! Phases one resource type goes through during a naming call.
//!
//! # States
//!
//! ```text
//! Init → Resolved → Cleaned → Composed → Finalized → Validated → Done
//!                      └──Bypass──┘
//! ```
//!
//! Any non-terminal state moves to `Failed(kind)` on [`PhaseInput::Fail`].
//! `Done` and `Failed` are terminal.
//!
//! # Inputs
//!
//! - Resolve: Init → Resolved
//! - Clean: Resolved → Cleaned
//! - Compose: Cleaned → Composed
//! - Bypass: Cleaned → Composed (passthrough, no layout)
//! - Finalize: Composed → Finalized (truncate + case fold)
//! - Validate: Finalized → Validated
//! - Complete: Validated → Done

use std::fmt;

use super::{StateMachine, TransitionError, TransitionResult};
use crate::errors::NamingError;

/// Error kind a pipeline failed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    UnknownResourceType,
    EmptyResourceSelection,
    LengthExceeded,
    ValidationFailed,
    InvalidImportIdFormat,
    InconsistentRecovery,
    CatalogInit,
    Configuration,
    Serialization,
}

impl From<&NamingError> for FailureKind {
    fn from(err: &NamingError) -> Self {
        match err {
            NamingError::UnknownResourceType { .. } => Self::UnknownResourceType,
            NamingError::EmptyResourceSelection => Self::EmptyResourceSelection,
            NamingError::LengthExceeded { .. } => Self::LengthExceeded,
            NamingError::ValidationFailed { .. } => Self::ValidationFailed,
            NamingError::InvalidImportIdFormat { .. } => Self::InvalidImportIdFormat,
            NamingError::InconsistentRecovery { .. } => Self::InconsistentRecovery,
            NamingError::CatalogInit(_) => Self::CatalogInit,
            NamingError::Configuration(_) => Self::Configuration,
            NamingError::Serialization(_) => Self::Serialization,
        }
    }
}

/// Pipeline phase (FSM state)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamingPhase {
    Init,
    Resolved,
    Cleaned,
    Composed,
    Finalized,
    Validated,
    Done,
    Failed(FailureKind),
}

impl NamingPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed(_))
    }
}

impl fmt::Display for NamingPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed(kind) => write!(f, "Failed({kind:?})"),
            other => write!(f, "{other:?}"),
        }
    }
}

/// Pipeline step (FSM input)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseInput {
    Resolve,
    Clean,
    Compose,
    /// Skip composition; the cleaned base name is the candidate
    Bypass,
    Finalize,
    Validate,
    Complete,
    Fail(FailureKind),
}

impl StateMachine for NamingPhase {
    type Input = PhaseInput;
    type Output = ();

    fn transition(&self, input: &Self::Input) -> TransitionResult<(Self, Self::Output)> {
        use NamingPhase::*;
        use PhaseInput::*;

        if self.is_terminal() {
            return Err(TransitionError::Terminal(self.to_string()));
        }

        let next = match (self, input) {
            (_, Fail(kind)) => Failed(*kind),
            (Init, Resolve) => Resolved,
            (Resolved, Clean) => Cleaned,
            (Cleaned, Compose | Bypass) => Composed,
            (Composed, Finalize) => Finalized,
            (Finalized, Validate) => Validated,
            (Validated, Complete) => Done,
            (from, input) => {
                return Err(TransitionError::InvalidTransition {
                    from: from.to_string(),
                    to: format!("{input:?}"),
                })
            }
        };
        Ok((next, ()))
    }

    fn valid_inputs(&self) -> Vec<Self::Input> {
        use NamingPhase::*;
        use PhaseInput::*;

        let step = match self {
            Init => vec![Resolve],
            Resolved => vec![Clean],
            Cleaned => vec![Compose, Bypass],
            Composed => vec![Finalize],
            Finalized => vec![Validate],
            Validated => vec![Complete],
            Done | Failed(_) => return Vec::new(),
        };
        step.into_iter()
            .chain(std::iter::once(Fail(FailureKind::ValidationFailed)))
            .collect()
    }
}
