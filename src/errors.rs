// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for naming operations

use thiserror::Error;

/// Errors that can occur while resolving, composing or recovering names
///
/// Every per-type failure carries the `type_id` it was raised for, so a batch
/// failure tells the host which sibling aborted the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamingError {
    /// Type identifier is neither an alias nor a catalog entry
    #[error("Unknown resource type: {type_id}")]
    UnknownResourceType { type_id: String },

    /// Neither a single type nor a batch of types was requested
    #[error("No resource type selected: set resource_type or resource_types")]
    EmptyResourceSelection,

    /// The requested random length alone breaks the type's maximum length
    #[error(
        "Random length {random_length} exceeds the maximum length {max_length} of {type_id}"
    )]
    LengthExceeded {
        type_id: String,
        random_length: usize,
        max_length: usize,
    },

    /// The final name did not satisfy the type's rules
    #[error("Invalid name for {type_id}: '{name}' does not match {pattern}")]
    ValidationFailed {
        type_id: String,
        name: String,
        pattern: String,
    },

    /// Import identifier could not be split into its segments
    #[error("Invalid import id '{id}': {reason}")]
    InvalidImportIdFormat { id: String, reason: String },

    /// Decompose could not reproduce the produced names
    #[error("Could not recover random token for {type_id}: {reason}")]
    InconsistentRecovery { type_id: String, reason: String },

    /// Bundled or supplied catalog is malformed
    #[error("Catalog initialization error: {0}")]
    CatalogInit(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Untyped host input could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for naming operations
pub type NamingResult<T> = Result<T, NamingError>;

impl NamingError {
    /// Type identifier the error was raised for, if any
    pub fn type_id(&self) -> Option<&str> {
        match self {
            Self::UnknownResourceType { type_id }
            | Self::LengthExceeded { type_id, .. }
            | Self::ValidationFailed { type_id, .. }
            | Self::InconsistentRecovery { type_id, .. } => Some(type_id),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for NamingError {
    fn from(err: serde_json::Error) -> Self {
        NamingError::Serialization(err.to_string())
    }
}
