//! Core error types for jyn.
//!
//! Storage errors live in `jyn-store` and wrap [`CoreError`]. The CLI converges
//! everything on `anyhow`.

use thiserror::Error;

use crate::enums::EntityType;

/// Errors raised by the worksheet model and the progression state machine.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A worksheet, sentence, or turnaround id was not found.
    #[error("Record not found: {entity_type} {id}")]
    MissingRecord { entity_type: String, id: String },

    /// A transition was attempted that is not allowed from the current state,
    /// or whose required answer is missing.
    #[error("Invalid transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// Input failed validation (blank text, last entry removal, ...).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    pub(crate) fn missing(entity_type: EntityType, id: &str) -> Self {
        Self::MissingRecord {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }

    pub(crate) fn invalid_transition(
        entity_type: EntityType,
        id: &str,
        from: impl ToString,
        to: impl ToString,
    ) -> Self {
        Self::InvalidTransition {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}
