//! Store error types for jyn-store.

use jyn_core::enums::EntityType;
use jyn_core::errors::CoreError;
use thiserror::Error;

/// Errors from loading, saving, or mutating worksheets.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the worksheet document failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON or a record could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The document was written by a newer version.
    #[error("Unsupported document version: {0}")]
    UnsupportedVersion(u64),

    /// A record could not be upgraded to the current version.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Model error raised while applying an action.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoreError {
    pub(crate) fn missing_worksheet(id: &str) -> Self {
        Self::Core(CoreError::MissingRecord {
            entity_type: EntityType::Worksheet.to_string(),
            id: id.to_string(),
        })
    }

    /// Whether the error reports an unknown worksheet, sentence, or turnaround.
    #[must_use]
    pub const fn is_missing_record(&self) -> bool {
        matches!(self, Self::Core(CoreError::MissingRecord { .. }))
    }
}
