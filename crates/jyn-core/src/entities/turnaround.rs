use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::TurnaroundType;
use crate::errors::CoreError;
use crate::ids::{PREFIX_TURNAROUND, generate_id};

/// A reframing of a sentence in one direction, with supporting examples.
///
/// Turnarounds are only mutated through their owning
/// [`SentenceInquiry`](super::SentenceInquiry) so the cached completion
/// counter stays in sync.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Turnaround {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TurnaroundType,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub examples: Vec<String>,
}

impl Turnaround {
    /// Create an empty turnaround of the given type.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Other` if an id cannot be generated.
    pub fn new(kind: TurnaroundType) -> Result<Self, CoreError> {
        Ok(Self {
            id: generate_id(PREFIX_TURNAROUND)?,
            kind,
            text: String::new(),
            examples: Vec::new(),
        })
    }

    /// Non-blank text and at least one example.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.text.trim().is_empty() && !self.examples.is_empty()
    }
}
