//! Entity structs for worksheet records.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation. Field names serialize as camelCase to
//! match the persisted record shape.

mod sentence;
mod sub_questions;
mod turnaround;
mod worksheet;

pub use sentence::{CUSTOM_SOURCE, SentenceInquiry};
pub use sub_questions::{
    Answer3Slot, Answer3SubQuestions, Answer4Slot, Answer4SubQuestions, SubQuestionCategory,
};
pub use turnaround::Turnaround;
pub use worksheet::Worksheet;
