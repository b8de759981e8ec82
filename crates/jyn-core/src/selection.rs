//! Sentence selection: turning form entries into inquiry sentences.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{CUSTOM_SOURCE, SentenceInquiry, Worksheet};
use crate::enums::{EntityType, JudgmentQuestion, Stage};
use crate::errors::CoreError;
use crate::navigation::{NavigationState, transition};

/// A form entry offered as a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedSentence {
    pub text: String,
    pub source_question: u8,
    /// A sentence with this text is already selected.
    pub selected: bool,
}

/// Every non-blank entry, trimmed, in question then entry order.
#[must_use]
pub fn suggested_sentences(worksheet: &Worksheet) -> Vec<SuggestedSentence> {
    JudgmentQuestion::ALL
        .into_iter()
        .flat_map(|question| {
            worksheet
                .entries(question)
                .iter()
                .map(|entry| entry.trim())
                .filter(|entry| !entry.is_empty())
                .map(move |entry| (question.number(), entry))
        })
        .map(|(source_question, text)| SuggestedSentence {
            text: text.to_string(),
            source_question,
            selected: worksheet.has_sentence_text(text),
        })
        .collect()
}

/// Append a sentence unless one with the same text exists.
///
/// Returns the id of the new sentence, `None` when nothing was added.
///
/// # Errors
///
/// Returns `CoreError::Other` if an id cannot be generated.
pub fn add_sentence(
    worksheet: &mut Worksheet,
    text: &str,
    source_question: u8,
) -> Result<Option<String>, CoreError> {
    if worksheet.has_sentence_text(text) {
        return Ok(None);
    }
    let sentence = SentenceInquiry::new(text, source_question)?;
    let id = sentence.id().to_string();
    worksheet.push_sentence(sentence);
    Ok(Some(id))
}

/// Add a user-written sentence with source question 0.
///
/// # Errors
///
/// Returns `CoreError::Validation` for blank text.
pub fn add_custom_sentence(
    worksheet: &mut Worksheet,
    text: &str,
) -> Result<Option<String>, CoreError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CoreError::Validation("custom sentence must not be blank".into()));
    }
    add_sentence(worksheet, text, CUSTOM_SOURCE)
}

/// Whether a toggle added or removed a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Toggle {
    Added { sentence_id: String },
    Removed { sentence_id: String },
}

/// Remove the sentence with `text` if selected, add it otherwise.
///
/// The text is trimmed first, like the texts [`suggested_sentences`] offers.
///
/// # Errors
///
/// Returns `CoreError::Validation` for blank text and `CoreError::Other` if an
/// id cannot be generated.
pub fn toggle_sentence(
    worksheet: &mut Worksheet,
    text: &str,
    source_question: u8,
) -> Result<Toggle, CoreError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CoreError::Validation("sentence must not be blank".into()));
    }
    let existing = worksheet
        .sentences()
        .iter()
        .find(|s| s.text() == text)
        .map(|s| s.id().to_string());
    if let Some(sentence_id) = existing {
        worksheet.remove_sentence(&sentence_id)?;
        return Ok(Toggle::Removed { sentence_id });
    }
    let sentence = SentenceInquiry::new(text, source_question)?;
    let sentence_id = sentence.id().to_string();
    worksheet.push_sentence(sentence);
    Ok(Toggle::Added { sentence_id })
}

/// Leave selection for the inquiry of the first sentence.
///
/// # Errors
///
/// Returns `CoreError::InvalidTransition` when no sentence is selected.
pub fn finish_selection(worksheet: &Worksheet) -> Result<NavigationState, CoreError> {
    let first = worksheet.sentences().first().ok_or_else(|| {
        CoreError::invalid_transition(
            EntityType::Worksheet,
            worksheet.id(),
            Stage::SentenceSelection,
            Stage::Inquiry,
        )
    })?;
    transition(
        worksheet.id(),
        Stage::SentenceSelection,
        NavigationState::inquiry(first.id(), 0),
    )
}
