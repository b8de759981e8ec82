//! Inquiry step sequencer.
//!
//! Walks the four questions of one sentence:
//!
//! ```text
//! q1 ─yes→ q2 → q3 → q4 → done ⇒ turnaround stage
//! q1 ─no──────→ q3
//! ```
//!
//! Moving forward needs a non-blank answer on the active question. Moving
//! back is positional and always lands one index lower.

use crate::entities::{SentenceInquiry, Worksheet};
use crate::enums::{EntityType, InquiryStep, Language, Stage, YesNo};
use crate::errors::CoreError;
use crate::navigation::{NavigationState, transition};
use crate::progress::is_filled;

/// Cursor over the inquiry questions of one sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InquirySequencer {
    step: InquiryStep,
}

impl InquirySequencer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            step: InquiryStep::Q1,
        }
    }

    /// Cursor at a 0-based question index.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `index` is not 0-3.
    pub fn at(index: usize) -> Result<Self, CoreError> {
        InquiryStep::from_index(index)
            .map(|step| Self { step })
            .ok_or_else(|| CoreError::Validation(format!("no inquiry question at index {index}")))
    }

    #[must_use]
    pub const fn step(self) -> InquiryStep {
        self.step
    }

    /// The step that follows the current one for `sentence`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` when the current question has no
    /// non-blank answer or the inquiry is already done.
    pub fn next_step(self, sentence: &SentenceInquiry) -> Result<InquiryStep, CoreError> {
        let next = match self.step {
            InquiryStep::Q1 if sentence.skips_second_question() => InquiryStep::Q3,
            InquiryStep::Q1 => InquiryStep::Q2,
            InquiryStep::Q2 => InquiryStep::Q3,
            InquiryStep::Q3 => InquiryStep::Q4,
            InquiryStep::Q4 | InquiryStep::Done => InquiryStep::Done,
        };
        let answered = is_filled(sentence.answer(self.step));
        if !answered || !self.step.can_transition_to(next) {
            return Err(CoreError::invalid_transition(
                EntityType::Sentence,
                sentence.id(),
                self.step,
                next,
            ));
        }
        Ok(next)
    }

    /// Move forward. See [`Self::next_step`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::next_step`].
    pub fn advance(&mut self, sentence: &SentenceInquiry) -> Result<InquiryStep, CoreError> {
        self.step = self.next_step(sentence)?;
        Ok(self.step)
    }

    /// Move back one position.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` on question 1.
    pub fn back(&mut self, sentence_id: &str) -> Result<InquiryStep, CoreError> {
        let previous = self.step.previous().ok_or_else(|| {
            CoreError::invalid_transition(EntityType::Sentence, sentence_id, self.step, "previous")
        })?;
        self.step = previous;
        Ok(previous)
    }

    /// Navigation state for the current position of `sentence_id`.
    #[must_use]
    pub fn navigation(self, sentence_id: &str) -> NavigationState {
        match self.step.index() {
            Some(index) => NavigationState::inquiry(sentence_id, index),
            None => NavigationState::turnaround(sentence_id),
        }
    }
}

impl Default for InquirySequencer {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Worksheet-level operations
// ---------------------------------------------------------------------------

/// Store the primary answer of question `index`. The position is unchanged.
///
/// # Errors
///
/// Returns `CoreError::MissingRecord` for an unknown sentence and
/// `CoreError::Validation` for an out-of-range index.
pub fn record_answer(
    worksheet: &mut Worksheet,
    sentence_id: &str,
    index: usize,
    text: impl Into<String>,
) -> Result<NavigationState, CoreError> {
    let sequencer = InquirySequencer::at(index)?;
    worksheet
        .sentence_mut(sentence_id)?
        .set_answer(sequencer.step(), text)?;
    Ok(sequencer.navigation(sentence_id))
}

/// Store a Yes/No answer as the localized label and advance.
///
/// # Errors
///
/// Returns `CoreError::Validation` when question `index` is not a Yes/No
/// question, plus the errors of [`record_answer`].
pub fn answer_yes_no(
    worksheet: &mut Worksheet,
    sentence_id: &str,
    index: usize,
    answer: YesNo,
    language: Language,
) -> Result<NavigationState, CoreError> {
    let sequencer = InquirySequencer::at(index)?;
    if !sequencer.step().is_yes_no() {
        return Err(CoreError::Validation(format!(
            "question {} is not a yes/no question",
            index + 1
        )));
    }
    record_answer(worksheet, sentence_id, index, answer.label(language))?;
    next_question(worksheet, sentence_id, index)
}

/// Advance from question `index`. Past question 4 this enters the
/// turnaround stage of the same sentence.
///
/// # Errors
///
/// Returns `CoreError::InvalidTransition` when the question is unanswered,
/// `CoreError::MissingRecord` for an unknown sentence.
pub fn next_question(
    worksheet: &Worksheet,
    sentence_id: &str,
    index: usize,
) -> Result<NavigationState, CoreError> {
    let sentence = worksheet
        .sentence(sentence_id)
        .ok_or_else(|| CoreError::missing(EntityType::Sentence, sentence_id))?;
    let mut sequencer = InquirySequencer::at(index)?;
    sequencer.advance(sentence)?;
    transition(worksheet.id(), Stage::Inquiry, sequencer.navigation(sentence_id))
}

/// Go back from question `index`.
///
/// # Errors
///
/// Returns `CoreError::InvalidTransition` on question 1,
/// `CoreError::MissingRecord` for an unknown sentence.
pub fn previous_question(
    worksheet: &Worksheet,
    sentence_id: &str,
    index: usize,
) -> Result<NavigationState, CoreError> {
    if worksheet.sentence(sentence_id).is_none() {
        return Err(CoreError::missing(EntityType::Sentence, sentence_id));
    }
    let mut sequencer = InquirySequencer::at(index)?;
    sequencer.back(sentence_id)?;
    Ok(sequencer.navigation(sentence_id))
}
