use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::sentence::SentenceInquiry;
use crate::enums::{EntityType, JudgmentQuestion, WorksheetStatus};
use crate::errors::CoreError;
use crate::ids::{PREFIX_WORKSHEET, generate_id};
use crate::progress::is_filled;

/// One Judge-Your-Neighbor exercise.
///
/// Owns the six question lists and the sentences selected from them. The
/// status only moves to `completed` through cross-sentence advancement.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Worksheet {
    id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default)]
    status: WorksheetStatus,
    question1: Vec<String>,
    question2: Vec<String>,
    question3: Vec<String>,
    question4: Vec<String>,
    question5: Vec<String>,
    question6: Vec<String>,
    #[serde(default)]
    sentences: Vec<SentenceInquiry>,
}

impl Worksheet {
    /// A fresh worksheet: every question list holds one empty entry.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Other` if an id cannot be generated.
    pub fn blank(now: DateTime<Utc>) -> Result<Self, CoreError> {
        let empty = || vec![String::new()];
        Ok(Self {
            id: generate_id(PREFIX_WORKSHEET)?,
            created_at: now,
            updated_at: now,
            status: WorksheetStatus::InProgress,
            question1: empty(),
            question2: empty(),
            question3: empty(),
            question4: empty(),
            question5: empty(),
            question6: empty(),
            sentences: Vec::new(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    #[must_use]
    pub const fn status(&self) -> WorksheetStatus {
        self.status
    }

    /// Stamp the modification time. Called by stores on every save.
    pub const fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }

    // --- Question lists ---

    #[must_use]
    pub fn entries(&self, question: JudgmentQuestion) -> &[String] {
        match question {
            JudgmentQuestion::WhoUpsetsYou => &self.question1,
            JudgmentQuestion::HowShouldTheyChange => &self.question2,
            JudgmentQuestion::Advice => &self.question3,
            JudgmentQuestion::Needs => &self.question4,
            JudgmentQuestion::Opinion => &self.question5,
            JudgmentQuestion::NeverAgain => &self.question6,
        }
    }

    const fn entries_mut(&mut self, question: JudgmentQuestion) -> &mut Vec<String> {
        match question {
            JudgmentQuestion::WhoUpsetsYou => &mut self.question1,
            JudgmentQuestion::HowShouldTheyChange => &mut self.question2,
            JudgmentQuestion::Advice => &mut self.question3,
            JudgmentQuestion::Needs => &mut self.question4,
            JudgmentQuestion::Opinion => &mut self.question5,
            JudgmentQuestion::NeverAgain => &mut self.question6,
        }
    }

    /// Overwrite the entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `index` is out of range.
    pub fn set_entry(
        &mut self,
        question: JudgmentQuestion,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), CoreError> {
        let entry = self.entries_mut(question).get_mut(index).ok_or_else(|| {
            CoreError::Validation(format!("question {} has no entry {index}", question.number()))
        })?;
        *entry = value.into();
        Ok(())
    }

    /// Append an empty entry and return its index.
    pub fn add_entry(&mut self, question: JudgmentQuestion) -> usize {
        let entries = self.entries_mut(question);
        entries.push(String::new());
        entries.len() - 1
    }

    /// Remove the entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `index` is out of range or the entry
    /// is the last one of its list.
    pub fn remove_entry(
        &mut self,
        question: JudgmentQuestion,
        index: usize,
    ) -> Result<String, CoreError> {
        let entries = self.entries_mut(question);
        if entries.len() <= 1 {
            return Err(CoreError::Validation(format!(
                "question {} must keep at least one entry",
                question.number()
            )));
        }
        if index >= entries.len() {
            return Err(CoreError::Validation(format!(
                "question {} has no entry {index}",
                question.number()
            )));
        }
        Ok(entries.remove(index))
    }

    /// At least one entry is non-blank.
    #[must_use]
    pub fn is_question_filled(&self, question: JudgmentQuestion) -> bool {
        self.entries(question).iter().any(|e| is_filled(Some(e.as_str())))
    }

    // --- Sentences ---

    #[must_use]
    pub fn sentences(&self) -> &[SentenceInquiry] {
        &self.sentences
    }

    #[must_use]
    pub fn sentence(&self, sentence_id: &str) -> Option<&SentenceInquiry> {
        self.sentences.iter().find(|s| s.id() == sentence_id)
    }

    /// # Errors
    ///
    /// Returns `CoreError::MissingRecord` if no sentence has `sentence_id`.
    pub fn sentence_mut(&mut self, sentence_id: &str) -> Result<&mut SentenceInquiry, CoreError> {
        self.sentences
            .iter_mut()
            .find(|s| s.id() == sentence_id)
            .ok_or_else(|| CoreError::missing(EntityType::Sentence, sentence_id))
    }

    pub(crate) fn sentence_position(&self, sentence_id: &str) -> Option<usize> {
        self.sentences.iter().position(|s| s.id() == sentence_id)
    }

    #[must_use]
    pub fn has_sentence_text(&self, text: &str) -> bool {
        self.sentences.iter().any(|s| s.text() == text)
    }

    pub(crate) fn push_sentence(&mut self, sentence: SentenceInquiry) {
        self.sentences.push(sentence);
    }

    /// Remove a sentence together with its answers and turnarounds.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissingRecord` if no sentence has `sentence_id`.
    pub fn remove_sentence(&mut self, sentence_id: &str) -> Result<SentenceInquiry, CoreError> {
        let index = self
            .sentence_position(sentence_id)
            .ok_or_else(|| CoreError::missing(EntityType::Sentence, sentence_id))?;
        Ok(self.sentences.remove(index))
    }

    /// Recompute every sentence's cached counters. Used after loading records
    /// written by older versions.
    pub fn refresh_progress(&mut self) {
        for sentence in &mut self.sentences {
            sentence.refresh_progress();
        }
    }

    pub(crate) fn mark_completed(&mut self) -> Result<(), CoreError> {
        if self.status == WorksheetStatus::Completed {
            return Ok(());
        }
        if !self.status.can_transition_to(WorksheetStatus::Completed) {
            return Err(CoreError::invalid_transition(
                EntityType::Worksheet,
                &self.id,
                self.status,
                WorksheetStatus::Completed,
            ));
        }
        self.status = WorksheetStatus::Completed;
        Ok(())
    }
}
