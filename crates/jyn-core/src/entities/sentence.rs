use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::sub_questions::{Answer3Slot, Answer3SubQuestions, Answer4Slot, Answer4SubQuestions};
use super::turnaround::Turnaround;
use crate::enums::{EntityType, InquiryStep, TurnaroundType, YesNo};
use crate::errors::CoreError;
use crate::ids::{PREFIX_SENTENCE, generate_id};
use crate::progress::{question_completion, turnaround_completion};

/// Source question number used for sentences typed in by the user.
pub const CUSTOM_SOURCE: u8 = 0;

/// A single judgment selected for inquiry.
///
/// Answers and turnarounds are private: every mutation goes through a method
/// that recomputes `completed_questions` / `completed_turnarounds`, so the
/// cached counters always match the record content.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SentenceInquiry {
    id: String,
    text: String,
    #[serde(default)]
    source_question: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    answer1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    answer2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    answer3: Option<String>,
    #[serde(default)]
    answer3_sub_questions: Answer3SubQuestions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    answer4: Option<String>,
    #[serde(default)]
    answer4_sub_questions: Answer4SubQuestions,
    #[serde(default)]
    turnarounds: Vec<Turnaround>,
    #[serde(default)]
    completed_questions: u8,
    #[serde(default)]
    completed_turnarounds: u32,
}

impl SentenceInquiry {
    /// Create a sentence with no answers and no turnarounds.
    ///
    /// `source_question` is 1-6 for sentences picked from the worksheet and
    /// [`CUSTOM_SOURCE`] for custom ones.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Other` if an id cannot be generated.
    pub fn new(text: impl Into<String>, source_question: u8) -> Result<Self, CoreError> {
        Ok(Self {
            id: generate_id(PREFIX_SENTENCE)?,
            text: text.into(),
            source_question,
            answer1: None,
            answer2: None,
            answer3: None,
            answer3_sub_questions: Answer3SubQuestions::default(),
            answer4: None,
            answer4_sub_questions: Answer4SubQuestions::default(),
            turnarounds: Vec::new(),
            completed_questions: 0,
            completed_turnarounds: 0,
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn source_question(&self) -> u8 {
        self.source_question
    }

    /// Primary answer of an inquiry question. `Done` has none.
    #[must_use]
    pub fn answer(&self, step: InquiryStep) -> Option<&str> {
        match step {
            InquiryStep::Q1 => self.answer1.as_deref(),
            InquiryStep::Q2 => self.answer2.as_deref(),
            InquiryStep::Q3 => self.answer3.as_deref(),
            InquiryStep::Q4 => self.answer4.as_deref(),
            InquiryStep::Done => None,
        }
    }

    /// The four primary answers in question order.
    #[must_use]
    pub fn answers(&self) -> [Option<&str>; 4] {
        [
            self.answer1.as_deref(),
            self.answer2.as_deref(),
            self.answer3.as_deref(),
            self.answer4.as_deref(),
        ]
    }

    /// Whether question 1 was answered "No", which skips question 2.
    #[must_use]
    pub fn skips_second_question(&self) -> bool {
        self.answer1.as_deref().and_then(YesNo::parse) == Some(YesNo::No)
    }

    #[must_use]
    pub const fn answer3_sub_questions(&self) -> &Answer3SubQuestions {
        &self.answer3_sub_questions
    }

    #[must_use]
    pub const fn answer4_sub_questions(&self) -> &Answer4SubQuestions {
        &self.answer4_sub_questions
    }

    #[must_use]
    pub fn turnarounds(&self) -> &[Turnaround] {
        &self.turnarounds
    }

    #[must_use]
    pub fn turnaround(&self, id: &str) -> Option<&Turnaround> {
        self.turnarounds.iter().find(|t| t.id == id)
    }

    /// Whether a turnaround of `kind` already exists. The presentation offers
    /// an "add" action per type only while this is false.
    #[must_use]
    pub fn has_turnaround_of(&self, kind: TurnaroundType) -> bool {
        self.turnarounds.iter().any(|t| t.kind == kind)
    }

    #[must_use]
    pub const fn completed_questions(&self) -> u8 {
        self.completed_questions
    }

    #[must_use]
    pub const fn completed_turnarounds(&self) -> u32 {
        self.completed_turnarounds
    }

    /// Unanswered questions remain or fewer than 3 turnarounds are complete.
    #[must_use]
    pub const fn needs_work(&self) -> bool {
        self.completed_questions < 4 || self.completed_turnarounds < 3
    }

    /// Set the primary answer of an inquiry question.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for `InquiryStep::Done`.
    pub fn set_answer(
        &mut self,
        step: InquiryStep,
        value: impl Into<String>,
    ) -> Result<(), CoreError> {
        let slot = match step {
            InquiryStep::Q1 => &mut self.answer1,
            InquiryStep::Q2 => &mut self.answer2,
            InquiryStep::Q3 => &mut self.answer3,
            InquiryStep::Q4 => &mut self.answer4,
            InquiryStep::Done => {
                return Err(CoreError::Validation(
                    "the finished inquiry has no answer".into(),
                ));
            }
        };
        *slot = Some(value.into());
        self.refresh_progress();
        Ok(())
    }

    pub fn set_answer3_sub(&mut self, slot: Answer3Slot, value: impl Into<String>) {
        self.answer3_sub_questions.set(slot, value);
    }

    pub fn set_answer4_sub(&mut self, slot: Answer4Slot, value: impl Into<String>) {
        self.answer4_sub_questions.set(slot, value);
    }

    /// Append an empty turnaround of `kind` and return it.
    ///
    /// More than one turnaround of the same type is allowed.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Other` if an id cannot be generated.
    pub fn add_turnaround(&mut self, kind: TurnaroundType) -> Result<&Turnaround, CoreError> {
        self.turnarounds.push(Turnaround::new(kind)?);
        self.refresh_progress();
        let index = self.turnarounds.len() - 1;
        Ok(&self.turnarounds[index])
    }

    /// # Errors
    ///
    /// Returns `CoreError::MissingRecord` if the turnaround does not exist.
    pub fn set_turnaround_text(
        &mut self,
        turnaround_id: &str,
        text: impl Into<String>,
    ) -> Result<(), CoreError> {
        self.turnaround_mut(turnaround_id)?.text = text.into();
        self.refresh_progress();
        Ok(())
    }

    /// Append a trimmed example to a turnaround.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a blank example and
    /// `CoreError::MissingRecord` if the turnaround does not exist.
    pub fn add_example(&mut self, turnaround_id: &str, example: &str) -> Result<(), CoreError> {
        let example = example.trim();
        if example.is_empty() {
            return Err(CoreError::Validation("example must not be blank".into()));
        }
        self.turnaround_mut(turnaround_id)?
            .examples
            .push(example.to_string());
        self.refresh_progress();
        Ok(())
    }

    /// Remove the example at `index` and return it.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissingRecord` if the turnaround does not exist and
    /// `CoreError::Validation` if `index` is out of range.
    pub fn remove_example(
        &mut self,
        turnaround_id: &str,
        index: usize,
    ) -> Result<String, CoreError> {
        let turnaround = self.turnaround_mut(turnaround_id)?;
        if index >= turnaround.examples.len() {
            return Err(CoreError::Validation(format!(
                "turnaround {turnaround_id} has no example at index {index}"
            )));
        }
        let removed = turnaround.examples.remove(index);
        self.refresh_progress();
        Ok(removed)
    }

    /// # Errors
    ///
    /// Returns `CoreError::MissingRecord` if the turnaround does not exist.
    pub fn remove_turnaround(&mut self, turnaround_id: &str) -> Result<Turnaround, CoreError> {
        let index = self
            .turnarounds
            .iter()
            .position(|t| t.id == turnaround_id)
            .ok_or_else(|| CoreError::missing(EntityType::Turnaround, turnaround_id))?;
        let removed = self.turnarounds.remove(index);
        self.refresh_progress();
        Ok(removed)
    }

    /// Recompute both cached counters from the current content.
    pub fn refresh_progress(&mut self) {
        self.completed_questions = question_completion(self.answers());
        self.completed_turnarounds = turnaround_completion(&self.turnarounds);
    }

    fn turnaround_mut(&mut self, turnaround_id: &str) -> Result<&mut Turnaround, CoreError> {
        self.turnarounds
            .iter_mut()
            .find(|t| t.id == turnaround_id)
            .ok_or_else(|| CoreError::missing(EntityType::Turnaround, turnaround_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sentence() -> SentenceInquiry {
        SentenceInquiry::new("Paul should listen to me", 1).unwrap()
    }

    #[test]
    fn new_sentence_is_empty() {
        let s = sentence();
        assert!(s.id().starts_with("snt-"));
        assert_eq!(s.text(), "Paul should listen to me");
        assert_eq!(s.source_question(), 1);
        assert_eq!(s.completed_questions(), 0);
        assert_eq!(s.completed_turnarounds(), 0);
        assert!(s.needs_work());
    }

    #[test]
    fn answers_recompute_question_counter() {
        let mut s = sentence();
        s.set_answer(InquiryStep::Q1, "YES").unwrap();
        s.set_answer(InquiryStep::Q3, "  ").unwrap();
        assert_eq!(s.completed_questions(), 1);
        s.set_answer(InquiryStep::Q3, "I get tense").unwrap();
        assert_eq!(s.completed_questions(), 2);
        s.set_answer(InquiryStep::Q1, "").unwrap();
        assert_eq!(s.completed_questions(), 1);
    }

    #[test]
    fn done_has_no_answer_slot() {
        let mut s = sentence();
        assert!(matches!(
            s.set_answer(InquiryStep::Done, "x"),
            Err(CoreError::Validation(_))
        ));
        assert_eq!(s.answer(InquiryStep::Done), None);
    }

    #[test]
    fn turnaround_counter_needs_text_and_example() {
        let mut s = sentence();
        let id = s.add_turnaround(TurnaroundType::ToSelf).unwrap().id.clone();
        assert_eq!(s.completed_turnarounds(), 0);

        s.add_example(&id, "I don't listen to myself").unwrap();
        assert_eq!(s.completed_turnarounds(), 0, "text still empty");

        s.set_turnaround_text(&id, "I should listen to me").unwrap();
        assert_eq!(s.completed_turnarounds(), 1);

        s.remove_example(&id, 0).unwrap();
        assert_eq!(s.completed_turnarounds(), 0);
    }

    #[test]
    fn blank_example_is_rejected() {
        let mut s = sentence();
        let id = s.add_turnaround(TurnaroundType::ToOther).unwrap().id.clone();
        assert!(matches!(
            s.add_example(&id, "   "),
            Err(CoreError::Validation(_))
        ));
        s.add_example(&id, "  trimmed  ").unwrap();
        assert_eq!(s.turnaround(&id).unwrap().examples, vec!["trimmed".to_string()]);
    }

    #[test]
    fn unknown_turnaround_is_missing_record() {
        let mut s = sentence();
        let err = s.set_turnaround_text("trn-00000000", "x").unwrap_err();
        assert!(matches!(err, CoreError::MissingRecord { .. }));
        let err = s.remove_turnaround("trn-00000000").unwrap_err();
        assert!(matches!(err, CoreError::MissingRecord { .. }));
    }

    #[test]
    fn removing_turnaround_updates_counter() {
        let mut s = sentence();
        let id = s.add_turnaround(TurnaroundType::ToOpposite).unwrap().id.clone();
        s.set_turnaround_text(&id, "Paul shouldn't listen to me").unwrap();
        s.add_example(&id, "he has his own life").unwrap();
        assert_eq!(s.completed_turnarounds(), 1);

        let removed = s.remove_turnaround(&id).unwrap();
        assert_eq!(removed.id, id);
        assert_eq!(s.completed_turnarounds(), 0);
        assert!(!s.has_turnaround_of(TurnaroundType::ToOpposite));
    }

    #[test]
    fn skip_detection_uses_stored_label() {
        let mut s = sentence();
        assert!(!s.skips_second_question());
        s.set_answer(InquiryStep::Q1, "NEIN").unwrap();
        assert!(s.skips_second_question());
        s.set_answer(InquiryStep::Q1, "YES").unwrap();
        assert!(!s.skips_second_question());
    }

    #[test]
    fn sub_answers_do_not_change_counters() {
        let mut s = sentence();
        s.set_answer3_sub(Answer3Slot::Emotions, "fear");
        s.set_answer4_sub(Answer4Slot::BodyFeeling, "light");
        assert_eq!(s.completed_questions(), 0);
        assert_eq!(s.answer3_sub_questions().answered(), 1);
        assert_eq!(s.answer4_sub_questions().answered(), 1);
    }
}
