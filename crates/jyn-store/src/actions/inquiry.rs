//! Inquiry stage: answers, sub-answers, question navigation.

use jyn_core::entities::{Answer3Slot, Answer4Slot};
use jyn_core::enums::YesNo;
use jyn_core::navigation::NavigationState;
use jyn_core::responses::StepResponse;
use jyn_core::sequencer;

use crate::error::StoreError;
use crate::service::JournalService;
use crate::store::WorksheetStore;

/// Question index the deep-dive slots of question 3 belong to.
const Q3_INDEX: usize = 2;
/// Question index the deep-dive slots of question 4 belong to.
const Q4_INDEX: usize = 3;

impl<S: WorksheetStore> JournalService<S> {
    /// Store a free-text answer. The position stays on the question.
    pub fn answer(
        &mut self,
        id: &str,
        sentence_id: &str,
        index: usize,
        text: &str,
    ) -> Result<StepResponse, StoreError> {
        let (worksheet, navigation) = self.mutate(id, "answer", |w| {
            sequencer::record_answer(w, sentence_id, index, text)
        })?;
        Ok(StepResponse::new(&worksheet, Some(navigation)))
    }

    /// Store a Yes/No answer in the configured language and advance.
    pub fn answer_yes_no(
        &mut self,
        id: &str,
        sentence_id: &str,
        index: usize,
        answer: YesNo,
    ) -> Result<StepResponse, StoreError> {
        let language = self.language();
        let (worksheet, navigation) = self.mutate(id, "yes/no answer", |w| {
            sequencer::answer_yes_no(w, sentence_id, index, answer, language)
        })?;
        Ok(StepResponse::new(&worksheet, Some(navigation)))
    }

    pub fn set_answer3_sub(
        &mut self,
        id: &str,
        sentence_id: &str,
        slot: Answer3Slot,
        text: &str,
    ) -> Result<StepResponse, StoreError> {
        let (worksheet, ()) = self.mutate(id, "question 3 sub-answer", |w| {
            w.sentence_mut(sentence_id)?.set_answer3_sub(slot, text);
            Ok(())
        })?;
        Ok(StepResponse::new(
            &worksheet,
            Some(NavigationState::inquiry(sentence_id, Q3_INDEX)),
        ))
    }

    pub fn set_answer4_sub(
        &mut self,
        id: &str,
        sentence_id: &str,
        slot: Answer4Slot,
        text: &str,
    ) -> Result<StepResponse, StoreError> {
        let (worksheet, ()) = self.mutate(id, "question 4 sub-answer", |w| {
            w.sentence_mut(sentence_id)?.set_answer4_sub(slot, text);
            Ok(())
        })?;
        Ok(StepResponse::new(
            &worksheet,
            Some(NavigationState::inquiry(sentence_id, Q4_INDEX)),
        ))
    }

    /// Advance from question `index`; after question 4 this is the
    /// turnaround stage. Nothing is saved.
    pub fn next_question(
        &self,
        id: &str,
        sentence_id: &str,
        index: usize,
    ) -> Result<StepResponse, StoreError> {
        let worksheet = self.load(id)?;
        let navigation = sequencer::next_question(&worksheet, sentence_id, index)?;
        Ok(StepResponse::new(&worksheet, Some(navigation)))
    }

    pub fn previous_question(
        &self,
        id: &str,
        sentence_id: &str,
        index: usize,
    ) -> Result<StepResponse, StoreError> {
        let worksheet = self.load(id)?;
        let navigation = sequencer::previous_question(&worksheet, sentence_id, index)?;
        Ok(StepResponse::new(&worksheet, Some(navigation)))
    }
}
