//! Sentence selection and jumping between sentences.

use jyn_core::enums::JudgmentQuestion;
use jyn_core::errors::CoreError;
use jyn_core::navigation::{self, NavigationState};
use jyn_core::responses::{
    SentenceAddedResponse, StepResponse, SuggestionsResponse, ToggleResponse,
};
use jyn_core::{form, selection};

use crate::error::StoreError;
use crate::service::JournalService;
use crate::store::WorksheetStore;

fn check_source(source_question: u8) -> Result<(), CoreError> {
    JudgmentQuestion::from_number(source_question)
        .map(|_| ())
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "source question must be 1 to 6, got {source_question}"
            ))
        })
}

impl<S: WorksheetStore> JournalService<S> {
    pub fn suggestions(&self, id: &str) -> Result<SuggestionsResponse, StoreError> {
        let worksheet = self.load(id)?;
        Ok(SuggestionsResponse {
            worksheet_id: worksheet.id().to_string(),
            suggestions: selection::suggested_sentences(&worksheet),
        })
    }

    /// Add a sentence taken from form question `source_question`.
    pub fn add_sentence(
        &mut self,
        id: &str,
        text: &str,
        source_question: u8,
    ) -> Result<SentenceAddedResponse, StoreError> {
        check_source(source_question)?;
        let text = text.trim();
        if text.is_empty() {
            return Err(CoreError::Validation("sentence must not be blank".into()).into());
        }
        let (worksheet, sentence_id) = self.mutate(id, "add sentence", |w| {
            selection::add_sentence(w, text, source_question)
        })?;
        Ok(SentenceAddedResponse {
            step: StepResponse::new(&worksheet, Some(NavigationState::sentence_selection())),
            sentence_id,
        })
    }

    pub fn add_custom_sentence(
        &mut self,
        id: &str,
        text: &str,
    ) -> Result<SentenceAddedResponse, StoreError> {
        let (worksheet, sentence_id) = self.mutate(id, "add custom sentence", |w| {
            selection::add_custom_sentence(w, text)
        })?;
        Ok(SentenceAddedResponse {
            step: StepResponse::new(&worksheet, Some(NavigationState::sentence_selection())),
            sentence_id,
        })
    }

    pub fn toggle_sentence(
        &mut self,
        id: &str,
        text: &str,
        source_question: u8,
    ) -> Result<ToggleResponse, StoreError> {
        check_source(source_question)?;
        let (worksheet, toggle) = self.mutate(id, "toggle sentence", |w| {
            selection::toggle_sentence(w, text, source_question)
        })?;
        Ok(ToggleResponse {
            step: StepResponse::new(&worksheet, Some(NavigationState::sentence_selection())),
            toggle,
        })
    }

    /// Remove a sentence with all its answers and turnarounds.
    pub fn remove_sentence(
        &mut self,
        id: &str,
        sentence_id: &str,
    ) -> Result<StepResponse, StoreError> {
        let (worksheet, _) =
            self.mutate(id, "remove sentence", |w| w.remove_sentence(sentence_id))?;
        Ok(StepResponse::new(
            &worksheet,
            Some(NavigationState::sentence_selection()),
        ))
    }

    pub fn finish_selection(&self, id: &str) -> Result<StepResponse, StoreError> {
        let worksheet = self.load(id)?;
        let navigation = selection::finish_selection(&worksheet)?;
        Ok(StepResponse::new(&worksheet, Some(navigation)))
    }

    /// Back from sentence selection to the last form step.
    pub fn reopen_form(&self, id: &str) -> Result<StepResponse, StoreError> {
        let worksheet = self.load(id)?;
        let navigation = form::reopen_form(&worksheet)?;
        Ok(StepResponse::new(&worksheet, Some(navigation)))
    }

    /// Jump to a sentence from the sentence list.
    pub fn select_sentence(
        &self,
        id: &str,
        sentence_id: &str,
    ) -> Result<StepResponse, StoreError> {
        let worksheet = self.load(id)?;
        let navigation = navigation::select_sentence(&worksheet, sentence_id)?;
        Ok(StepResponse::new(&worksheet, Some(navigation)))
    }
}
