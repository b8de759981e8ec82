//! Turnaround stage: turnarounds, examples, leaving the stage.

use jyn_core::enums::TurnaroundType;
use jyn_core::navigation::{self, NavigationState};
use jyn_core::responses::{StageExitResponse, StepResponse, TurnaroundAddedResponse};
use tracing::{info, warn};

use crate::error::StoreError;
use crate::service::JournalService;
use crate::store::WorksheetStore;

impl<S: WorksheetStore> JournalService<S> {
    pub fn add_turnaround(
        &mut self,
        id: &str,
        sentence_id: &str,
        kind: TurnaroundType,
    ) -> Result<TurnaroundAddedResponse, StoreError> {
        let (worksheet, turnaround) = self.mutate(id, "add turnaround", |w| {
            w.sentence_mut(sentence_id)?.add_turnaround(kind).cloned()
        })?;
        Ok(TurnaroundAddedResponse {
            step: StepResponse::new(&worksheet, Some(NavigationState::turnaround(sentence_id))),
            turnaround,
        })
    }

    pub fn set_turnaround_text(
        &mut self,
        id: &str,
        sentence_id: &str,
        turnaround_id: &str,
        text: &str,
    ) -> Result<StepResponse, StoreError> {
        let (worksheet, ()) = self.mutate(id, "turnaround text", |w| {
            w.sentence_mut(sentence_id)?
                .set_turnaround_text(turnaround_id, text)
        })?;
        Ok(StepResponse::new(
            &worksheet,
            Some(NavigationState::turnaround(sentence_id)),
        ))
    }

    pub fn add_example(
        &mut self,
        id: &str,
        sentence_id: &str,
        turnaround_id: &str,
        example: &str,
    ) -> Result<StepResponse, StoreError> {
        let (worksheet, ()) = self.mutate(id, "add example", |w| {
            w.sentence_mut(sentence_id)?
                .add_example(turnaround_id, example)
        })?;
        Ok(StepResponse::new(
            &worksheet,
            Some(NavigationState::turnaround(sentence_id)),
        ))
    }

    pub fn remove_example(
        &mut self,
        id: &str,
        sentence_id: &str,
        turnaround_id: &str,
        index: usize,
    ) -> Result<StepResponse, StoreError> {
        let (worksheet, _) = self.mutate(id, "remove example", |w| {
            w.sentence_mut(sentence_id)?
                .remove_example(turnaround_id, index)
        })?;
        Ok(StepResponse::new(
            &worksheet,
            Some(NavigationState::turnaround(sentence_id)),
        ))
    }

    pub fn remove_turnaround(
        &mut self,
        id: &str,
        sentence_id: &str,
        turnaround_id: &str,
    ) -> Result<StepResponse, StoreError> {
        let (worksheet, _) = self.mutate(id, "remove turnaround", |w| {
            w.sentence_mut(sentence_id)?.remove_turnaround(turnaround_id)
        })?;
        Ok(StepResponse::new(
            &worksheet,
            Some(NavigationState::turnaround(sentence_id)),
        ))
    }

    /// Leave the turnaround stage of a sentence.
    ///
    /// Moves to the next later sentence that still needs work. When there is
    /// none the worksheet is marked completed and saved.
    pub fn finish_turnarounds(
        &mut self,
        id: &str,
        sentence_id: &str,
    ) -> Result<StageExitResponse, StoreError> {
        let (worksheet, exit) = self.mutate(id, "finish turnarounds", |w| {
            navigation::finish_turnarounds(w, sentence_id)
        })?;
        if !exit.gate_met {
            warn!("Sentence {sentence_id} left with fewer than three turnarounds");
        }
        if exit.worksheet_completed {
            info!("Completed worksheet {id}");
        }
        Ok(StageExitResponse {
            step: StepResponse::new(&worksheet, Some(exit.next.clone())),
            exit,
        })
    }

    /// Back from the turnaround stage to question 1.
    pub fn back_to_inquiry(
        &self,
        id: &str,
        sentence_id: &str,
    ) -> Result<StepResponse, StoreError> {
        let worksheet = self.load(id)?;
        let navigation = navigation::back_to_inquiry(&worksheet, sentence_id)?;
        Ok(StepResponse::new(&worksheet, Some(navigation)))
    }
}
