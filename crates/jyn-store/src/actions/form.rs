//! Initial form: entry edits and step navigation.

use jyn_core::enums::JudgmentQuestion;
use jyn_core::form;
use jyn_core::navigation::NavigationState;
use jyn_core::responses::StepResponse;

use crate::error::StoreError;
use crate::service::JournalService;
use crate::store::WorksheetStore;

impl<S: WorksheetStore> JournalService<S> {
    pub fn set_entry(
        &mut self,
        id: &str,
        question: JudgmentQuestion,
        index: usize,
        text: &str,
    ) -> Result<StepResponse, StoreError> {
        let (worksheet, ()) = self.mutate(id, "set entry", |w| w.set_entry(question, index, text))?;
        Ok(StepResponse::new(
            &worksheet,
            Some(NavigationState::initial_form(question.step())),
        ))
    }

    pub fn add_entry(
        &mut self,
        id: &str,
        question: JudgmentQuestion,
    ) -> Result<StepResponse, StoreError> {
        let (worksheet, _) = self.mutate(id, "add entry", |w| Ok(w.add_entry(question)))?;
        Ok(StepResponse::new(
            &worksheet,
            Some(NavigationState::initial_form(question.step())),
        ))
    }

    pub fn remove_entry(
        &mut self,
        id: &str,
        question: JudgmentQuestion,
        index: usize,
    ) -> Result<StepResponse, StoreError> {
        let (worksheet, _) =
            self.mutate(id, "remove entry", |w| w.remove_entry(question, index))?;
        Ok(StepResponse::new(
            &worksheet,
            Some(NavigationState::initial_form(question.step())),
        ))
    }

    /// Leave form `step` forward. Nothing is saved.
    pub fn form_next(&self, id: &str, step: usize) -> Result<StepResponse, StoreError> {
        let worksheet = self.load(id)?;
        let navigation = form::form_next(&worksheet, step)?;
        Ok(StepResponse::new(&worksheet, Some(navigation)))
    }

    /// Leave form `step` backward; from step 0 this is the dashboard.
    pub fn form_back(&self, id: &str, step: usize) -> Result<StepResponse, StoreError> {
        let worksheet = self.load(id)?;
        let navigation = form::form_back(step)?;
        Ok(StepResponse::new(&worksheet, navigation))
    }
}

#[cfg(test)]
mod tests {
    use crate::service::JournalService;
    use crate::store::MemoryStore;
    use jyn_core::enums::{JudgmentQuestion, Language};
    use jyn_core::navigation::NavigationState;
    use pretty_assertions::assert_eq;

    #[test]
    fn entries_are_saved_and_gate_the_step() {
        let mut svc = JournalService::new(MemoryStore::new(), Language::En);
        let id = svc.create_worksheet().unwrap().worksheet_id;

        assert!(svc.form_next(&id, 0).is_err());
        svc.set_entry(&id, JudgmentQuestion::WhoUpsetsYou, 0, "Paul")
            .unwrap();
        let step = svc.form_next(&id, 0).unwrap();
        assert_eq!(step.navigation, Some(NavigationState::initial_form(1)));
    }

    #[test]
    fn add_then_remove_entry() {
        let mut svc = JournalService::new(MemoryStore::new(), Language::En);
        let id = svc.create_worksheet().unwrap().worksheet_id;

        svc.add_entry(&id, JudgmentQuestion::Needs).unwrap();
        assert_eq!(svc.load(&id).unwrap().entries(JudgmentQuestion::Needs).len(), 2);
        svc.remove_entry(&id, JudgmentQuestion::Needs, 1).unwrap();
        assert!(svc.remove_entry(&id, JudgmentQuestion::Needs, 0).is_err());
        assert_eq!(svc.load(&id).unwrap().entries(JudgmentQuestion::Needs).len(), 1);
    }

    #[test]
    fn back_from_first_step_is_dashboard() {
        let mut svc = JournalService::new(MemoryStore::new(), Language::En);
        let id = svc.create_worksheet().unwrap().worksheet_id;
        assert_eq!(svc.form_back(&id, 0).unwrap().navigation, None);
        assert_eq!(
            svc.form_back(&id, 2).unwrap().navigation,
            Some(NavigationState::initial_form(1))
        );
    }
}
