//! Step navigation of the initial six-question form.

use crate::entities::Worksheet;
use crate::enums::{EntityType, JudgmentQuestion, Stage};
use crate::errors::CoreError;
use crate::navigation::{NavigationState, transition};

fn question_at(step: usize) -> Result<JudgmentQuestion, CoreError> {
    u8::try_from(step + 1)
        .ok()
        .and_then(JudgmentQuestion::from_number)
        .ok_or_else(|| CoreError::Validation(format!("no form step {step}")))
}

/// Advance from form `step`. The last step enters sentence selection.
///
/// # Errors
///
/// Returns `CoreError::InvalidTransition` if the step's list has no
/// non-blank entry and `CoreError::Validation` for an unknown step.
pub fn form_next(worksheet: &Worksheet, step: usize) -> Result<NavigationState, CoreError> {
    let question = question_at(step)?;
    if !worksheet.is_question_filled(question) {
        return Err(CoreError::invalid_transition(
            EntityType::Worksheet,
            worksheet.id(),
            format!("step {step}"),
            format!("step {}", step + 1),
        ));
    }
    match question_at(step + 1) {
        Ok(next) => Ok(NavigationState::initial_form(next.step())),
        Err(_) => transition(
            worksheet.id(),
            Stage::InitialForm,
            NavigationState::sentence_selection(),
        ),
    }
}

/// Go back from form `step`. `None` means the dashboard.
///
/// # Errors
///
/// Returns `CoreError::Validation` for an unknown step.
pub fn form_back(step: usize) -> Result<Option<NavigationState>, CoreError> {
    question_at(step)?;
    Ok(step.checked_sub(1).map(NavigationState::initial_form))
}

/// Return from sentence selection to the last form step.
///
/// # Errors
///
/// Returns `CoreError::InvalidTransition` if the stage table forbids it.
pub fn reopen_form(worksheet: &Worksheet) -> Result<NavigationState, CoreError> {
    transition(
        worksheet.id(),
        Stage::SentenceSelection,
        NavigationState::initial_form(JudgmentQuestion::NeverAgain.step()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn filled() -> Worksheet {
        let mut ws = Worksheet::blank(Utc::now()).unwrap();
        for question in JudgmentQuestion::ALL {
            ws.set_entry(question, 0, format!("entry {}", question.number()))
                .unwrap();
        }
        ws
    }

    #[test]
    fn blank_step_cannot_advance() {
        let ws = Worksheet::blank(Utc::now()).unwrap();
        assert!(matches!(
            form_next(&ws, 0),
            Err(CoreError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn filled_steps_walk_to_selection() {
        let ws = filled();
        for step in 0..5 {
            assert_eq!(
                form_next(&ws, step).unwrap(),
                NavigationState::initial_form(step + 1)
            );
        }
        assert_eq!(
            form_next(&ws, 5).unwrap(),
            NavigationState::sentence_selection()
        );
    }

    #[test]
    fn unknown_step_is_rejected() {
        let ws = filled();
        assert!(matches!(form_next(&ws, 6), Err(CoreError::Validation(_))));
        assert!(form_back(9).is_err());
    }

    #[test]
    fn back_from_first_step_leaves_the_form() {
        assert_eq!(form_back(0).unwrap(), None);
        assert_eq!(form_back(3).unwrap(), Some(NavigationState::initial_form(2)));
    }

    #[test]
    fn selection_returns_to_last_step() {
        let ws = filled();
        assert_eq!(reopen_form(&ws).unwrap(), NavigationState::initial_form(5));
    }
}
