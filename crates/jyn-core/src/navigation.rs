//! Stage resolver and cross-sentence advancement.
//!
//! [`NavigationState`] is always derived from a [`Worksheet`]; nothing
//! persists it. Every function here either reads the worksheet to decide
//! where the user resumes, or applies the one status change the workflow
//! performs (marking the worksheet completed).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{SentenceInquiry, Worksheet};
use crate::enums::{EntityType, InquiryStep, Stage};
use crate::errors::CoreError;
use crate::progress::{QUESTION_COUNT, is_filled, turnaround_gate_met};

/// Where the user is inside a worksheet.
///
/// `question_index` is the form step (0-5) in `initial-form` and the inquiry
/// question (0-3) in `inquiry`; it is absent for the other stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    pub stage: Stage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_index: Option<usize>,
}

impl NavigationState {
    #[must_use]
    pub const fn initial_form(step: usize) -> Self {
        Self {
            stage: Stage::InitialForm,
            sentence_id: None,
            question_index: Some(step),
        }
    }

    #[must_use]
    pub const fn sentence_selection() -> Self {
        Self {
            stage: Stage::SentenceSelection,
            sentence_id: None,
            question_index: None,
        }
    }

    #[must_use]
    pub fn inquiry(sentence_id: impl Into<String>, question_index: usize) -> Self {
        Self {
            stage: Stage::Inquiry,
            sentence_id: Some(sentence_id.into()),
            question_index: Some(question_index),
        }
    }

    #[must_use]
    pub fn turnaround(sentence_id: impl Into<String>) -> Self {
        Self {
            stage: Stage::Turnaround,
            sentence_id: Some(sentence_id.into()),
            question_index: None,
        }
    }

    /// The worksheet is completed and control returns to the dashboard.
    #[must_use]
    pub const fn finished() -> Self {
        Self {
            stage: Stage::Finished,
            sentence_id: None,
            question_index: None,
        }
    }

    /// The inquiry step this state points at, if it is an inquiry state.
    #[must_use]
    pub fn step(&self) -> Option<InquiryStep> {
        match self.stage {
            Stage::Inquiry => self.question_index.and_then(InquiryStep::from_index),
            _ => None,
        }
    }
}

/// Check that `next` is reachable from `from` and return it.
///
/// # Errors
///
/// Returns `CoreError::InvalidTransition` if the stage table forbids it.
pub fn transition(
    worksheet_id: &str,
    from: Stage,
    next: NavigationState,
) -> Result<NavigationState, CoreError> {
    if from.can_transition_to(next.stage) {
        Ok(next)
    } else {
        Err(CoreError::invalid_transition(
            EntityType::Worksheet,
            worksheet_id,
            from,
            next.stage,
        ))
    }
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Index of the question a sentence resumes at.
///
/// The first unanswered question in order, skipping question 2 when
/// question 1 was answered "No". When every question on the path is answered
/// but the counter is still below 4 (question 2 skipped), this lands on
/// question 4.
#[must_use]
pub fn first_open_question(sentence: &SentenceInquiry) -> usize {
    let skip_second = sentence.skips_second_question();
    InquiryStep::QUESTIONS
        .into_iter()
        .filter(|step| !(skip_second && *step == InquiryStep::Q2))
        .find(|step| !is_filled(sentence.answer(*step)))
        .and_then(InquiryStep::index)
        .unwrap_or(usize::from(QUESTION_COUNT) - 1)
}

/// Compute where a worksheet is resumed.
#[must_use]
pub fn resolve_entry_stage(worksheet: &Worksheet) -> NavigationState {
    let sentences = worksheet.sentences();
    let Some(first) = sentences.first() else {
        return NavigationState::initial_form(0);
    };

    match sentences.iter().find(|s| s.needs_work()) {
        Some(sentence) if sentence.completed_questions() < QUESTION_COUNT => {
            NavigationState::inquiry(sentence.id(), first_open_question(sentence))
        }
        Some(sentence) => NavigationState::turnaround(sentence.id()),
        None => NavigationState::turnaround(first.id()),
    }
}

/// Entry point used when jumping to a sentence: question 1 while answers are
/// missing, the turnaround stage otherwise.
#[must_use]
pub fn entry_for_sentence(sentence: &SentenceInquiry) -> NavigationState {
    if sentence.completed_questions() < QUESTION_COUNT {
        NavigationState::inquiry(sentence.id(), 0)
    } else {
        NavigationState::turnaround(sentence.id())
    }
}

/// Jump directly to a sentence.
///
/// # Errors
///
/// Returns `CoreError::MissingRecord` if the sentence does not exist.
pub fn select_sentence(
    worksheet: &Worksheet,
    sentence_id: &str,
) -> Result<NavigationState, CoreError> {
    worksheet
        .sentence(sentence_id)
        .map(entry_for_sentence)
        .ok_or_else(|| CoreError::missing(EntityType::Sentence, sentence_id))
}

/// Step back from the turnaround stage to question 1 of the same sentence.
///
/// # Errors
///
/// Returns `CoreError::MissingRecord` if the sentence does not exist.
pub fn back_to_inquiry(
    worksheet: &Worksheet,
    sentence_id: &str,
) -> Result<NavigationState, CoreError> {
    let sentence = worksheet
        .sentence(sentence_id)
        .ok_or_else(|| CoreError::missing(EntityType::Sentence, sentence_id))?;
    transition(
        worksheet.id(),
        Stage::Turnaround,
        NavigationState::inquiry(sentence.id(), 0),
    )
}

// ---------------------------------------------------------------------------
// Advancement
// ---------------------------------------------------------------------------

/// Result of leaving the turnaround stage of a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StageExit {
    /// The sentence met the three-turnaround gate when it was left.
    pub gate_met: bool,
    /// This exit marked the worksheet completed.
    pub worksheet_completed: bool,
    pub next: NavigationState,
}

/// Leave the turnaround stage of `sentence_id` and move on.
///
/// Only sentences after the current one are scanned. When none of them needs
/// work the worksheet is marked completed, even if earlier sentences or the
/// current one are still incomplete.
///
/// # Errors
///
/// Returns `CoreError::MissingRecord` if the sentence does not exist.
pub fn finish_turnarounds(
    worksheet: &mut Worksheet,
    sentence_id: &str,
) -> Result<StageExit, CoreError> {
    let position = worksheet
        .sentence_position(sentence_id)
        .ok_or_else(|| CoreError::missing(EntityType::Sentence, sentence_id))?;
    let gate_met = turnaround_gate_met(worksheet.sentences()[position].turnarounds());

    let next = worksheet.sentences()[position + 1..]
        .iter()
        .find(|s| s.needs_work())
        .map(entry_for_sentence);

    let (worksheet_completed, next) = match next {
        Some(next) => (false, next),
        None => {
            worksheet.mark_completed()?;
            (true, NavigationState::finished())
        }
    };
    let next = transition(worksheet.id(), Stage::Turnaround, next)?;

    Ok(StageExit {
        gate_met,
        worksheet_completed,
        next,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{TurnaroundType, WorksheetStatus};
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn sentence(text: &str, answers: [Option<&str>; 4]) -> SentenceInquiry {
        let mut s = SentenceInquiry::new(text, 1).unwrap();
        for (step, answer) in InquiryStep::QUESTIONS.into_iter().zip(answers) {
            if let Some(answer) = answer {
                s.set_answer(step, answer).unwrap();
            }
        }
        s
    }

    fn with_turnarounds(mut s: SentenceInquiry, complete: usize) -> SentenceInquiry {
        for kind in TurnaroundType::ALL.into_iter().take(complete) {
            let id = s.add_turnaround(kind).unwrap().id.clone();
            s.set_turnaround_text(&id, "turned").unwrap();
            s.add_example(&id, "example").unwrap();
        }
        s
    }

    fn worksheet(sentences: Vec<SentenceInquiry>) -> Worksheet {
        let mut ws = Worksheet::blank(Utc::now()).unwrap();
        for s in sentences {
            ws.push_sentence(s);
        }
        ws
    }

    const ALL_ANSWERED: [Option<&str>; 4] = [Some("YES"), Some("YES"), Some("a"), Some("b")];

    #[test]
    fn empty_worksheet_resumes_in_form() {
        let ws = worksheet(vec![]);
        assert_eq!(resolve_entry_stage(&ws), NavigationState::initial_form(0));
    }

    #[test]
    fn no_on_first_question_resumes_at_third() {
        let s = sentence("a", [Some("NO"), None, None, None]);
        let id = s.id().to_string();
        let ws = worksheet(vec![s]);
        assert_eq!(resolve_entry_stage(&ws), NavigationState::inquiry(id, 2));
    }

    #[test]
    fn skipped_second_question_lands_on_fourth_when_rest_answered() {
        let s = sentence("a", [Some("NEIN"), None, Some("x"), Some("y")]);
        assert_eq!(s.completed_questions(), 3);
        assert_eq!(first_open_question(&s), 3);
    }

    #[test]
    fn unanswered_second_question_is_not_skipped_after_yes() {
        let s = sentence("a", [Some("YES"), None, Some("x"), None]);
        assert_eq!(first_open_question(&s), 1);
    }

    #[test]
    fn complete_questions_resume_in_turnaround() {
        let s = with_turnarounds(sentence("a", ALL_ANSWERED), 1);
        let id = s.id().to_string();
        let ws = worksheet(vec![s]);
        assert_eq!(resolve_entry_stage(&ws), NavigationState::turnaround(id));
    }

    #[test]
    fn fully_complete_worksheet_lands_on_first_sentence() {
        let a = with_turnarounds(sentence("a", ALL_ANSWERED), 3);
        let b = with_turnarounds(sentence("b", ALL_ANSWERED), 3);
        let id = a.id().to_string();
        let ws = worksheet(vec![a, b]);
        assert_eq!(resolve_entry_stage(&ws), NavigationState::turnaround(id));
    }

    #[test]
    fn advancement_skips_complete_sentences() {
        let a = with_turnarounds(sentence("a", ALL_ANSWERED), 3);
        let b = with_turnarounds(sentence("b", ALL_ANSWERED), 3);
        let c = sentence("c", ALL_ANSWERED);
        let (a_id, c_id) = (a.id().to_string(), c.id().to_string());
        let mut ws = worksheet(vec![a, b, c]);

        let exit = finish_turnarounds(&mut ws, &a_id).unwrap();
        assert!(exit.gate_met);
        assert!(!exit.worksheet_completed);
        assert_eq!(exit.next, NavigationState::turnaround(c_id));
        assert_eq!(ws.status(), WorksheetStatus::InProgress);
    }

    #[test]
    fn advancement_does_not_rescan_earlier_sentences() {
        let a = sentence("a", [None; 4]);
        let b = with_turnarounds(sentence("b", ALL_ANSWERED), 3);
        let b_id = b.id().to_string();
        let mut ws = worksheet(vec![a, b]);

        let exit = finish_turnarounds(&mut ws, &b_id).unwrap();
        assert!(exit.worksheet_completed);
        assert_eq!(exit.next, NavigationState::finished());
        assert_eq!(ws.status(), WorksheetStatus::Completed);
    }

    #[test]
    fn continue_later_reports_unmet_gate() {
        let a = with_turnarounds(sentence("a", ALL_ANSWERED), 1);
        let b = sentence("b", [None; 4]);
        let (a_id, b_id) = (a.id().to_string(), b.id().to_string());
        let mut ws = worksheet(vec![a, b]);

        let exit = finish_turnarounds(&mut ws, &a_id).unwrap();
        assert!(!exit.gate_met);
        assert_eq!(exit.next, NavigationState::inquiry(b_id, 0));
    }

    #[test]
    fn unknown_sentence_is_missing_record() {
        let mut ws = worksheet(vec![]);
        assert!(matches!(
            finish_turnarounds(&mut ws, "snt-00000000"),
            Err(CoreError::MissingRecord { .. })
        ));
        assert!(select_sentence(&ws, "snt-00000000").is_err());
        assert!(back_to_inquiry(&ws, "snt-00000000").is_err());
    }

    #[test]
    fn selecting_a_sentence_picks_its_entry_stage() {
        let a = sentence("a", [Some("YES"), None, None, None]);
        let b = sentence("b", ALL_ANSWERED);
        let (a_id, b_id) = (a.id().to_string(), b.id().to_string());
        let ws = worksheet(vec![a, b]);

        assert_eq!(
            select_sentence(&ws, &a_id).unwrap(),
            NavigationState::inquiry(a_id.clone(), 0)
        );
        assert_eq!(
            select_sentence(&ws, &b_id).unwrap(),
            NavigationState::turnaround(b_id.clone())
        );
        assert_eq!(
            back_to_inquiry(&ws, &b_id).unwrap(),
            NavigationState::inquiry(b_id, 0)
        );
    }

    #[test]
    fn transition_table_is_enforced() {
        let err = transition("wks-1", Stage::InitialForm, NavigationState::turnaround("s"));
        assert!(matches!(err, Err(CoreError::InvalidTransition { .. })));
        assert!(
            transition(
                "wks-1",
                Stage::SentenceSelection,
                NavigationState::inquiry("s", 0)
            )
            .is_ok()
        );
    }

    #[test]
    fn navigation_state_serializes_camel_case() {
        let json = serde_json::to_value(NavigationState::inquiry("snt-1", 2)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"stage": "inquiry", "sentenceId": "snt-1", "questionIndex": 2})
        );
    }
}
