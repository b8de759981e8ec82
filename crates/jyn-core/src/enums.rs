//! Status enums, stage/step state machines, and fixed vocabularies for jyn.
//!
//! Persisted enums use kebab-case serialization (`in-progress`, `to-opposite`)
//! to stay compatible with existing worksheet files. State machines provide
//! `allowed_next_states()` so transitions are checked at the application layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// Kind of record referenced by an error or log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Worksheet,
    Sentence,
    Turnaround,
}

impl EntityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Worksheet => "worksheet",
            Self::Sentence => "sentence",
            Self::Turnaround => "turnaround",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// WorksheetStatus
// ---------------------------------------------------------------------------

/// Overall status of a worksheet.
///
/// ```text
/// in-progress → completed
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum WorksheetStatus {
    #[default]
    InProgress,
    Completed,
}

impl WorksheetStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::InProgress => &[Self::Completed],
            Self::Completed => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for WorksheetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// JudgmentQuestion
// ---------------------------------------------------------------------------

/// The six Judge-Your-Neighbor questions, numbered 1 to 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum JudgmentQuestion {
    /// Who angers, confuses, or disappoints you, and why?
    WhoUpsetsYou,
    /// How do you want them to change?
    HowShouldTheyChange,
    /// What advice would you offer them?
    Advice,
    /// What do you need them to think, say, feel, or do?
    Needs,
    /// What do you think of them?
    Opinion,
    /// What do you never want to experience again?
    NeverAgain,
}

impl JudgmentQuestion {
    /// All questions in form order.
    pub const ALL: [Self; 6] = [
        Self::WhoUpsetsYou,
        Self::HowShouldTheyChange,
        Self::Advice,
        Self::Needs,
        Self::Opinion,
        Self::NeverAgain,
    ];

    /// 1-based question number, also used as `sourceQuestion` on sentences.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::WhoUpsetsYou => 1,
            Self::HowShouldTheyChange => 2,
            Self::Advice => 3,
            Self::Needs => 4,
            Self::Opinion => 5,
            Self::NeverAgain => 6,
        }
    }

    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::WhoUpsetsYou),
            2 => Some(Self::HowShouldTheyChange),
            3 => Some(Self::Advice),
            4 => Some(Self::Needs),
            5 => Some(Self::Opinion),
            6 => Some(Self::NeverAgain),
            _ => None,
        }
    }

    /// 0-based step of the question in the initial form.
    #[must_use]
    pub const fn step(self) -> usize {
        self.number() as usize - 1
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WhoUpsetsYou => "who_upsets_you",
            Self::HowShouldTheyChange => "how_should_they_change",
            Self::Advice => "advice",
            Self::Needs => "needs",
            Self::Opinion => "opinion",
            Self::NeverAgain => "never_again",
        }
    }
}

impl fmt::Display for JudgmentQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TurnaroundType
// ---------------------------------------------------------------------------

/// Direction of a turnaround.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TurnaroundType {
    ToOpposite,
    ToOther,
    ToSelf,
}

impl TurnaroundType {
    /// Display order of the turnaround stage.
    pub const ALL: [Self; 3] = [Self::ToOpposite, Self::ToOther, Self::ToSelf];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToOpposite => "to-opposite",
            Self::ToOther => "to-other",
            Self::ToSelf => "to-self",
        }
    }
}

impl fmt::Display for TurnaroundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

/// Workflow stage a worksheet is being worked through.
///
/// ```text
/// initial-form ⇄ sentence-selection → inquiry → turnaround → finished
///                                     inquiry ← turnaround (back / next sentence)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    InitialForm,
    SentenceSelection,
    Inquiry,
    Turnaround,
    Finished,
}

impl Stage {
    /// Valid next stages from the current stage.
    ///
    /// `Inquiry → Inquiry` and `Turnaround → Turnaround` cover moving to
    /// another sentence without leaving the stage.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::InitialForm => &[Self::SentenceSelection],
            Self::SentenceSelection => &[Self::InitialForm, Self::Inquiry],
            Self::Inquiry => &[Self::Inquiry, Self::Turnaround],
            Self::Turnaround => &[Self::Inquiry, Self::Turnaround, Self::Finished],
            Self::Finished => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InitialForm => "initial-form",
            Self::SentenceSelection => "sentence-selection",
            Self::Inquiry => "inquiry",
            Self::Turnaround => "turnaround",
            Self::Finished => "finished",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// InquiryStep
// ---------------------------------------------------------------------------

/// Position inside the four-question inquiry of one sentence.
///
/// ```text
/// q1 → q2 → q3 → q4 → done
/// q1 ──────→ q3            (question 1 answered "No")
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStep {
    Q1,
    Q2,
    Q3,
    Q4,
    Done,
}

impl InquiryStep {
    /// The four answerable questions in order.
    pub const QUESTIONS: [Self; 4] = [Self::Q1, Self::Q2, Self::Q3, Self::Q4];

    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Q1 => &[Self::Q2, Self::Q3],
            Self::Q2 => &[Self::Q3],
            Self::Q3 => &[Self::Q4],
            Self::Q4 => &[Self::Done],
            Self::Done => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// 0-based question index, `None` for `Done`.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Q1 => Some(0),
            Self::Q2 => Some(1),
            Self::Q3 => Some(2),
            Self::Q4 => Some(3),
            Self::Done => None,
        }
    }

    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Q1),
            1 => Some(Self::Q2),
            2 => Some(Self::Q3),
            3 => Some(Self::Q4),
            _ => None,
        }
    }

    /// Step reached by going back one position.
    ///
    /// Always the positional predecessor: `Q3` goes back to `Q2` even when the
    /// forward path skipped it. `Q1` has no predecessor.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Q1 => None,
            Self::Q2 => Some(Self::Q1),
            Self::Q3 => Some(Self::Q2),
            Self::Q4 => Some(Self::Q3),
            Self::Done => Some(Self::Q4),
        }
    }

    /// Questions 1 and 2 are answered with Yes/No.
    #[must_use]
    pub const fn is_yes_no(self) -> bool {
        matches!(self, Self::Q1 | Self::Q2)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Q1 => "q1",
            Self::Q2 => "q2",
            Self::Q3 => "q3",
            Self::Q4 => "q4",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for InquiryStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Language / YesNo
// ---------------------------------------------------------------------------

/// Language of the labels written for Yes/No answers.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    De,
    #[default]
    En,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::De, Self::En];

    #[must_use]
    pub const fn yes_label(self) -> &'static str {
        match self {
            Self::De => "JA",
            Self::En => "YES",
        }
    }

    #[must_use]
    pub const fn no_label(self) -> &'static str {
        match self {
            Self::De => "NEIN",
            Self::En => "NO",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::De => "de",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Yes/No answer to inquiry question 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    /// Recognise a stored answer written in any supported language.
    ///
    /// Matching trims whitespace and ignores case. Free text that is not a
    /// label yields `None`.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        Language::ALL.iter().find_map(|lang| {
            if text.eq_ignore_ascii_case(lang.yes_label()) {
                Some(Self::Yes)
            } else if text.eq_ignore_ascii_case(lang.no_label()) {
                Some(Self::No)
            } else {
                None
            }
        })
    }

    /// The label stored for this answer in `language`.
    #[must_use]
    pub const fn label(self, language: Language) -> &'static str {
        match self {
            Self::Yes => language.yes_label(),
            Self::No => language.no_label(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
