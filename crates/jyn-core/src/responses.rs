//! CLI response types returned as JSON by `jyn` commands.
//!
//! Every action on a worksheet answers with a [`StepResponse`]: where the user
//! is after the action. Actions that produce something else embed the step
//! next to their own result.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dashboard::{DashboardFilter, WorksheetSummary};
use crate::entities::{Turnaround, Worksheet};
use crate::enums::WorksheetStatus;
use crate::navigation::{NavigationState, StageExit};
use crate::selection::{SuggestedSentence, Toggle};

/// Position after an action. `navigation` is `None` on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StepResponse {
    pub worksheet_id: String,
    pub status: WorksheetStatus,
    pub navigation: Option<NavigationState>,
}

impl StepResponse {
    #[must_use]
    pub fn new(worksheet: &Worksheet, navigation: Option<NavigationState>) -> Self {
        Self {
            worksheet_id: worksheet.id().to_string(),
            status: worksheet.status(),
            navigation,
        }
    }
}

/// Response from `jyn show`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorksheetView {
    pub worksheet: Worksheet,
    pub summary: WorksheetSummary,
    pub resume: NavigationState,
}

/// Response from `jyn list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorksheetListResponse {
    pub filter: DashboardFilter,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub worksheets: Vec<WorksheetSummary>,
    pub total: usize,
}

/// Response from `jyn delete`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteResponse {
    pub id: String,
    pub deleted: bool,
}

/// Response from `jyn sentence suggest`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionsResponse {
    pub worksheet_id: String,
    pub suggestions: Vec<SuggestedSentence>,
}

/// Response from `jyn sentence add` / `jyn sentence custom`.
///
/// `sentence_id` is `None` when a sentence with the same text already existed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SentenceAddedResponse {
    #[serde(flatten)]
    pub step: StepResponse,
    pub sentence_id: Option<String>,
}

/// Response from `jyn sentence toggle`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ToggleResponse {
    #[serde(flatten)]
    pub step: StepResponse,
    pub toggle: Toggle,
}

/// Response from `jyn turnaround add`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TurnaroundAddedResponse {
    #[serde(flatten)]
    pub step: StepResponse,
    pub turnaround: Turnaround,
}

/// Response from `jyn turnaround done`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StageExitResponse {
    #[serde(flatten)]
    pub step: StepResponse,
    pub exit: StageExit,
}
