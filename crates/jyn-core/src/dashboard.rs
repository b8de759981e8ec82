//! Dashboard projection: filtering, headlines and progress summaries.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entities::Worksheet;
use crate::enums::{JudgmentQuestion, WorksheetStatus};
use crate::errors::CoreError;
use crate::progress::{QUESTION_COUNT, REQUIRED_TURNAROUNDS, is_filled};

const HEADLINE_LIMIT: usize = 50;

/// Status filter of the worksheet list.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardFilter {
    #[default]
    All,
    InProgress,
    Completed,
}

impl DashboardFilter {
    #[must_use]
    pub fn matches(self, status: WorksheetStatus) -> bool {
        match self {
            Self::All => true,
            Self::InProgress => status == WorksheetStatus::InProgress,
            Self::Completed => status == WorksheetStatus::Completed,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for DashboardFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DashboardFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            other => Err(CoreError::Validation(format!("unknown filter: {other}"))),
        }
    }
}

/// Case-insensitive match against the joined entries of questions 1 and 5.
/// An empty term matches everything.
#[must_use]
pub fn matches_search(worksheet: &Worksheet, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    [JudgmentQuestion::WhoUpsetsYou, JudgmentQuestion::Opinion]
        .into_iter()
        .any(|q| worksheet.entries(q).join(" ").to_lowercase().contains(&term))
}

/// Worksheets passing both the status filter and the search term, in order.
#[must_use]
pub fn filter_worksheets<'a>(
    worksheets: &'a [Worksheet],
    filter: DashboardFilter,
    term: &str,
) -> Vec<&'a Worksheet> {
    worksheets
        .iter()
        .filter(|w| filter.matches(w.status()) && matches_search(w, term))
        .collect()
}

/// Short title: the first sentence of question 1, cut to 50 characters.
#[must_use]
pub fn headline(worksheet: &Worksheet) -> String {
    let joined = worksheet
        .entries(JudgmentQuestion::WhoUpsetsYou)
        .iter()
        .filter(|e| is_filled(Some(e.as_str())))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(". ");
    let first = joined.split('.').next().unwrap_or_default();
    if first.chars().count() > HEADLINE_LIMIT {
        let cut: String = first.chars().take(HEADLINE_LIMIT).collect();
        format!("{cut}...")
    } else {
        first.to_string()
    }
}

/// Progress figures shown per worksheet.
///
/// `turnarounds` counts every turnaround, complete or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorksheetProgress {
    pub questions_answered: usize,
    pub questions_total: usize,
    pub turnarounds: usize,
    pub turnarounds_total: usize,
}

impl WorksheetProgress {
    #[must_use]
    pub fn of(worksheet: &Worksheet) -> Self {
        let sentences = worksheet.sentences();
        Self {
            questions_answered: sentences
                .iter()
                .map(|s| usize::from(s.completed_questions()))
                .sum(),
            questions_total: sentences.len() * usize::from(QUESTION_COUNT),
            turnarounds: sentences.iter().map(|s| s.turnarounds().len()).sum(),
            turnarounds_total: sentences.len() * REQUIRED_TURNAROUNDS,
        }
    }
}

/// One row of the worksheet list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorksheetSummary {
    pub id: String,
    pub headline: String,
    pub status: WorksheetStatus,
    pub updated_at: DateTime<Utc>,
    pub progress: WorksheetProgress,
}

impl From<&Worksheet> for WorksheetSummary {
    fn from(worksheet: &Worksheet) -> Self {
        Self {
            id: worksheet.id().to_string(),
            headline: headline(worksheet),
            status: worksheet.status(),
            updated_at: worksheet.updated_at(),
            progress: WorksheetProgress::of(worksheet),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::SentenceInquiry;
    use crate::enums::{InquiryStep, TurnaroundType};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn worksheet(q1: &[&str], q5: &[&str]) -> Worksheet {
        let mut ws = Worksheet::blank(Utc::now()).unwrap();
        for (question, entries) in [
            (JudgmentQuestion::WhoUpsetsYou, q1),
            (JudgmentQuestion::Opinion, q5),
        ] {
            for (i, entry) in entries.iter().enumerate() {
                if i > 0 {
                    ws.add_entry(question);
                }
                ws.set_entry(question, i, *entry).unwrap();
            }
        }
        ws
    }

    #[rstest]
    #[case("paul", true)]
    #[case("CARELESS", true)]
    #[case("advice", false)]
    #[case("", true)]
    fn search_covers_first_and_fifth_question(#[case] term: &str, #[case] expected: bool) {
        let mut ws = worksheet(&["Paul is late"], &["he is careless"]);
        ws.set_entry(JudgmentQuestion::Advice, 0, "advice for Paul")
            .unwrap();
        assert_eq!(matches_search(&ws, term), expected);
    }

    #[test]
    fn filter_combines_status_and_search() {
        let mut done = worksheet(&["Anna lies"], &[]);
        done.mark_completed().unwrap();
        let open = worksheet(&["Anna shouts"], &[]);
        let list = vec![done, open];

        assert_eq!(filter_worksheets(&list, DashboardFilter::All, "anna").len(), 2);
        let completed = filter_worksheets(&list, DashboardFilter::Completed, "");
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].status(), WorksheetStatus::Completed);
        assert!(filter_worksheets(&list, DashboardFilter::InProgress, "lies").is_empty());
    }

    #[test]
    fn headline_takes_first_sentence() {
        let ws = worksheet(&["  ", "Paul is late. Always", "second"], &[]);
        assert_eq!(headline(&ws), "Paul is late");
    }

    #[test]
    fn headline_joins_entries_before_cutting() {
        let ws = worksheet(&["Paul", "second"], &[]);
        assert_eq!(headline(&ws), "Paul");
    }

    #[test]
    fn long_headline_is_truncated() {
        let long = "x".repeat(60);
        let ws = worksheet(&[long.as_str()], &[]);
        assert_eq!(headline(&ws), format!("{}...", "x".repeat(50)));
        assert_eq!(headline(&worksheet(&[], &[])), "");
    }

    #[test]
    fn progress_counts_all_turnarounds() {
        let mut ws = worksheet(&["Paul is late"], &[]);
        let mut s = SentenceInquiry::new("Paul is late", 1).unwrap();
        s.set_answer(InquiryStep::Q1, "YES").unwrap();
        s.add_turnaround(TurnaroundType::ToSelf).unwrap();
        ws.push_sentence(s);

        assert_eq!(
            WorksheetProgress::of(&ws),
            WorksheetProgress {
                questions_answered: 1,
                questions_total: 4,
                turnarounds: 1,
                turnarounds_total: 3,
            }
        );
    }

    #[test]
    fn filter_parses_from_str() {
        assert_eq!(
            "in-progress".parse::<DashboardFilter>().unwrap(),
            DashboardFilter::InProgress
        );
        assert!("done".parse::<DashboardFilter>().is_err());
    }
}
