use clap::Subcommand;

/// Inquiry commands. `--index` is the zero-based question index (0-3).
#[derive(Clone, Debug, Subcommand)]
pub enum InquiryCommands {
    /// Answer a question in free text.
    Answer {
        id: String,
        sentence_id: String,
        #[arg(long)]
        index: usize,
        text: String,
    },
    /// Answer a yes/no question with "yes" and move on.
    Yes {
        id: String,
        sentence_id: String,
        #[arg(long, default_value_t = 0)]
        index: usize,
    },
    /// Answer a yes/no question with "no" and move on.
    No {
        id: String,
        sentence_id: String,
        #[arg(long, default_value_t = 0)]
        index: usize,
    },
    /// Fill a deep-dive slot of question 3 (e.g. `bodyLocation`).
    Sub3 {
        id: String,
        sentence_id: String,
        slot: String,
        text: String,
    },
    /// Fill a deep-dive slot of question 4 (e.g. `whoNowMoment`).
    Sub4 {
        id: String,
        sentence_id: String,
        slot: String,
        text: String,
    },
    /// Go to the next question.
    Next {
        id: String,
        sentence_id: String,
        #[arg(long)]
        index: usize,
    },
    /// Go to the previous question.
    Prev {
        id: String,
        sentence_id: String,
        #[arg(long)]
        index: usize,
    },
}
