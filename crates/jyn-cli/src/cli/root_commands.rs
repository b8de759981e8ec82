use clap::{Args, Subcommand};

use crate::cli::subcommands::{EntryCommands, InquiryCommands, SentenceCommands, TurnaroundCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Start a new worksheet.
    New,
    /// List worksheets (the dashboard).
    List(ListArgs),
    /// Show a worksheet with its progress and resume position.
    Show { id: String },
    /// Where a worksheet is picked up again.
    Resume { id: String },
    /// Delete a worksheet.
    Delete { id: String },
    /// Initial form: the six judgment questions.
    Entry {
        #[command(subcommand)]
        action: EntryCommands,
    },
    /// Sentence selection.
    Sentence {
        #[command(subcommand)]
        action: SentenceCommands,
    },
    /// The four inquiry questions of a sentence.
    Inquiry {
        #[command(subcommand)]
        action: InquiryCommands,
    },
    /// Turnarounds of a sentence.
    Turnaround {
        #[command(subcommand)]
        action: TurnaroundCommands,
    },
    /// Dump the JSON schema of a stored worksheet record.
    Schema,
}

/// Arguments for `jyn list`.
#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// all, in-progress or completed (defaults to `general.default_filter`)
    #[arg(long)]
    pub filter: Option<String>,
    /// Case-insensitive text matched against questions 1 and 5.
    #[arg(long)]
    pub search: Option<String>,
}
