use clap::Subcommand;

/// Initial form commands. `--question` is the judgment question number 1-6,
/// `--step` the zero-based form step.
#[derive(Clone, Debug, Subcommand)]
pub enum EntryCommands {
    /// Set the text of one entry.
    Set {
        id: String,
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=6))]
        question: u8,
        #[arg(long, default_value_t = 0)]
        index: usize,
        text: String,
    },
    /// Append an empty entry to a question.
    Add {
        id: String,
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=6))]
        question: u8,
    },
    /// Remove an entry. The last entry of a question cannot be removed.
    Remove {
        id: String,
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=6))]
        question: u8,
        #[arg(long)]
        index: usize,
    },
    /// Go to the next form step.
    Next {
        id: String,
        #[arg(long)]
        step: usize,
    },
    /// Go to the previous form step.
    Back {
        id: String,
        #[arg(long)]
        step: usize,
    },
}
