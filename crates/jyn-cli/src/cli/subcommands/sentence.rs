use clap::Subcommand;

/// Sentence selection commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SentenceCommands {
    /// Suggested sentences taken from the form answers.
    Suggest { id: String },
    /// Add a sentence taken from question `--source`.
    Add {
        id: String,
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=6))]
        source: u8,
        text: String,
    },
    /// Add a sentence of your own.
    Custom { id: String, text: String },
    /// Select or deselect a suggested sentence.
    Toggle {
        id: String,
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=6))]
        source: u8,
        text: String,
    },
    /// Remove a sentence with its answers and turnarounds.
    Remove { id: String, sentence_id: String },
    /// Finish selection and start the inquiry.
    Done { id: String },
    /// Return to the last form step.
    Back { id: String },
    /// Jump to a sentence.
    Select { id: String, sentence_id: String },
}
