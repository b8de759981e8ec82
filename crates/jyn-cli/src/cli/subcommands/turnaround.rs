use clap::Subcommand;

/// Turnaround commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TurnaroundCommands {
    /// Add a turnaround: to-opposite, to-other or to-self.
    Add {
        id: String,
        sentence_id: String,
        #[arg(long = "type")]
        kind: String,
    },
    /// Set the text of a turnaround.
    Text {
        id: String,
        sentence_id: String,
        turnaround_id: String,
        text: String,
    },
    /// Add an example to a turnaround.
    Example {
        id: String,
        sentence_id: String,
        turnaround_id: String,
        text: String,
    },
    /// Remove an example from a turnaround.
    DropExample {
        id: String,
        sentence_id: String,
        turnaround_id: String,
        #[arg(long)]
        index: usize,
    },
    /// Remove a turnaround.
    Remove {
        id: String,
        sentence_id: String,
        turnaround_id: String,
    },
    /// Finish the turnarounds and move to the next sentence.
    Done { id: String, sentence_id: String },
    /// Return to question 1 of the sentence.
    Back { id: String, sentence_id: String },
}
