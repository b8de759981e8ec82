mod entry;
mod inquiry;
mod sentence;
mod turnaround;

pub use entry::EntryCommands;
pub use inquiry::InquiryCommands;
pub use sentence::SentenceCommands;
pub use turnaround::TurnaroundCommands;
