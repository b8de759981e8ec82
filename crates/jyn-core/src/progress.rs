//! Completion calculator.
//!
//! Pure functions deriving the cached counters of a sentence. Entities call
//! these after every mutation; nothing else writes the counters.

use crate::entities::Turnaround;

/// Number of turnarounds the turnaround stage asks for.
pub const REQUIRED_TURNAROUNDS: usize = 3;

/// Number of inquiry questions per sentence.
pub const QUESTION_COUNT: u8 = 4;

/// Present and non-empty after trimming.
#[must_use]
pub fn is_filled(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Count of filled primary answers, 0 to 4.
#[must_use]
pub fn question_completion(answers: [Option<&str>; 4]) -> u8 {
    let mut count = 0;
    for answer in answers {
        if is_filled(answer) {
            count += 1;
        }
    }
    count
}

/// Count of turnarounds with non-blank text and at least one example.
///
/// Not clamped: five complete turnarounds yield 5.
#[must_use]
pub fn turnaround_completion(turnarounds: &[Turnaround]) -> u32 {
    let complete = turnarounds.iter().filter(|t| t.is_complete()).count();
    u32::try_from(complete).unwrap_or(u32::MAX)
}

/// At least three turnarounds, every one of them complete.
#[must_use]
pub fn turnaround_gate_met(turnarounds: &[Turnaround]) -> bool {
    turnarounds.len() >= REQUIRED_TURNAROUNDS && turnarounds.iter().all(Turnaround::is_complete)
}
