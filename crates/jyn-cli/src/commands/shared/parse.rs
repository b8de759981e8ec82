use anyhow::Context;
use jyn_core::entities::{Answer3Slot, Answer4Slot};
use jyn_core::enums::JudgmentQuestion;
use serde::de::DeserializeOwned;

/// Parse a kebab-case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('_', "-");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Judgment question from its number 1-6.
pub fn parse_question(number: u8) -> anyhow::Result<JudgmentQuestion> {
    JudgmentQuestion::from_number(number)
        .with_context(|| format!("invalid question '{number}': expected 1 to 6"))
}

pub fn parse_answer3_slot(raw: &str) -> anyhow::Result<Answer3Slot> {
    Answer3Slot::from_key(raw).with_context(|| {
        let keys = Answer3Slot::ALL.map(Answer3Slot::key).join(", ");
        format!("invalid question 3 slot '{raw}': expected one of {keys}")
    })
}

pub fn parse_answer4_slot(raw: &str) -> anyhow::Result<Answer4Slot> {
    Answer4Slot::from_key(raw).with_context(|| {
        let keys = Answer4Slot::ALL.map(Answer4Slot::key).join(", ");
        format!("invalid question 4 slot '{raw}': expected one of {keys}")
    })
}
