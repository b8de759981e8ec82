//! Versioned worksheet document and record upgrade.
//!
//! The document on disk is `{ "v": 2, "worksheets": [...] }`. A bare JSON
//! array is the legacy layout and reads as version 1. Every record goes
//! through one explicit upgrade step for its version, then a repair pass that
//! fills in what older or hand-edited files may be missing. Cached counters
//! are always recomputed from content after loading.

use chrono::{DateTime, Utc};
use jyn_core::entities::Worksheet;
use jyn_core::ids::{PREFIX_SENTENCE, PREFIX_TURNAROUND, PREFIX_WORKSHEET, generate_id};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::StoreError;

/// Version written on every save.
pub const CURRENT_VERSION: u64 = 2;

/// Bare array of records with scalar question fields.
pub const LEGACY_VERSION: u64 = 1;

const QUESTION_KEYS: [&str; 6] = [
    "question1",
    "question2",
    "question3",
    "question4",
    "question5",
    "question6",
];
const ANSWER_KEYS: [&str; 4] = ["answer1", "answer2", "answer3", "answer4"];
const SUB_ANSWER_KEYS: [&str; 2] = ["answer3SubQuestions", "answer4SubQuestions"];
const COUNTER_KEYS: [&str; 2] = ["completedQuestions", "completedTurnarounds"];
const STATUSES: [&str; 2] = ["in-progress", "completed"];
const TURNAROUND_TYPES: [&str; 3] = ["to-opposite", "to-other", "to-self"];
const MAX_SOURCE_QUESTION: u64 = 6;

#[derive(Serialize)]
struct Document<'a> {
    v: u64,
    worksheets: &'a [Worksheet],
}

/// Encode worksheets as a current-version document.
///
/// # Errors
///
/// Returns `StoreError::Serialization` if a record cannot be encoded.
pub fn encode(worksheets: &[Worksheet]) -> Result<String, StoreError> {
    let document = Document {
        v: CURRENT_VERSION,
        worksheets,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Decode a document of any supported version.
///
/// Blank input is an empty document.
///
/// # Errors
///
/// Returns `StoreError::Serialization` for invalid JSON,
/// `StoreError::UnsupportedVersion` for versions newer than
/// [`CURRENT_VERSION`], and `StoreError::Migration` when the document shape is
/// unrecognizable.
pub fn decode(raw: &str) -> Result<Vec<Worksheet>, StoreError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    let document: Value = serde_json::from_str(raw)?;
    let (version, records) = split_document(document)?;
    if !(LEGACY_VERSION..=CURRENT_VERSION).contains(&version) {
        return Err(StoreError::UnsupportedVersion(version));
    }

    let mut worksheets = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        if let Some(worksheet) = upgrade_record(index, version, record)? {
            worksheets.push(worksheet);
        }
    }
    Ok(worksheets)
}

fn split_document(document: Value) -> Result<(u64, Vec<Value>), StoreError> {
    match document {
        Value::Array(records) => Ok((LEGACY_VERSION, records)),
        Value::Object(mut map) => {
            let version = map
                .get("v")
                .and_then(Value::as_u64)
                .ok_or_else(|| StoreError::Migration("document has no version".into()))?;
            let records = match map.remove("worksheets") {
                Some(Value::Array(records)) => records,
                None | Some(Value::Null) => Vec::new(),
                Some(_) => {
                    return Err(StoreError::Migration(
                        "document worksheets is not a list".into(),
                    ));
                }
            };
            Ok((version, records))
        }
        _ => Err(StoreError::Migration(
            "document is neither a list nor an object".into(),
        )),
    }
}

/// Upgrade one record to the current shape and decode it.
///
/// `None` (logged) for records that are not JSON objects or still fail to
/// decode after repair.
fn upgrade_record(
    index: usize,
    version: u64,
    record: Value,
) -> Result<Option<Worksheet>, StoreError> {
    let record = match version {
        LEGACY_VERSION => migrate_v1_to_v2(record),
        CURRENT_VERSION => record,
        v => return Err(StoreError::UnsupportedVersion(v)),
    };
    let Value::Object(mut map) = record else {
        warn!("Dropped worksheet record {index}: not an object");
        return Ok(None);
    };

    let mut repair = Repair::default();
    repair.worksheet(&mut map)?;
    let worksheet = decode_repaired(index, map);
    if let Some(worksheet) = worksheet.as_ref().filter(|_| repair.touched) {
        warn!("Normalized malformed worksheet record {}", worksheet.id());
    }
    Ok(worksheet)
}

/// Decode a repaired record; one that still fails is dropped.
fn decode_repaired(index: usize, map: Map<String, Value>) -> Option<Worksheet> {
    match serde_json::from_value::<Worksheet>(Value::Object(map)) {
        Ok(mut worksheet) => {
            worksheet.refresh_progress();
            Some(worksheet)
        }
        Err(error) => {
            warn!("Dropped worksheet record {index}: {error}");
            None
        }
    }
}

/// Version 1 stored each question as a single string.
fn migrate_v1_to_v2(mut record: Value) -> Value {
    if let Some(map) = record.as_object_mut() {
        for key in QUESTION_KEYS {
            if let Some(Value::String(text)) = map.get(key) {
                let list = Value::Array(vec![Value::String(text.clone())]);
                map.insert(key.to_string(), list);
            }
        }
    }
    record
}

// ---------------------------------------------------------------------------
// Repair
// ---------------------------------------------------------------------------

/// Fills in missing or malformed fields, remembering whether anything changed.
#[derive(Default)]
struct Repair {
    touched: bool,
}

impl Repair {
    fn worksheet(&mut self, map: &mut Map<String, Value>) -> Result<(), StoreError> {
        self.id(map, PREFIX_WORKSHEET)?;

        let now = Value::String(Utc::now().to_rfc3339());
        if !is_timestamp(map.get("createdAt")) {
            let created = map
                .get("updatedAt")
                .filter(|v| is_timestamp(Some(*v)))
                .cloned()
                .unwrap_or_else(|| now.clone());
            self.set(map, "createdAt", created);
        }
        if !is_timestamp(map.get("updatedAt")) {
            let updated = map.get("createdAt").cloned().unwrap_or(now);
            self.set(map, "updatedAt", updated);
        }

        let status_ok = map
            .get("status")
            .and_then(Value::as_str)
            .is_some_and(|s| STATUSES.contains(&s));
        if !status_ok {
            self.set(map, "status", Value::String(STATUSES[0].into()));
        }

        for key in QUESTION_KEYS {
            self.question_list(map, key);
        }

        let mut sentences = self.take_list(map, "sentences");
        let before = sentences.len();
        sentences.retain(Value::is_object);
        self.touched |= sentences.len() != before;
        for sentence in &mut sentences {
            if let Value::Object(sentence) = sentence {
                self.sentence(sentence)?;
            }
        }
        map.insert("sentences".into(), Value::Array(sentences));
        Ok(())
    }

    fn sentence(&mut self, map: &mut Map<String, Value>) -> Result<(), StoreError> {
        self.id(map, PREFIX_SENTENCE)?;
        self.string(map, "text");

        let source_ok = map
            .get("sourceQuestion")
            .and_then(Value::as_u64)
            .is_some_and(|n| n <= MAX_SOURCE_QUESTION);
        if !source_ok {
            self.set(map, "sourceQuestion", Value::from(0));
        }

        for key in ANSWER_KEYS {
            if map.get(key).is_some_and(|v| !v.is_string() && !v.is_null()) {
                map.remove(key);
                self.touched = true;
            }
        }

        for key in SUB_ANSWER_KEYS {
            match map.get_mut(key) {
                Some(Value::Object(slots)) => {
                    let before = slots.len();
                    slots.retain(|_, v| v.is_string());
                    self.touched |= slots.len() != before;
                }
                None => {}
                Some(_) => {
                    map.remove(key);
                    self.touched = true;
                }
            }
        }

        // Counters are recomputed after decoding.
        for key in COUNTER_KEYS {
            map.remove(key);
        }

        let mut turnarounds = self.take_list(map, "turnarounds");
        let before = turnarounds.len();
        turnarounds.retain(|t| {
            t.get("type")
                .and_then(Value::as_str)
                .is_some_and(|kind| TURNAROUND_TYPES.contains(&kind))
        });
        self.touched |= turnarounds.len() != before;
        for turnaround in &mut turnarounds {
            if let Value::Object(turnaround) = turnaround {
                self.turnaround(turnaround)?;
            }
        }
        map.insert("turnarounds".into(), Value::Array(turnarounds));
        Ok(())
    }

    fn turnaround(&mut self, map: &mut Map<String, Value>) -> Result<(), StoreError> {
        self.id(map, PREFIX_TURNAROUND)?;
        self.string(map, "text");
        let mut examples = self.take_list(map, "examples");
        let before = examples.len();
        examples.retain(Value::is_string);
        self.touched |= examples.len() != before;
        map.insert("examples".into(), Value::Array(examples));
        Ok(())
    }

    /// Keep string entries; an empty or missing list becomes `[""]`.
    fn question_list(&mut self, map: &mut Map<String, Value>, key: &str) {
        let entries: Vec<Value> = match map.get(key) {
            Some(Value::Array(items)) => items.iter().filter(|v| v.is_string()).cloned().collect(),
            Some(Value::String(text)) => vec![Value::String(text.clone())],
            _ => Vec::new(),
        };
        let entries = if entries.is_empty() {
            vec![Value::String(String::new())]
        } else {
            entries
        };
        let replacement = Value::Array(entries);
        if map.get(key) != Some(&replacement) {
            self.set(map, key, replacement);
        }
    }

    /// Remove the array at `key`; anything else counts as an empty list.
    fn take_list(&mut self, map: &mut Map<String, Value>, key: &str) -> Vec<Value> {
        match map.remove(key) {
            Some(Value::Array(items)) => items,
            _ => {
                self.touched = true;
                Vec::new()
            }
        }
    }

    fn id(&mut self, map: &mut Map<String, Value>, prefix: &str) -> Result<(), StoreError> {
        let present = map
            .get("id")
            .and_then(Value::as_str)
            .is_some_and(|id| !id.is_empty());
        if !present {
            let id = generate_id(prefix)?;
            self.set(map, "id", Value::String(id));
        }
        Ok(())
    }

    fn string(&mut self, map: &mut Map<String, Value>, key: &str) {
        if !map.get(key).is_some_and(Value::is_string) {
            self.set(map, key, Value::String(String::new()));
        }
    }

    fn set(&mut self, map: &mut Map<String, Value>, key: &str, value: Value) {
        map.insert(key.to_string(), value);
        self.touched = true;
    }
}

fn is_timestamp(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .is_some_and(|s| s.parse::<DateTime<Utc>>().is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyn_core::enums::{JudgmentQuestion, WorksheetStatus};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn blank_input_is_empty_document() {
        assert!(decode("").unwrap().is_empty());
        assert!(decode("  \n").unwrap().is_empty());
    }

    #[test]
    fn legacy_scalar_questions_become_lists() {
        let raw = json!([{
            "id": "wks-00000001",
            "createdAt": "2026-01-01T10:00:00Z",
            "updatedAt": "2026-01-02T10:00:00Z",
            "status": "in-progress",
            "question1": "Paul, because he lies",
            "question2": "",
            "sentences": []
        }])
        .to_string();

        let worksheets = decode(&raw).unwrap();
        let ws = &worksheets[0];
        assert_eq!(
            ws.entries(JudgmentQuestion::WhoUpsetsYou),
            ["Paul, because he lies".to_string()]
        );
        assert_eq!(ws.entries(JudgmentQuestion::HowShouldTheyChange), [String::new()]);
        assert_eq!(ws.entries(JudgmentQuestion::NeverAgain), [String::new()]);
    }

    #[test]
    fn current_document_roundtrips() {
        let ws = Worksheet::blank(Utc::now()).unwrap();
        let encoded = encode(std::slice::from_ref(&ws)).unwrap();
        let value: Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(value["v"], CURRENT_VERSION);
        assert_eq!(decode(&encoded).unwrap(), vec![ws]);
    }

    #[rstest]
    #[case(0)]
    #[case(3)]
    #[case(99)]
    fn unknown_version_is_rejected(#[case] version: u64) {
        let raw = json!({"v": version, "worksheets": []}).to_string();
        assert!(matches!(
            decode(&raw),
            Err(StoreError::UnsupportedVersion(v)) if v == version
        ));
    }

    #[test]
    fn unrecognizable_document_is_migration_error() {
        assert!(matches!(decode("42"), Err(StoreError::Migration(_))));
        assert!(matches!(
            decode(r#"{"worksheets": []}"#),
            Err(StoreError::Migration(_))
        ));
        assert!(matches!(decode("{"), Err(StoreError::Serialization(_))));
    }

    #[test]
    fn malformed_record_is_repaired() {
        let raw = json!({
            "v": 2,
            "worksheets": [
                "garbage",
                {
                    "status": "archived",
                    "question1": ["Anna", 7, null],
                    "question3": [],
                    "sentences": [
                        {
                            "text": "Anna lies",
                            "sourceQuestion": 42,
                            "answer1": "NO",
                            "answer2": 5,
                            "answer3SubQuestions": {"emotions": "fear", "cost": 3},
                            "completedQuestions": -1,
                            "completedTurnarounds": 99,
                            "turnarounds": [
                                {"type": "to-self", "text": "I lie", "examples": ["to myself", 1]},
                                {"type": "sideways"}
                            ]
                        },
                        17
                    ]
                }
            ]
        })
        .to_string();

        let worksheets = decode(&raw).unwrap();
        assert_eq!(worksheets.len(), 1);
        let ws = &worksheets[0];
        assert!(ws.id().starts_with("wks-"));
        assert_eq!(ws.status(), WorksheetStatus::InProgress);
        assert_eq!(ws.entries(JudgmentQuestion::WhoUpsetsYou), ["Anna".to_string()]);
        assert_eq!(ws.entries(JudgmentQuestion::Advice), [String::new()]);

        assert_eq!(ws.sentences().len(), 1);
        let sentence = &ws.sentences()[0];
        assert!(sentence.id().starts_with("snt-"));
        assert_eq!(sentence.source_question(), 0);
        assert_eq!(sentence.completed_questions(), 1);
        assert_eq!(sentence.completed_turnarounds(), 1);
        assert_eq!(sentence.turnarounds().len(), 1);
        assert_eq!(sentence.turnarounds()[0].examples, vec!["to myself".to_string()]);
        assert_eq!(sentence.answer3_sub_questions().answered(), 1);
    }

    #[test]
    fn null_sub_answer_maps_are_cleared() {
        let raw = json!([{
            "id": "wks-00000003",
            "createdAt": "2026-01-01T10:00:00Z",
            "updatedAt": "2026-01-01T10:00:00Z",
            "question1": "Paul",
            "sentences": [{
                "id": "snt-00000003",
                "text": "Paul lies",
                "sourceQuestion": 1,
                "answer1": "YES",
                "answer3SubQuestions": null,
                "answer4SubQuestions": null,
                "turnarounds": []
            }]
        }])
        .to_string();

        let worksheets = decode(&raw).unwrap();
        let sentence = &worksheets[0].sentences()[0];
        assert_eq!(sentence.completed_questions(), 1);
        assert_eq!(sentence.answer3_sub_questions().answered(), 0);
        assert_eq!(sentence.answer4_sub_questions().answered(), 0);
    }

    #[test]
    fn record_failing_to_decode_is_dropped() {
        let Value::Object(map) = json!({"id": "wks-00000004", "question1": [""]}) else {
            unreachable!("literal is an object");
        };
        assert!(decode_repaired(0, map).is_none());
    }

    #[test]
    fn missing_sentence_lists_default_to_empty() {
        let raw = json!({"v": 2, "worksheets": [{
            "id": "wks-00000002",
            "createdAt": "2026-01-01T10:00:00Z",
            "updatedAt": "2026-01-01T10:00:00Z",
            "sentences": [{"id": "snt-00000001", "text": "x"}]
        }]})
        .to_string();
        let worksheets = decode(&raw).unwrap();
        let sentence = &worksheets[0].sentences()[0];
        assert!(sentence.turnarounds().is_empty());
        assert_eq!(worksheets[0].status(), WorksheetStatus::InProgress);
    }
}
