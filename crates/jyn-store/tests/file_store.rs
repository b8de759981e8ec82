//! File-backed store: persistence across service instances and legacy files.

use chrono::{TimeZone, Utc};
use jyn_core::dashboard::DashboardFilter;
use jyn_core::entities::{Answer3Slot, Answer4Slot, Worksheet};
use jyn_core::selection;
use jyn_core::enums::{InquiryStep, JudgmentQuestion, Language, Stage, TurnaroundType, YesNo};
use jyn_store::migrate::CURRENT_VERSION;
use jyn_store::{FileStore, JournalService, StoreError, WorksheetStore};
use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::TempDir;

fn service(dir: &TempDir) -> JournalService<FileStore> {
    JournalService::new(
        FileStore::new(dir.path().join("jyn").join("worksheets.json")),
        Language::En,
    )
}

#[test]
fn missing_file_is_an_empty_store() {
    let dir = TempDir::new().unwrap();
    let svc = service(&dir);
    assert!(svc.store().list_all().unwrap().is_empty());
    assert!(!svc.store().path().exists());
}

#[test]
fn progress_survives_a_restart() {
    let dir = TempDir::new().unwrap();
    let (id, sid) = {
        let mut svc = service(&dir);
        let id = svc.create_worksheet().unwrap().worksheet_id;
        svc.set_entry(&id, JudgmentQuestion::WhoUpsetsYou, 0, "Paul")
            .unwrap();
        let sid = svc
            .add_sentence(&id, "Paul should listen", 4)
            .unwrap()
            .sentence_id
            .unwrap();
        svc.answer_yes_no(&id, &sid, 0, YesNo::Yes).unwrap();
        svc.add_turnaround(&id, &sid, TurnaroundType::ToSelf).unwrap();
        (id, sid)
    };

    let svc = service(&dir);
    let worksheet = svc.load(&id).unwrap();
    let sentence = worksheet.sentence(&sid).unwrap();
    assert_eq!(sentence.answer(InquiryStep::Q1), Some("YES"));
    assert_eq!(sentence.completed_questions(), 1);
    assert_eq!(sentence.turnarounds().len(), 1);

    let resume = svc.resume_worksheet(&id).unwrap().navigation.unwrap();
    assert_eq!(resume.stage, Stage::Inquiry);
    assert_eq!(resume.question_index, Some(1));
}

fn populated_worksheet() -> Worksheet {
    let created = Utc.with_ymd_and_hms(2026, 1, 5, 9, 30, 0).unwrap();
    let mut ws = Worksheet::blank(created).unwrap();
    ws.set_entry(JudgmentQuestion::WhoUpsetsYou, 0, "Paul, he ignores me")
        .unwrap();
    let extra = ws.add_entry(JudgmentQuestion::HowShouldTheyChange);
    ws.set_entry(JudgmentQuestion::HowShouldTheyChange, extra, "Paul should call")
        .unwrap();

    let sid = selection::add_sentence(&mut ws, "Paul ignores me", 1)
        .unwrap()
        .unwrap();
    let sentence = ws.sentence_mut(&sid).unwrap();
    sentence.set_answer(InquiryStep::Q1, "NO").unwrap();
    sentence.set_answer(InquiryStep::Q3, "I feel small").unwrap();
    sentence.set_answer3_sub(Answer3Slot::BodyLocation, "chest");
    sentence.set_answer4_sub(Answer4Slot::WhoNowMoment, "calm");
    sentence.set_answer(InquiryStep::Q4, "I would listen").unwrap();
    let tid = sentence
        .add_turnaround(TurnaroundType::ToSelf)
        .unwrap()
        .id
        .clone();
    sentence.set_turnaround_text(&tid, "I ignore me").unwrap();
    sentence.add_example(&tid, "I skip lunch").unwrap();
    sentence.add_example(&tid, "I dismiss my ideas").unwrap();
    sentence.add_turnaround(TurnaroundType::ToOther).unwrap();
    ws
}

#[test]
fn populated_worksheet_reloads_unchanged_except_updated_at() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("worksheets.json");
    let original = populated_worksheet();

    let saved = FileStore::new(&path).upsert(original.clone()).unwrap();
    assert!(saved.updated_at() > original.updated_at());
    assert_eq!(saved.created_at(), original.created_at());

    let loaded = FileStore::new(&path).get(original.id()).unwrap().unwrap();
    assert_eq!(loaded, saved);

    let mut expected = original;
    expected.touch(loaded.updated_at());
    assert_eq!(loaded, expected);

    let sentence = &loaded.sentences()[0];
    assert_eq!(sentence.completed_questions(), 3);
    assert_eq!(sentence.completed_turnarounds(), 1);
    assert_eq!(sentence.answer3_sub_questions().answered(), 1);
    assert_eq!(sentence.answer4_sub_questions().answered(), 1);
}

#[test]
fn saved_document_is_versioned() {
    let dir = TempDir::new().unwrap();
    let mut svc = service(&dir);
    svc.create_worksheet().unwrap();

    let raw = std::fs::read_to_string(svc.store().path()).unwrap();
    let doc: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(doc["v"], CURRENT_VERSION);
    assert_eq!(doc["worksheets"].as_array().unwrap().len(), 1);
    assert_eq!(doc["worksheets"][0]["status"], "in-progress");
}

#[test]
fn legacy_file_is_upgraded_on_next_save() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("jyn").join("worksheets.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        &path,
        r#"[{
            "id": "wks-legacy01",
            "createdAt": "2024-03-01T10:00:00Z",
            "updatedAt": "2024-03-01T10:00:00Z",
            "status": "in-progress",
            "question1": "Paul",
            "question5": "Paul is careless",
            "sentences": [{
                "id": "snt-legacy01",
                "text": "Paul is careless",
                "sourceQuestion": 5,
                "answer1": "NO",
                "completedQuestions": 4,
                "turnarounds": []
            }]
        }]"#,
    )
    .unwrap();

    let mut svc = service(&dir);
    let listed = svc.list_worksheets(DashboardFilter::All, Some("careless")).unwrap();
    assert_eq!(listed.total, 1);

    let worksheet = svc.load("wks-legacy01").unwrap();
    assert_eq!(worksheet.entries(JudgmentQuestion::WhoUpsetsYou), ["Paul"]);
    assert_eq!(
        worksheet.sentence("snt-legacy01").unwrap().completed_questions(),
        1
    );

    svc.add_entry("wks-legacy01", JudgmentQuestion::Needs).unwrap();
    let doc: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(doc["v"], CURRENT_VERSION);
    assert_eq!(doc["worksheets"][0]["question1"][0], "Paul");
}

#[test]
fn newer_document_version_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("jyn").join("worksheets.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, r#"{ "v": 9, "worksheets": [] }"#).unwrap();

    let svc = service(&dir);
    assert!(matches!(
        svc.store().list_all(),
        Err(StoreError::UnsupportedVersion(9))
    ));
}
