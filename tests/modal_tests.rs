//! Preview and history modal lifecycle tests

use mail2pdf_tui::api::{PreviewResponse, SessionRecord};
use mail2pdf_tui::{HistoryController, ModalPhase, Notifications, PreviewController};
use std::path::PathBuf;

fn record(session_id: &str) -> SessionRecord {
    serde_json::from_str(&format!(
        r#"{{"session_id": "{session_id}", "timestamp": "2026-08-29T10:00:00+00:00",
            "files_processed": 3, "files_success": 2, "files_failed": 1}}"#
    ))
    .unwrap()
}

#[test]
fn preview_failure_keeps_the_modal_open() {
    let mut preview = PreviewController::new();
    let mut sink = Notifications::new();
    preview.open("a.eml", PathBuf::from("/tmp/a.eml"));
    let request = preview.take_pending().expect("one staged fetch");
    assert_eq!(request.file_name, "a.eml");

    preview.finish("a.eml", Err("connection refused".to_string()), &mut sink);
    assert!(preview.is_open(), "errors display inside the modal");
    assert!(matches!(
        preview.phase(),
        Some(ModalPhase::Errored(msg)) if msg == "connection refused"
    ));
    assert!(sink.visible()[0].message.contains("connection refused"));
}

#[test]
fn preview_without_html_uses_the_server_error() {
    let mut preview = PreviewController::new();
    let mut sink = Notifications::new();
    preview.open("a.eml", PathBuf::from("/tmp/a.eml"));
    preview.take_pending();

    let resp: PreviewResponse =
        serde_json::from_str(r#"{"error": "unsupported file type"}"#).unwrap();
    preview.finish("a.eml", Ok(resp), &mut sink);
    assert!(matches!(
        preview.phase(),
        Some(ModalPhase::Errored(msg)) if msg == "unsupported file type"
    ));
}

#[test]
fn preview_result_after_close_is_dropped() {
    let mut preview = PreviewController::new();
    let mut sink = Notifications::new();
    preview.open("a.eml", PathBuf::from("/tmp/a.eml"));
    preview.take_pending();
    preview.close();

    let resp: PreviewResponse = serde_json::from_str(r#"{"html": "<p>late</p>"}"#).unwrap();
    preview.finish("a.eml", Ok(resp), &mut sink);
    assert!(!preview.is_open());
    assert!(sink.is_empty(), "stale results make no noise");
}

#[test]
fn double_close_is_a_no_op() {
    let mut preview = PreviewController::new();
    preview.open("a.eml", PathBuf::from("/tmp/a.eml"));
    preview.close();
    preview.close();
    assert!(!preview.is_open());

    let mut history = HistoryController::new();
    history.close();
    assert!(!history.is_open());
}

#[test]
fn loaded_preview_flattens_html() {
    let mut preview = PreviewController::new();
    let mut sink = Notifications::new();
    preview.open("a.eml", PathBuf::from("/tmp/a.eml"));
    preview.take_pending();

    let resp: PreviewResponse =
        serde_json::from_str(r#"{"html": "<h1>Subject</h1><p>Body text</p>"}"#).unwrap();
    preview.finish("a.eml", Ok(resp), &mut sink);
    let Some(ModalPhase::Loaded(doc)) = preview.phase() else {
        panic!("expected loaded preview");
    };
    assert_eq!(doc.file_name, "a.eml");
    assert!(doc.lines.contains(&"Subject".to_string()));
    assert!(doc.lines.contains(&"Body text".to_string()));
    assert!(sink.is_empty());
}

#[test]
fn empty_history_is_not_an_error() {
    let mut history = HistoryController::new();
    let mut sink = Notifications::new();
    history.open();
    assert!(history.take_pending());
    assert!(!history.take_pending(), "only one fetch per open");

    history.finish(Ok(Vec::new()), &mut sink);
    assert!(matches!(
        history.phase(),
        Some(ModalPhase::Loaded(records)) if records.is_empty()
    ));
    assert!(sink.is_empty());
}

#[test]
fn history_failure_shows_in_modal_and_toast() {
    let mut history = HistoryController::new();
    let mut sink = Notifications::new();
    history.open();
    history.take_pending();

    history.finish(Err("HTTP 500".to_string()), &mut sink);
    assert!(history.is_open());
    assert!(matches!(
        history.phase(),
        Some(ModalPhase::Errored(msg)) if msg == "HTTP 500"
    ));
    assert!(sink.visible()[0]
        .message
        .contains("Failed to load history: HTTP 500"));
}

#[test]
fn history_refetches_on_every_open() {
    let mut history = HistoryController::new();
    let mut sink = Notifications::new();

    history.open();
    history.take_pending();
    history.finish(Ok(vec![record("s1")]), &mut sink);
    assert_eq!(history.records().map(<[_]>::len), Some(1));

    history.close();
    history.open();
    assert!(history.take_pending(), "each open stages a fresh fetch");
    assert!(matches!(history.phase(), Some(ModalPhase::Loading)));
}
