//! Retry flow tests
//!
//! Exercises the failed-attempt registry against a mocked server API: a
//! successful retry clears its record, a failed retry preserves it, and
//! refusals never reach the network.

use mail2pdf_tui::api::{
    ApiError, ConversionApi, FileResult, PreviewResponse, SessionRecord, UploadResponse,
};
use mail2pdf_tui::{Notifications, RetryCoordinator, RetryRefusal};
use std::path::{Path, PathBuf};

mockall::mock! {
    ConvertServer {}

    #[async_trait::async_trait]
    impl ConversionApi for ConvertServer {
        async fn upload(&self, file_name: &str, data: Vec<u8>) -> Result<UploadResponse, ApiError>;
        async fn preview(&self, file_name: &str, data: Vec<u8>) -> Result<PreviewResponse, ApiError>;
        async fn history(&self) -> Result<Vec<SessionRecord>, ApiError>;
        async fn download(&self, session_id: &str, dest_dir: &Path) -> Result<PathBuf, ApiError>;
    }
}

fn upload_response(results: Vec<FileResult>) -> UploadResponse {
    let files_success = results.iter().filter(|r| r.is_success()).count() as u32;
    UploadResponse {
        session_id: "session-1".to_string(),
        timestamp: "2026-08-29T10:00:00+00:00".to_string(),
        files_processed: results.len() as u32,
        files_success,
        results,
    }
}

fn success_result(input: &str) -> FileResult {
    FileResult {
        input: input.to_string(),
        output: Some(format!("{input}.pdf")),
        status: "success".to_string(),
        error: None,
    }
}

fn error_result(input: &str, error: &str) -> FileResult {
    FileResult {
        input: input.to_string(),
        output: None,
        status: "error".to_string(),
        error: Some(error.to_string()),
    }
}

fn messages(sink: &Notifications) -> Vec<String> {
    sink.visible().iter().map(|n| n.message.clone()).collect()
}

#[tokio::test]
async fn retry_of_unknown_file_never_hits_the_network() {
    let mut server = MockConvertServer::new();
    server.expect_upload().times(0);

    let mut retry = RetryCoordinator::new();
    let mut sink = Notifications::new();
    let ran = retry.retry("missing.eml", &server, &mut sink).await;

    assert!(!ran);
    assert!(messages(&sink)
        .iter()
        .any(|m| m.contains("File not found: missing.eml")));
}

#[tokio::test]
async fn successful_retry_clears_the_registry_entry() {
    let mut server = MockConvertServer::new();
    server
        .expect_upload()
        .withf(|name, data| name == "a.eml" && *data == [1, 2, 3])
        .times(1)
        .returning(|_, _| Ok(upload_response(vec![success_result("a.eml")])));

    let mut retry = RetryCoordinator::new();
    let mut sink = Notifications::new();
    retry.record_failure("a.eml", "timed out", vec![1, 2, 3]);

    assert!(retry.retry("a.eml", &server, &mut sink).await);
    assert!(retry.get("a.eml").is_none());
    assert!(!retry.is_in_flight("a.eml"));
    assert!(messages(&sink)
        .iter()
        .any(|m| m.contains("a.eml converted successfully")));
}

#[tokio::test]
async fn failed_retry_leaves_the_registry_entry_untouched() {
    let mut server = MockConvertServer::new();
    server
        .expect_upload()
        .times(1)
        .returning(|_, _| Ok(upload_response(vec![error_result("a.eml", "bad header")])));

    let mut retry = RetryCoordinator::new();
    let mut sink = Notifications::new();
    retry.record_failure("a.eml", "original failure", vec![9]);

    assert!(!retry.retry("a.eml", &server, &mut sink).await);
    // The record is preserved exactly, so another retry is possible.
    let attempt = retry.get("a.eml").expect("entry should remain");
    assert_eq!(attempt.error, "original failure");
    assert_eq!(attempt.data, vec![9]);
    assert!(!retry.is_in_flight("a.eml"));
    assert!(messages(&sink).iter().any(|m| m.contains("bad header")));
}

#[tokio::test]
async fn transport_failure_is_reported_and_entry_kept() {
    let mut server = MockConvertServer::new();
    server.expect_upload().times(1).returning(|_, _| {
        Err(ApiError::Status {
            status: 503,
            message: "service unavailable".to_string(),
        })
    });

    let mut retry = RetryCoordinator::new();
    let mut sink = Notifications::new();
    retry.record_failure("a.eml", "first", vec![5]);

    assert!(!retry.retry("a.eml", &server, &mut sink).await);
    assert!(retry.get("a.eml").is_some());
    assert!(messages(&sink)
        .iter()
        .any(|m| m.contains("service unavailable")));
}

#[tokio::test]
async fn in_flight_key_refuses_a_second_attempt() {
    let mut server = MockConvertServer::new();
    server.expect_upload().times(0);

    let mut retry = RetryCoordinator::new();
    let mut sink = Notifications::new();
    retry.record_failure("a.eml", "boom", vec![1]);

    // First begin marks the key in-flight, as the event loop would.
    assert!(retry.begin("a.eml").is_ok());
    assert!(!retry.retry("a.eml", &server, &mut sink).await);
    assert!(messages(&sink)
        .iter()
        .any(|m| m.contains("Retry already in progress for a.eml")));
}

#[tokio::test]
async fn retries_on_distinct_keys_do_not_interfere() {
    let mut server = MockConvertServer::new();
    server
        .expect_upload()
        .withf(|name, _| name == "b.eml")
        .times(1)
        .returning(|_, _| Ok(upload_response(vec![success_result("b.eml")])));

    let mut retry = RetryCoordinator::new();
    let mut sink = Notifications::new();
    retry.record_failure("a.eml", "boom", vec![1]);
    retry.record_failure("b.eml", "boom", vec![2]);

    // A retry is outstanding for a.eml; b.eml may still run.
    assert!(retry.begin("a.eml").is_ok());
    assert!(retry.retry("b.eml", &server, &mut sink).await);
    assert!(retry.get("b.eml").is_none());
    assert!(retry.is_in_flight("a.eml"));
    assert!(retry.get("a.eml").is_some());
}

#[test]
fn refusal_reasons_are_distinct() {
    let mut retry = RetryCoordinator::new();
    assert_eq!(retry.begin("nope"), Err(RetryRefusal::NotFound));
    retry.record_failure("yes.eml", "e", vec![]);
    retry.begin("yes.eml").unwrap();
    assert_eq!(retry.begin("yes.eml"), Err(RetryRefusal::AlreadyInFlight));
}
