//! Wire models for the conversion server API
//!
//! Shapes match the server's JSON bodies: the upload response carries a
//! per-file `results` array, the preview response either `html` or `error`,
//! and the history endpoint a list of past session summaries.

use chrono::{DateTime, Local};
use serde::Deserialize;

/// Outcome of converting a single file within an upload request.
#[derive(Debug, Clone, Deserialize)]
pub struct FileResult {
    /// Input file name as the server saw it
    #[serde(default)]
    pub input: String,
    /// Generated PDF file name, present on success
    #[serde(default)]
    pub output: Option<String>,
    /// "success" or "error"
    pub status: String,
    /// Server-reported failure reason, present on error
    #[serde(default)]
    pub error: Option<String>,
}

impl FileResult {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Response body of `POST /api/upload`.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub session_id: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub files_processed: u32,
    #[serde(default)]
    pub files_success: u32,
    #[serde(default)]
    pub results: Vec<FileResult>,
}

impl UploadResponse {
    /// The result entry for a single-file upload (retries submit one file).
    pub fn first_result(&self) -> Option<&FileResult> {
        self.results.first()
    }
}

/// Response body of `POST /api/preview`.
///
/// The server sends `html` on success and `error` on failure; both are
/// optional here so a malformed body surfaces as a missing-field error at the
/// call site rather than a parse failure.
#[derive(Debug, Clone, Deserialize)]
pub struct PreviewResponse {
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// One past conversion session, as listed by `GET /api/history`.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionRecord {
    pub session_id: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub files_processed: u32,
    #[serde(default)]
    pub files_success: u32,
    #[serde(default)]
    pub files_failed: u32,
}

impl SessionRecord {
    /// Session timestamp formatted for display in the local timezone.
    /// Falls back to the raw string when it is not a valid RFC 3339 value.
    pub fn local_timestamp(&self) -> String {
        match DateTime::parse_from_rfc3339(&self.timestamp) {
            Ok(dt) => dt
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            Err(_) => self.timestamp.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_response_parses_server_shape() {
        let body = r#"{
            "session_id": "a1b2c3d4",
            "timestamp": "2026-08-29T10:00:00+00:00",
            "files_processed": 2,
            "files_success": 1,
            "results": [
                {"input": "a.eml", "output": "a.pdf", "status": "success"},
                {"input": "b.eml", "status": "error", "error": "PDF generation failed"}
            ]
        }"#;
        let resp: UploadResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.session_id, "a1b2c3d4");
        assert_eq!(resp.results.len(), 2);
        assert!(resp.results[0].is_success());
        assert!(!resp.results[1].is_success());
        assert_eq!(
            resp.results[1].error.as_deref(),
            Some("PDF generation failed")
        );
    }

    #[test]
    fn preview_response_tolerates_either_field() {
        let ok: PreviewResponse = serde_json::from_str(r#"{"html": "<p>hi</p>"}"#).unwrap();
        assert_eq!(ok.html.as_deref(), Some("<p>hi</p>"));
        assert!(ok.error.is_none());

        let err: PreviewResponse = serde_json::from_str(r#"{"error": "unsupported"}"#).unwrap();
        assert!(err.html.is_none());
        assert_eq!(err.error.as_deref(), Some("unsupported"));
    }

    #[test]
    fn session_record_falls_back_to_raw_timestamp() {
        let record: SessionRecord = serde_json::from_str(
            r#"{"session_id": "x", "timestamp": "not-a-date", "files_processed": 0,
                "files_success": 0, "files_failed": 0}"#,
        )
        .unwrap();
        assert_eq!(record.local_timestamp(), "not-a-date");
    }
}
