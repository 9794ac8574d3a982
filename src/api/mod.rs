//! Conversion server API
//!
//! Defines the wire models and the `ConversionApi` trait the rest of the
//! client talks through, plus the reqwest-backed implementation.

mod client;
mod models;

pub use client::{ConversionApi, HttpConvertClient};
pub use models::{FileResult, PreviewResponse, SessionRecord, UploadResponse};

use thiserror::Error;

/// Errors produced by conversion server requests.
///
/// `Transport` covers network and body-decoding failures, `Status` a non-2xx
/// response (with the server's error message when it sent one), and
/// `MissingField` a 2xx body that lacks an expected field.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("response is missing the `{0}` field")]
    MissingField(&'static str),

    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("failed to write download: {0}")]
    Io(#[from] std::io::Error),
}
