//! HTTP client for the conversion server

use super::models::{PreviewResponse, SessionRecord, UploadResponse};
use super::ApiError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use url::Url;

/// Network seam for everything the client asks of the conversion server.
///
/// The TUI only ever talks to this trait, so tests can substitute a mock and
/// exercise the retry/preview/history flows without a server.
#[async_trait]
pub trait ConversionApi: Send + Sync {
    /// Submit one file for conversion (multipart POST to `/api/upload`).
    async fn upload(&self, file_name: &str, data: Vec<u8>) -> Result<UploadResponse, ApiError>;

    /// Request a rendered preview of one file (`/api/preview`).
    async fn preview(&self, file_name: &str, data: Vec<u8>) -> Result<PreviewResponse, ApiError>;

    /// List past conversion sessions (`/api/history`).
    async fn history(&self) -> Result<Vec<SessionRecord>, ApiError>;

    /// Fetch a session's result ZIP into `dest_dir`, returning the written path.
    async fn download(&self, session_id: &str, dest_dir: &Path) -> Result<PathBuf, ApiError>;
}

/// `ConversionApi` implementation backed by reqwest.
pub struct HttpConvertClient {
    base: Url,
    http: reqwest::Client,
}

impl HttpConvertClient {
    pub fn new(base: Url) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("mail2pdf-tui/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { base, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base.join(path)?)
    }

    fn file_part(file_name: &str, data: Vec<u8>) -> reqwest::multipart::Part {
        reqwest::multipart::Part::bytes(data).file_name(file_name.to_string())
    }
}

/// Resolve a non-2xx response into `ApiError::Status`, preferring the
/// server's JSON `{error}` message over the raw body.
async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.as_str())
                .map(|s| s.to_string())
        })
        .unwrap_or(body);
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl ConversionApi for HttpConvertClient {
    async fn upload(&self, file_name: &str, data: Vec<u8>) -> Result<UploadResponse, ApiError> {
        let url = self.endpoint("api/upload")?;
        tracing::debug!("Uploading {} ({} bytes) to {}", file_name, data.len(), url);

        let form =
            reqwest::multipart::Form::new().part("files", Self::file_part(file_name, data));
        let resp = self.http.post(url).multipart(form).send().await?;
        let resp = check_status(resp).await?;
        Ok(resp.json::<UploadResponse>().await?)
    }

    async fn preview(&self, file_name: &str, data: Vec<u8>) -> Result<PreviewResponse, ApiError> {
        let url = self.endpoint("api/preview")?;
        tracing::debug!("Requesting preview for {} from {}", file_name, url);

        let form = reqwest::multipart::Form::new().part("file", Self::file_part(file_name, data));
        let resp = self.http.post(url).multipart(form).send().await?;
        let resp = check_status(resp).await?;
        Ok(resp.json::<PreviewResponse>().await?)
    }

    async fn history(&self) -> Result<Vec<SessionRecord>, ApiError> {
        let url = self.endpoint("api/history")?;
        tracing::debug!("Fetching conversion history from {}", url);

        let resp = self.http.get(url).send().await?;
        let resp = check_status(resp).await?;
        Ok(resp.json::<Vec<SessionRecord>>().await?)
    }

    async fn download(&self, session_id: &str, dest_dir: &Path) -> Result<PathBuf, ApiError> {
        let url = self.endpoint(&format!("api/download/{session_id}"))?;
        tracing::debug!("Downloading session {} from {}", session_id, url);

        let resp = self.http.get(url).send().await?;
        let resp = check_status(resp).await?;
        let bytes = resp.bytes().await?;

        tokio::fs::create_dir_all(dest_dir).await?;
        let dest = dest_dir.join(format!("mail2pdf_{session_id}.zip"));
        tokio::fs::write(&dest, &bytes).await?;
        tracing::info!(
            "Session {} downloaded to {} ({} bytes)",
            session_id,
            dest.display(),
            bytes.len()
        );
        Ok(dest)
    }
}
