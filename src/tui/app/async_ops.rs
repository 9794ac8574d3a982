//! Async operation management
//!
//! Staged requests are turned into spawned tasks by the event loop via the
//! `trigger_*` methods; results come back over channels and are applied by
//! the `poll_*` methods. All state mutation stays on the loop thread.

use super::core::App;
use super::state::{ConvertEvent, FileStatus};
use crate::api::ConversionApi;
use crate::ux::notifications::Severity;
use crate::ux::preview::PreviewRequest;
use crate::ux::RetryOutcome;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{mpsc, oneshot};

/// Request to convert the pending batch
pub struct BatchRequest {
    /// (file name, path) pairs in batch order
    pub files: Vec<(String, PathBuf)>,
    pub api: Arc<dyn ConversionApi>,
    /// Channel streaming per-file events back to the loop
    pub tx: mpsc::UnboundedSender<ConvertEvent>,
}

/// Request to retry one failed file
pub struct RetryRequest {
    pub file_name: String,
    pub data: Vec<u8>,
    pub api: Arc<dyn ConversionApi>,
    pub tx: oneshot::Sender<RetryOutcome>,
}

/// Request to download one session archive
pub struct DownloadRequest {
    pub session_id: String,
    pub dest_dir: PathBuf,
    pub api: Arc<dyn ConversionApi>,
    pub tx: oneshot::Sender<Result<PathBuf, String>>,
}

impl App {
    /// Trigger the batch conversion if one is staged
    pub fn trigger_batch(&mut self) -> Option<BatchRequest> {
        if !self.async_state.batch_pending {
            return None;
        }
        self.async_state.batch_pending = false;

        let files: Vec<(String, PathBuf)> = self
            .files
            .iter()
            .filter(|f| f.status != FileStatus::Done)
            .map(|f| (f.name.clone(), f.path.clone()))
            .collect();
        if files.is_empty() {
            return None;
        }

        self.progress.start(files.len());
        let names: Vec<String> = files.iter().map(|(name, _)| name.clone()).collect();
        for name in &names {
            self.set_file_status(name, FileStatus::Converting);
        }

        let (tx, rx) = mpsc::unbounded_channel();
        self.async_state.batch_rx = Some(rx);
        Some(BatchRequest {
            files,
            api: self.api.clone(),
            tx,
        })
    }

    /// Drain per-file batch events (non-blocking)
    pub fn poll_batch_events(&mut self) {
        let Some(mut rx) = self.async_state.batch_rx.take() else {
            return;
        };
        let mut done = false;
        while let Ok(event) = rx.try_recv() {
            match event {
                ConvertEvent::Finished {
                    name,
                    session_id,
                    outcome,
                } => {
                    self.progress.increment(&name);
                    match outcome {
                        Ok(()) => {
                            self.set_file_status(&name, FileStatus::Done);
                            if let Some(id) = session_id {
                                self.last_session = Some(id);
                            }
                        }
                        Err(failure) => {
                            self.set_file_status(&name, FileStatus::Failed);
                            self.retry
                                .record_failure(&name, &failure.error, failure.data);
                            self.toast(
                                format!("{}: {}", name, failure.error),
                                Severity::Error,
                            );
                        }
                    }
                }
                ConvertEvent::Completed => {
                    self.progress.complete(&mut self.notifications);
                    done = true;
                }
            }
        }
        if !done {
            self.async_state.batch_rx = Some(rx);
        }
    }

    /// Trigger a retry if one is staged. Refusals (unknown file, retry
    /// already outstanding) are surfaced here and spawn nothing.
    pub fn trigger_retry(&mut self) -> Option<RetryRequest> {
        let file_name = self.async_state.retry_pending.take()?;
        match self.retry.begin(&file_name) {
            Ok(data) => {
                self.toast(format!("Retrying {file_name}..."), Severity::Info);
                let (tx, rx) = oneshot::channel();
                self.async_state.retry_rx.push((file_name.clone(), rx));
                Some(RetryRequest {
                    file_name,
                    data,
                    api: self.api.clone(),
                    tx,
                })
            }
            Err(refusal) => {
                self.retry
                    .notify_refusal(&file_name, refusal, &mut self.notifications);
                None
            }
        }
    }

    /// Poll outstanding retries; completed ones update the registry and the
    /// file list. Retries on different keys may finish in any order.
    pub fn poll_retries(&mut self) {
        let mut pending = std::mem::take(&mut self.async_state.retry_rx);
        pending.retain_mut(|(name, rx)| match rx.try_recv() {
            Ok(outcome) => {
                let succeeded = self.retry.finish(&outcome, &mut self.notifications);
                let status = if succeeded {
                    FileStatus::Done
                } else {
                    FileStatus::Failed
                };
                self.set_file_status(name, status);
                false
            }
            Err(oneshot::error::TryRecvError::Empty) => true,
            Err(_) => {
                // Task dropped the sender; treat like a transport failure
                let outcome = RetryOutcome {
                    file_name: name.clone(),
                    result: Err("retry task failed".to_string()),
                };
                self.retry.finish(&outcome, &mut self.notifications);
                false
            }
        });
        self.async_state.retry_rx = pending;
    }

    /// Trigger a preview fetch if one is staged
    pub fn trigger_preview(
        &mut self,
    ) -> Option<(
        PreviewRequest,
        Arc<dyn ConversionApi>,
        oneshot::Sender<Result<crate::api::PreviewResponse, String>>,
    )> {
        let request = self.preview.take_pending()?;
        let (tx, rx) = oneshot::channel();
        self.async_state.preview_rx = Some((request.file_name.clone(), rx));
        Some((request, self.api.clone(), tx))
    }

    /// Poll the preview fetch
    pub fn poll_preview(&mut self) {
        let Some((name, mut rx)) = self.async_state.preview_rx.take() else {
            return;
        };
        match rx.try_recv() {
            Ok(result) => {
                self.preview.finish(&name, result, &mut self.notifications);
            }
            Err(oneshot::error::TryRecvError::Empty) => {
                self.async_state.preview_rx = Some((name, rx));
            }
            Err(_) => {
                self.preview.finish(
                    &name,
                    Err("preview task failed".to_string()),
                    &mut self.notifications,
                );
            }
        }
    }

    /// Trigger a history fetch if one is staged
    pub fn trigger_history(
        &mut self,
    ) -> Option<(
        Arc<dyn ConversionApi>,
        oneshot::Sender<Result<Vec<crate::api::SessionRecord>, String>>,
    )> {
        if !self.history.take_pending() {
            return None;
        }
        let (tx, rx) = oneshot::channel();
        self.async_state.history_rx = Some(rx);
        Some((self.api.clone(), tx))
    }

    /// Poll the history fetch
    pub fn poll_history(&mut self) {
        let Some(mut rx) = self.async_state.history_rx.take() else {
            return;
        };
        match rx.try_recv() {
            Ok(result) => self.history.finish(result, &mut self.notifications),
            Err(oneshot::error::TryRecvError::Empty) => {
                self.async_state.history_rx = Some(rx);
            }
            Err(_) => self.history.finish(
                Err("history task failed".to_string()),
                &mut self.notifications,
            ),
        }
    }

    /// Trigger queued downloads (fire-and-forget; results become toasts)
    pub fn trigger_downloads(&mut self) -> Vec<DownloadRequest> {
        let pending = std::mem::take(&mut self.async_state.download_pending);
        pending
            .into_iter()
            .map(|session_id| {
                let (tx, rx) = oneshot::channel();
                self.async_state.download_rx.push(rx);
                DownloadRequest {
                    session_id,
                    dest_dir: self.download_dir(),
                    api: self.api.clone(),
                    tx,
                }
            })
            .collect()
    }

    /// Poll outstanding downloads
    pub fn poll_downloads(&mut self) {
        let mut pending = std::mem::take(&mut self.async_state.download_rx);
        pending.retain_mut(|rx| match rx.try_recv() {
            Ok(Ok(path)) => {
                self.toast(
                    format!("Saved to {}", path.display()),
                    Severity::Success,
                );
                false
            }
            Ok(Err(message)) => {
                self.toast(format!("Download failed: {message}"), Severity::Error);
                false
            }
            Err(oneshot::error::TryRecvError::Empty) => true,
            Err(_) => {
                self.toast("Download task failed", Severity::Error);
                false
            }
        });
        self.async_state.download_rx = pending;
    }

    /// Run all non-blocking polls plus notification timers. Called once per
    /// event-loop tick.
    pub fn poll_async(&mut self) {
        self.poll_batch_events();
        self.poll_retries();
        self.poll_preview();
        self.poll_history();
        self.poll_downloads();
        self.notifications.sweep(Instant::now());
    }
}
