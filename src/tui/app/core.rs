//! Application state and main TUI logic

use super::state::{AsyncState, BatchFile, FileStatus, InputMode, UIState, ViewState};
use crate::api::ConversionApi;
use crate::config::Config;
use crate::tui::Theme;
use crate::ux::{
    notifications::Severity, HistoryController, Notifications, PreviewController, ProgressTracker,
    RetryCoordinator,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Main application state
pub struct App {
    // Core data
    pub(crate) config: Config,
    pub(crate) theme: Theme,
    pub(crate) api: Arc<dyn ConversionApi>,
    pub(crate) files: Vec<BatchFile>,

    // UX components (each exclusively owns its state)
    pub(crate) notifications: Notifications,
    pub(crate) progress: ProgressTracker,
    pub(crate) retry: RetryCoordinator,
    pub(crate) preview: PreviewController,
    pub(crate) history: HistoryController,

    // Organized state
    pub(crate) view_state: ViewState,
    pub(crate) ui_state: UIState,
    pub(crate) async_state: AsyncState,

    /// Session id of the most recent successful upload, for Ctrl+D
    pub(crate) last_session: Option<String>,
}

impl App {
    pub fn new(
        config: Config,
        theme: Theme,
        api: Arc<dyn ConversionApi>,
        initial_files: Vec<PathBuf>,
    ) -> Self {
        let files = initial_files.into_iter().map(BatchFile::new).collect();
        Self {
            config,
            theme,
            api,
            files,
            notifications: Notifications::new(),
            progress: ProgressTracker::new(),
            retry: RetryCoordinator::new(),
            preview: PreviewController::new(),
            history: HistoryController::new(),
            view_state: ViewState::default(),
            ui_state: UIState::default(),
            async_state: AsyncState::default(),
            last_session: None,
        }
    }

    /// Configured auto-dismiss duration for toasts (None = persist).
    pub(crate) fn toast_duration(&self) -> Option<Duration> {
        (self.config.ui.notification_secs > 0)
            .then(|| Duration::from_secs(self.config.ui.notification_secs))
    }

    /// Show a notification using the configured duration.
    pub(crate) fn toast(&mut self, message: impl Into<String>, severity: Severity) {
        let duration = self.toast_duration();
        self.notifications.show(message, severity, duration);
    }

    /// Add a file to the batch, rejecting paths that do not exist and
    /// duplicates by file name.
    pub fn add_file(&mut self, path: PathBuf) {
        if !path.is_file() {
            self.toast(
                format!("Not a file: {}", path.display()),
                Severity::Warning,
            );
            return;
        }
        let file = BatchFile::new(path);
        if self.files.iter().any(|f| f.name == file.name) {
            self.toast(
                format!("{} is already in the batch", file.name),
                Severity::Warning,
            );
            return;
        }
        self.toast(format!("Added {}", file.name), Severity::Info);
        self.files.push(file);
    }

    /// Remove the selected file from the batch (not while converting).
    pub fn remove_selected(&mut self) {
        if self.progress.is_running() {
            self.toast("Cannot remove files mid-conversion", Severity::Warning);
            return;
        }
        if self.view_state.selected_index < self.files.len() {
            let removed = self.files.remove(self.view_state.selected_index);
            self.toast(format!("Removed {}", removed.name), Severity::Info);
            if self.view_state.selected_index >= self.files.len() && !self.files.is_empty() {
                self.view_state.selected_index = self.files.len() - 1;
            }
        }
    }

    /// Request a conversion of all pending files. The event loop picks the
    /// staged batch up and spawns the upload task.
    pub fn start_conversion(&mut self) {
        if self.progress.is_running() || self.async_state.batch_rx.is_some() {
            self.toast("A conversion is already running", Severity::Warning);
            return;
        }
        let pending = self
            .files
            .iter()
            .filter(|f| f.status != FileStatus::Done)
            .count();
        if pending == 0 {
            self.toast("No files to convert", Severity::Warning);
            return;
        }
        self.async_state.batch_pending = true;
    }

    /// Stage a retry for the selected file, if it has a failure record.
    pub fn request_retry_selected(&mut self) {
        let Some(file) = self.files.get(self.view_state.selected_index) else {
            return;
        };
        if file.status != FileStatus::Failed {
            self.toast(
                format!("{} has not failed; nothing to retry", file.name),
                Severity::Info,
            );
            return;
        }
        self.async_state.retry_pending = Some(file.name.clone());
    }

    /// Open the preview modal for the selected file.
    pub fn request_preview_selected(&mut self) {
        let Some(file) = self.files.get(self.view_state.selected_index) else {
            return;
        };
        self.view_state.preview_scroll = 0;
        self.preview.open(&file.name, file.path.clone());
    }

    /// Open the history modal, re-fetching the session list.
    pub fn open_history(&mut self) {
        self.view_state.history_selected = 0;
        self.history.open();
    }

    /// Queue a fire-and-forget download of a session's result archive.
    pub fn request_download(&mut self, session_id: String) {
        self.toast(
            format!("Downloading session {session_id}..."),
            Severity::Info,
        );
        self.async_state.download_pending.push(session_id);
    }

    /// Download the most recent successful session, if any.
    pub fn request_download_last(&mut self) {
        match self.last_session.clone() {
            Some(session_id) => self.request_download(session_id),
            None => self.toast("No completed conversion to download", Severity::Warning),
        }
    }

    /// Directory downloads are written to.
    pub(crate) fn download_dir(&self) -> PathBuf {
        self.config
            .download_dir
            .clone()
            .unwrap_or_else(crate::config::paths::default_download_dir)
    }

    /// Mark a file's status by name.
    pub(crate) fn set_file_status(&mut self, name: &str, status: FileStatus) {
        if let Some(file) = self.files.iter_mut().find(|f| f.name == name) {
            file.status = status;
        }
    }

    /// True while any modal overlay is on top of the file list.
    pub(crate) fn modal_open(&self) -> bool {
        self.preview.is_open() || self.history.is_open()
    }

    pub fn files(&self) -> &[BatchFile] {
        &self.files
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn retry_coordinator(&self) -> &RetryCoordinator {
        &self.retry
    }

    #[allow(dead_code)] // Used in tests
    pub fn input_mode(&self) -> InputMode {
        self.ui_state.input_mode
    }
}
