//! Application state structures
//!
//! State sub-structures that organize the App's fields into logical
//! groupings for better maintainability and testability.

use std::path::PathBuf;
use tokio::sync::{mpsc, oneshot};

use crate::api::{PreviewResponse, SessionRecord};
use crate::ux::RetryOutcome;

/// Conversion status of one file in the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Pending,
    Converting,
    Done,
    Failed,
}

/// One file selected for conversion.
#[derive(Debug, Clone)]
pub struct BatchFile {
    pub path: PathBuf,
    pub name: String,
    pub status: FileStatus,
}

impl BatchFile {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            path,
            name,
            status: FileStatus::Pending,
        }
    }
}

/// Input mode for the footer line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing a file path to add to the batch
    PathEntry,
}

/// View-related state (selection, scrolling)
#[derive(Debug)]
pub struct ViewState {
    /// Selected index in the file list
    pub selected_index: usize,
    /// Scroll offset for the file list
    pub scroll_offset: usize,
    /// Selected row in the history modal
    pub history_selected: usize,
    /// Scroll offset for the preview modal body
    pub preview_scroll: usize,
    /// Whether the selected failed file shows its full error text
    pub show_error_detail: bool,
    /// Cached page size for scroll clamping (updated each render)
    pub page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            selected_index: 0,
            scroll_offset: 0,
            history_selected: 0,
            preview_scroll: 0,
            show_error_detail: false,
            page_size: 10,
        }
    }
}

/// UI-related state (input mode, help overlay, cached layout)
#[derive(Debug, Default)]
pub struct UIState {
    pub input_mode: InputMode,
    /// Buffer for path-entry mode
    pub input_buffer: String,
    /// Whether to show the help overlay
    pub show_help: bool,
    /// Content area of the currently open modal, for backdrop-click hits
    pub modal_area: Option<ratatui::layout::Rect>,
}

/// Per-file event from the batch conversion task.
#[derive(Debug)]
pub enum ConvertEvent {
    /// One file finished (successfully or not)
    Finished {
        name: String,
        session_id: Option<String>,
        outcome: Result<(), FileFailure>,
    },
    /// The whole batch is done
    Completed,
}

/// Failure payload for one file: the message plus the read bytes, retained so
/// a retry can resubmit without touching the disk again.
#[derive(Debug)]
pub struct FileFailure {
    pub error: String,
    pub data: Vec<u8>,
}

/// Async operation state (staged requests and their result channels)
#[derive(Debug, Default)]
pub struct AsyncState {
    // Batch conversion
    pub batch_pending: bool,
    pub batch_rx: Option<mpsc::UnboundedReceiver<ConvertEvent>>,

    // Retries: one staged key at a time, many may be outstanding
    pub retry_pending: Option<String>,
    pub retry_rx: Vec<(String, oneshot::Receiver<RetryOutcome>)>,

    // Preview fetch
    pub preview_rx: Option<(String, oneshot::Receiver<Result<PreviewResponse, String>>)>,

    // History fetch
    pub history_rx: Option<oneshot::Receiver<Result<Vec<SessionRecord>, String>>>,

    // Downloads are fire-and-forget; results only surface as toasts
    pub download_pending: Vec<String>,
    pub download_rx: Vec<oneshot::Receiver<Result<PathBuf, String>>>,
}
