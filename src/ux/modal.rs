//! Shared modal lifecycle
//!
//! Preview and History follow one state machine:
//! `Closed -> Loading -> {Loaded | Errored} -> Closed`. A session is created
//! lazily on first open and reused across subsequent opens; closing drops any
//! loaded body. Closing an already-closed session is a no-op.

/// Modal content state. `Errored` keeps the modal open, displaying the
/// message in place of content.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalPhase<T> {
    Closed,
    Loading,
    Loaded(T),
    Errored(String),
}

/// Visibility and content of one single-purpose overlay.
#[derive(Debug)]
pub struct ModalSession<T> {
    title: String,
    phase: ModalPhase<T>,
}

impl<T> ModalSession<T> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            phase: ModalPhase::Closed,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn phase(&self) -> &ModalPhase<T> {
        &self.phase
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.phase, ModalPhase::Closed)
    }

    /// Open (or re-open) showing the loading placeholder.
    pub fn open_loading(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.phase = ModalPhase::Loading;
    }

    pub fn load(&mut self, title: impl Into<String>, body: T) {
        self.title = title.into();
        self.phase = ModalPhase::Loaded(body);
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.title = "Error".to_string();
        self.phase = ModalPhase::Errored(message.into());
    }

    /// Close and release any loaded body. Idempotent.
    pub fn close(&mut self) {
        self.phase = ModalPhase::Closed;
    }
}
