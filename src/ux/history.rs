//! Conversion history modal
//!
//! Fetches the list of past conversion sessions from the server on every
//! open; nothing is cached locally. Follows the same lifecycle as the
//! preview modal. An empty list is a distinct empty-state display, not an
//! error.

use super::modal::{ModalPhase, ModalSession};
use super::notifications::Notifications;
use crate::api::SessionRecord;

#[derive(Debug, Default)]
pub struct HistoryController {
    session: Option<ModalSession<Vec<SessionRecord>>>,
    pending: bool,
}

impl HistoryController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the modal in its loading state and stage one history fetch.
    pub fn open(&mut self) {
        let session = self
            .session
            .get_or_insert_with(|| ModalSession::new("Conversion History"));
        session.open_loading("Conversion History");
        self.pending = true;
    }

    /// True exactly once per open; the event loop spawns the fetch.
    pub fn take_pending(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    /// Apply the fetch result. Failures keep the modal open showing the
    /// message and also emit an error toast. A result arriving after `close`
    /// is dropped.
    pub fn finish(
        &mut self,
        result: Result<Vec<SessionRecord>, String>,
        notifier: &mut Notifications,
    ) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.is_open() {
            return;
        }
        match result {
            Ok(records) => session.load("Conversion History", records),
            Err(message) => {
                session.fail(message.clone());
                notifier.error(format!("Failed to load history: {message}"));
            }
        }
    }

    /// Close the modal. Idempotent.
    pub fn close(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.close();
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.as_ref().is_some_and(ModalSession::is_open)
    }

    pub fn phase(&self) -> Option<&ModalPhase<Vec<SessionRecord>>> {
        self.session.as_ref().map(ModalSession::phase)
    }

    /// Loaded records, when the fetch has succeeded.
    pub fn records(&self) -> Option<&[SessionRecord]> {
        match self.phase() {
            Some(ModalPhase::Loaded(records)) => Some(records.as_slice()),
            _ => None,
        }
    }
}
