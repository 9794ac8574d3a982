//! Document preview modal
//!
//! Fetches a rendered preview of a single file and manages the modal's
//! open/loading/error/closed lifecycle. The returned HTML is flattened to
//! text lines for terminal display.

use super::modal::{ModalPhase, ModalSession};
use super::notifications::Notifications;
use crate::api::PreviewResponse;
use std::path::PathBuf;

/// A staged preview fetch, consumed by the event loop which spawns the
/// actual request.
#[derive(Debug, Clone)]
pub struct PreviewRequest {
    pub file_name: String,
    pub path: PathBuf,
}

/// Rendered preview content.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewDocument {
    pub file_name: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Default)]
pub struct PreviewController {
    // Created on first open, reused afterwards
    session: Option<ModalSession<PreviewDocument>>,
    pending: Option<PreviewRequest>,
}

impl PreviewController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the modal in its loading state and stage one fetch for the file.
    pub fn open(&mut self, file_name: &str, path: PathBuf) {
        let session = self
            .session
            .get_or_insert_with(|| ModalSession::new("Preview"));
        session.open_loading(format!("Loading: {file_name}..."));
        self.pending = Some(PreviewRequest {
            file_name: file_name.to_string(),
            path,
        });
    }

    /// Take the staged request, if any. Called once per event-loop tick.
    pub fn take_pending(&mut self) -> Option<PreviewRequest> {
        self.pending.take()
    }

    /// Apply the fetch result. A missing `html` field counts as a failure,
    /// using the server's `error` message when it sent one. The modal stays
    /// open either way; a result arriving after `close` is dropped.
    pub fn finish(
        &mut self,
        file_name: &str,
        result: Result<PreviewResponse, String>,
        notifier: &mut Notifications,
    ) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.is_open() {
            return;
        }
        let failure = match result {
            Ok(resp) => match resp.html {
                Some(html) => {
                    session.load(
                        format!("Preview: {file_name}"),
                        PreviewDocument {
                            file_name: file_name.to_string(),
                            lines: html_to_lines(&html),
                        },
                    );
                    return;
                }
                None => resp.error.unwrap_or_else(|| "unknown error".to_string()),
            },
            Err(message) => message,
        };
        session.fail(failure.clone());
        notifier.error(format!("Preview error: {failure}"));
    }

    /// Close the modal and release the loaded document. Idempotent.
    pub fn close(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.close();
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.as_ref().is_some_and(ModalSession::is_open)
    }

    pub fn title(&self) -> Option<&str> {
        self.session.as_ref().map(ModalSession::title)
    }

    pub fn phase(&self) -> Option<&ModalPhase<PreviewDocument>> {
        self.session.as_ref().map(ModalSession::phase)
    }
}

/// Flatten an HTML fragment to displayable text lines: tags stripped, block
/// boundaries turned into line breaks, common entities decoded.
pub fn html_to_lines(html: &str) -> Vec<String> {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    let mut tag = String::new();
    for c in html.chars() {
        match c {
            '<' => {
                in_tag = true;
                tag.clear();
            }
            '>' if in_tag => {
                in_tag = false;
                let name = tag
                    .trim_start_matches('/')
                    .split_whitespace()
                    .next()
                    .unwrap_or("")
                    .to_ascii_lowercase();
                if matches!(
                    name.as_str(),
                    "p" | "div" | "br" | "tr" | "li" | "h1" | "h2" | "h3" | "h4" | "table"
                ) {
                    text.push('\n');
                }
            }
            _ if in_tag => tag.push(c),
            _ => text.push(c),
        }
    }
    let text = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");
    text.lines()
        .map(str::trim_end)
        .skip_while(|l| l.is_empty())
        .map(|l| l.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_strips_tags_and_breaks_blocks() {
        let lines = html_to_lines("<html><body><h1>Subject</h1><p>Hello &amp; bye</p></body></html>");
        assert!(lines.contains(&"Subject".to_string()));
        assert!(lines.contains(&"Hello & bye".to_string()));
    }

    #[test]
    fn reopen_reuses_the_session() {
        let mut preview = PreviewController::new();
        preview.open("a.eml", PathBuf::from("/tmp/a.eml"));
        assert!(preview.is_open());
        preview.close();
        assert!(!preview.is_open());
        preview.open("b.eml", PathBuf::from("/tmp/b.eml"));
        assert!(preview.is_open());
        assert_eq!(preview.title(), Some("Loading: b.eml..."));
    }
}
