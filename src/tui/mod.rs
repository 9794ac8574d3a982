//! TUI module
//!
//! Terminal front-end for the conversion server, built with ratatui. A single
//! event loop owns all state: staged async work is picked up here, spawned
//! onto tokio, and its results are polled back in non-blocking.

mod app;
mod constants;
mod keybindings;
mod theme;
pub mod views;

pub use app::*;
pub use theme::*;

use crate::api::ConversionApi;
use crate::config::Config;
use crate::tui::app::state::{ConvertEvent, FileFailure};
use crate::ux;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// Upload each file in order, streaming one event per file and a final
/// completion marker. Runs on a spawned task; the receiver applies results.
async fn run_batch(request: BatchRequest) {
    let BatchRequest { files, api, tx } = request;
    for (name, path) in files {
        let outcome = convert_one(api.as_ref(), &name, &path).await;
        let (session_id, outcome) = match outcome {
            Ok(session_id) => (Some(session_id), Ok(())),
            Err(failure) => (None, Err(failure)),
        };
        if tx
            .send(ConvertEvent::Finished {
                name,
                session_id,
                outcome,
            })
            .is_err()
        {
            // Receiver is gone; the TUI shut down mid-batch
            return;
        }
    }
    let _ = tx.send(ConvertEvent::Completed);
}

/// Convert one file: read it, upload it, reduce the response. Returns the
/// session id on success; failures carry the read bytes so a retry can
/// resubmit without touching the disk again.
async fn convert_one(
    api: &dyn ConversionApi,
    name: &str,
    path: &PathBuf,
) -> Result<String, FileFailure> {
    let data = match tokio::fs::read(path).await {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", path.display(), e);
            return Err(FileFailure {
                error: format!("Failed to read file: {e}"),
                data: Vec::new(),
            });
        }
    };
    match api.upload(name, data.clone()).await {
        Ok(resp) => match ux::retry::evaluate_upload(&resp) {
            Ok(()) => Ok(resp.session_id),
            Err(error) => Err(FileFailure { error, data }),
        },
        Err(e) => Err(FileFailure {
            error: e.to_string(),
            data,
        }),
    }
}

/// Run the TUI application
pub async fn run_tui(
    config: Config,
    theme: Theme,
    api: Arc<dyn ConversionApi>,
    initial_files: Vec<PathBuf>,
) -> Result<()> {
    tracing::debug!("Initializing TUI");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let enable_mouse = config.ui.enable_mouse;
    if enable_mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, theme, api, initial_files);

    tracing::debug!("TUI initialized, entering main loop");

    loop {
        terminal.draw(|f| app.render(f))?;

        if let Some(request) = app.trigger_batch() {
            tokio::spawn(run_batch(request));
        }

        if let Some(request) = app.trigger_retry() {
            tokio::spawn(async move {
                let outcome =
                    ux::retry::submit(request.api.as_ref(), &request.file_name, request.data)
                        .await;
                let _ = request.tx.send(outcome);
            });
        }

        if let Some((request, api, tx)) = app.trigger_preview() {
            tokio::spawn(async move {
                let result = match tokio::fs::read(&request.path).await {
                    Ok(data) => api
                        .preview(&request.file_name, data)
                        .await
                        .map_err(|e| e.to_string()),
                    Err(e) => Err(format!("Failed to read file: {e}")),
                };
                let _ = tx.send(result);
            });
        }

        if let Some((api, tx)) = app.trigger_history() {
            tokio::spawn(async move {
                let result = api.history().await.map_err(|e| e.to_string());
                let _ = tx.send(result);
            });
        }

        for request in app.trigger_downloads() {
            tokio::spawn(async move {
                let result = request
                    .api
                    .download(&request.session_id, &request.dest_dir)
                    .await
                    .map_err(|e| e.to_string());
                let _ = request.tx.send(result);
            });
        }

        app.poll_async();

        // Handle input events (non-blocking)
        if event::poll(std::time::Duration::from_millis(constants::EVENT_POLL_MS))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key) == Some(true) {
                        break;
                    }
                }
                Event::Mouse(mouse) if enable_mouse => {
                    app.handle_mouse(mouse);
                }
                _ => {}
            }
        }
    }

    tracing::debug!("TUI shutting down");

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if enable_mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    Ok(())
}
