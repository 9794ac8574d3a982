//! Event handling for the application
//!
//! All input handling: keyboard navigation, the path-entry input mode, the
//! modal dismissal rules, and backdrop clicks when mouse support is enabled.

use super::core::App;
use super::state::{FileStatus, InputMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::path::PathBuf;

impl App {
    /// Main keyboard event handler
    ///
    /// Returns Some(true) to quit, Some(false)/None to continue.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<bool> {
        if self.ui_state.input_mode == InputMode::PathEntry {
            self.handle_path_entry_key(key);
            return None;
        }

        // Help overlay swallows everything except its dismissal keys
        if self.ui_state.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.ui_state.show_help = false;
            }
            return None;
        }

        // Global shortcuts, also active while a modal is open
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('o') => {
                    self.enter_path_entry();
                    return None;
                }
                KeyCode::Enter => {
                    self.start_conversion();
                    return None;
                }
                KeyCode::Char('d') => {
                    self.request_download_last();
                    return None;
                }
                _ => {}
            }
        }

        if self.history.is_open() {
            return self.handle_history_key(key);
        }
        if self.preview.is_open() {
            return self.handle_preview_key(key);
        }

        match key.code {
            KeyCode::Char('q') => return Some(true),
            KeyCode::Esc => {
                // Dismiss the oldest toast first; quit from a quiet screen
                if !self.notifications.is_empty() {
                    self.notifications.dismiss_oldest();
                    return None;
                }
                return Some(true);
            }
            KeyCode::Char('?') => self.ui_state.show_help = true,
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_previous(),
            KeyCode::Char('o') => self.enter_path_entry(),
            KeyCode::Char('c') => self.start_conversion(),
            KeyCode::Char('p') | KeyCode::Enter => self.request_preview_selected(),
            KeyCode::Char('r') => self.request_retry_selected(),
            KeyCode::Char('e') => self.toggle_error_detail(),
            KeyCode::Char('h') => self.open_history(),
            KeyCode::Char('d') => self.request_download_last(),
            KeyCode::Char('x') => self.remove_selected(),
            _ => {}
        }
        None
    }

    /// Mouse events: a left click outside an open modal's content closes it
    /// (the backdrop-click dismissal). Ignored while no modal is open.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if !self.modal_open() {
            return;
        }
        let inside = self.ui_state.modal_area.is_some_and(|area| {
            event.column >= area.x
                && event.column < area.x + area.width
                && event.row >= area.y
                && event.row < area.y + area.height
        });
        if !inside {
            self.close_open_modal();
        }
    }

    fn close_open_modal(&mut self) {
        if self.preview.is_open() {
            self.preview.close();
        } else if self.history.is_open() {
            self.history.close();
        }
        self.ui_state.modal_area = None;
    }

    fn handle_history_key(&mut self, key: KeyEvent) -> Option<bool> {
        let count = self.history.records().map_or(0, <[_]>::len);
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.close_open_modal(),
            KeyCode::Char('j') | KeyCode::Down => {
                if count > 0 {
                    self.view_state.history_selected =
                        (self.view_state.history_selected + 1).min(count - 1);
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.view_state.history_selected =
                    self.view_state.history_selected.saturating_sub(1);
            }
            KeyCode::Char('d') | KeyCode::Enter => {
                if let Some(records) = self.history.records() {
                    if let Some(record) = records.get(self.view_state.history_selected) {
                        let session_id = record.session_id.clone();
                        self.request_download(session_id);
                    }
                }
            }
            _ => {}
        }
        None
    }

    fn handle_preview_key(&mut self, key: KeyEvent) -> Option<bool> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.close_open_modal(),
            KeyCode::Char('j') | KeyCode::Down => {
                self.view_state.preview_scroll = self.view_state.preview_scroll.saturating_add(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.view_state.preview_scroll = self.view_state.preview_scroll.saturating_sub(1);
            }
            KeyCode::PageDown => {
                self.view_state.preview_scroll = self
                    .view_state
                    .preview_scroll
                    .saturating_add(self.view_state.page_size);
            }
            KeyCode::PageUp => {
                self.view_state.preview_scroll = self
                    .view_state
                    .preview_scroll
                    .saturating_sub(self.view_state.page_size);
            }
            _ => {}
        }
        None
    }

    fn handle_path_entry_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.ui_state.input_buffer.clear();
                self.ui_state.input_mode = InputMode::Normal;
            }
            KeyCode::Enter => {
                let raw = std::mem::take(&mut self.ui_state.input_buffer);
                self.ui_state.input_mode = InputMode::Normal;
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    self.add_file(PathBuf::from(trimmed));
                }
            }
            KeyCode::Backspace => {
                self.ui_state.input_buffer.pop();
            }
            KeyCode::Char(c) => self.ui_state.input_buffer.push(c),
            _ => {}
        }
    }

    fn enter_path_entry(&mut self) {
        self.ui_state.input_mode = InputMode::PathEntry;
        self.ui_state.input_buffer.clear();
    }

    fn select_next(&mut self) {
        if !self.files.is_empty() {
            self.view_state.selected_index =
                (self.view_state.selected_index + 1).min(self.files.len() - 1);
            self.view_state.show_error_detail = false;
        }
    }

    fn select_previous(&mut self) {
        self.view_state.selected_index = self.view_state.selected_index.saturating_sub(1);
        self.view_state.show_error_detail = false;
    }

    /// Expand or collapse the full error text for the selected failed file
    /// (collapsed rows show only a one-line snippet).
    fn toggle_error_detail(&mut self) {
        let failed = self
            .files
            .get(self.view_state.selected_index)
            .is_some_and(|f| f.status == FileStatus::Failed);
        if failed {
            self.view_state.show_error_detail = !self.view_state.show_error_detail;
        }
    }
}
