//! Centralized keybindings and navigation commands
//!
//! Single source of truth for the keybindings shown in the footer and the
//! help overlay.

/// Navigation command with keybinding and label
#[derive(Debug, Clone)]
pub struct NavigationCommand {
    /// The keybinding string (e.g., "j/k ", "p", "Enter")
    pub key: &'static str,
    /// The human-readable label (e.g., "Navigate", "Preview")
    pub label: &'static str,
}

impl NavigationCommand {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Get all default navigation commands in the order they should appear
pub fn get_navigation_commands() -> Vec<NavigationCommand> {
    vec![
        NavigationCommand::new("j/k ", "Navigate"),
        NavigationCommand::new("o", "Add file"),
        NavigationCommand::new("c", "Convert"),
        NavigationCommand::new("p", "Preview"),
        NavigationCommand::new("r", "Retry"),
        NavigationCommand::new("e", "Error detail"),
        NavigationCommand::new("h", "History"),
        NavigationCommand::new("d", "Download"),
        NavigationCommand::new("x", "Remove file"),
        NavigationCommand::new("?", "Help"),
        NavigationCommand::new("Esc", "Back/Quit"),
    ]
}

/// Rows for the help overlay, including the Ctrl-modified shortcuts that do
/// not fit in the footer.
pub fn get_help_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        ("<j>/<k>", "Navigate the file list"),
        ("<o> / Ctrl+O", "Add a file to the batch"),
        ("<c> / Ctrl+Enter", "Start conversion"),
        ("<p> / <Enter>", "Preview the selected file"),
        ("<r>", "Retry the selected failed file"),
        ("<e>", "Expand/collapse error details"),
        ("<h>", "Conversion history"),
        ("<d> / Ctrl+D", "Download results"),
        ("<x>", "Remove the selected file"),
        ("<Esc>", "Close modal / dismiss toast / quit"),
        ("<?> ", "Toggle this help"),
        ("<q>", "Quit"),
    ]
}
