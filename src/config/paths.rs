//! Cross-platform directory path resolution
//!
//! - Linux/macOS: XDG Base Directory specification (~/.config)
//! - Windows: Known Folder API (AppData\Roaming)

use std::path::PathBuf;

/// Get the configuration directory path
///
/// Checks the MAIL2PDF_CONFIG_DIR environment variable first, then falls
/// back to the platform configuration directory.
pub fn config_dir() -> PathBuf {
    std::env::var("MAIL2PDF_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            use directories::ProjectDirs;
            ProjectDirs::from("", "", "mail2pdf-tui")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .unwrap_or_else(|| PathBuf::from(".").join(".config").join("mail2pdf-tui"))
        })
}

/// Path of the root configuration file
pub fn root_config_path() -> PathBuf {
    config_dir().join("config.yaml")
}

/// Default directory for downloaded session archives
pub fn default_download_dir() -> PathBuf {
    use directories::UserDirs;
    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(|d| d.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}
