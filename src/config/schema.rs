//! Configuration schema definitions
//!
//! Defines the structure of configuration files using serde for serialization.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Base URL of the conversion server
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Where downloaded session ZIPs are written (defaults to the platform
    /// download directory, falling back to the current directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_dir: Option<PathBuf>,

    /// UI configuration
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UiConfig {
    /// Enable mouse support (backdrop clicks close modals)
    #[serde(default = "default_true")]
    pub enable_mouse: bool,

    /// Disable Unicode icons for compatibility
    #[serde(default = "default_false")]
    pub no_icons: bool,

    /// Seconds before a notification auto-dismisses (0 = persist until
    /// manually dismissed)
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,
}

// Default value functions
fn default_server_url() -> String {
    "http://localhost:5000/".to_string()
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

fn default_notification_secs() -> u64 {
    4
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            download_dir: None,
            ui: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            enable_mouse: default_true(),
            no_icons: default_false(),
            notification_secs: default_notification_secs(),
        }
    }
}
