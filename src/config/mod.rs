//! Configuration system for mail2pdf-tui
//!
//! YAML configuration with serde defaults, loaded from a platform-appropriate
//! directory with environment-variable overrides.

mod defaults;
pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{Config, UiConfig};

/// Get a configuration value by key (dot notation)
pub fn get_config_value(config: &schema::Config, key: &str) -> anyhow::Result<String> {
    match key {
        "serverUrl" => Ok(config.server_url.clone()),
        "downloadDir" => Ok(config
            .download_dir
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()),
        "ui.enableMouse" => Ok(config.ui.enable_mouse.to_string()),
        "ui.noIcons" => Ok(config.ui.no_icons.to_string()),
        "ui.notificationSecs" => Ok(config.ui.notification_secs.to_string()),
        _ => Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }
}

/// Set a configuration value by key (dot notation)
pub fn set_config_value(config: &mut schema::Config, key: &str, value: &str) -> anyhow::Result<()> {
    use anyhow::Context;
    match key {
        "serverUrl" => {
            url::Url::parse(value).context("serverUrl must be a valid URL")?;
            config.server_url = value.to_string();
        }
        "downloadDir" => {
            config.download_dir = if value.is_empty() {
                None
            } else {
                Some(std::path::PathBuf::from(value))
            };
        }
        "ui.enableMouse" => {
            config.ui.enable_mouse = value
                .parse()
                .context("ui.enableMouse must be 'true' or 'false'")?;
        }
        "ui.noIcons" => {
            config.ui.no_icons = value
                .parse()
                .context("ui.noIcons must be 'true' or 'false'")?;
        }
        "ui.notificationSecs" => {
            config.ui.notification_secs = value
                .parse()
                .context("ui.notificationSecs must be a number of seconds (0 = persistent)")?;
        }
        _ => return Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }

    Ok(())
}
