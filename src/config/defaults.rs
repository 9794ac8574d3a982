//! Default configuration values

use super::schema::Config;

/// Get the default configuration
pub fn default_config() -> Config {
    Config::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert_eq!(config.server_url, "http://localhost:5000/");
        assert!(config.ui.enable_mouse);
        assert_eq!(config.ui.notification_secs, 4);
    }
}
