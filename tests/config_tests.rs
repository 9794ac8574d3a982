//! Configuration system tests

use mail2pdf_tui::config::{get_config_value, set_config_value, Config, ConfigLoader};
use std::path::PathBuf;

#[test]
fn defaults_are_sensible() {
    let config = ConfigLoader::load_defaults();
    assert_eq!(config.server_url, "http://localhost:5000/");
    assert_eq!(config.download_dir, None);
    assert!(config.ui.enable_mouse);
    assert!(!config.ui.no_icons);
    assert_eq!(config.ui.notification_secs, 4);
}

#[test]
fn yaml_round_trip_preserves_values() {
    let mut config = Config::default();
    config.server_url = "http://convert.example.com:8080/".to_string();
    config.download_dir = Some(PathBuf::from("/tmp/pdfs"));
    config.ui.no_icons = true;
    config.ui.notification_secs = 0;

    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn partial_yaml_fills_in_defaults() {
    let parsed: Config = serde_yaml::from_str("serverUrl: http://pdf.internal/\n").unwrap();
    assert_eq!(parsed.server_url, "http://pdf.internal/");
    assert!(parsed.ui.enable_mouse);
    assert_eq!(parsed.ui.notification_secs, 4);
}

#[test]
fn keys_use_camel_case_on_disk() {
    let mut config = Config::default();
    config.download_dir = Some(PathBuf::from("/data"));
    let yaml = serde_yaml::to_string(&config).unwrap();
    assert!(yaml.contains("serverUrl:"));
    assert!(yaml.contains("downloadDir:"));
    assert!(yaml.contains("enableMouse:"));
    assert!(yaml.contains("noIcons:"));
    assert!(yaml.contains("notificationSecs:"));
}

#[test]
fn get_and_set_cover_every_key() {
    let mut config = Config::default();

    set_config_value(&mut config, "serverUrl", "http://other:9000/").unwrap();
    set_config_value(&mut config, "downloadDir", "/srv/out").unwrap();
    set_config_value(&mut config, "ui.enableMouse", "false").unwrap();
    set_config_value(&mut config, "ui.noIcons", "true").unwrap();
    set_config_value(&mut config, "ui.notificationSecs", "10").unwrap();

    assert_eq!(
        get_config_value(&config, "serverUrl").unwrap(),
        "http://other:9000/"
    );
    assert_eq!(get_config_value(&config, "downloadDir").unwrap(), "/srv/out");
    assert_eq!(get_config_value(&config, "ui.enableMouse").unwrap(), "false");
    assert_eq!(get_config_value(&config, "ui.noIcons").unwrap(), "true");
    assert_eq!(
        get_config_value(&config, "ui.notificationSecs").unwrap(),
        "10"
    );
}

#[test]
fn invalid_values_are_rejected() {
    let mut config = Config::default();
    assert!(set_config_value(&mut config, "serverUrl", "not a url").is_err());
    assert!(set_config_value(&mut config, "ui.enableMouse", "maybe").is_err());
    assert!(set_config_value(&mut config, "ui.notificationSecs", "soon").is_err());
    assert!(set_config_value(&mut config, "nonsense.key", "x").is_err());
    // Nothing was modified along the way.
    assert_eq!(config, Config::default());
}

#[test]
fn clearing_download_dir_uses_empty_string() {
    let mut config = Config::default();
    set_config_value(&mut config, "downloadDir", "/srv/out").unwrap();
    assert!(config.download_dir.is_some());
    set_config_value(&mut config, "downloadDir", "").unwrap();
    assert_eq!(config.download_dir, None);
    assert_eq!(get_config_value(&config, "downloadDir").unwrap(), "");
}
