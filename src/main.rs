//! Mail2PDF TUI - a terminal client for the Mail2PDF conversion server
//!
//! Stage email files, convert them in batches, retry failures, preview
//! documents, and browse past conversion sessions.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mail2pdf_tui::config::{self, ConfigLoader};
use mail2pdf_tui::{tui, HttpConvertClient};
use std::path::PathBuf;
use std::sync::Arc;
use url::Url;

/// Mail2PDF TUI - a terminal client for the Mail2PDF conversion server
#[derive(Parser, Debug)]
#[command(name = "mail2pdf-tui")]
#[command(about = "A terminal client for the Mail2PDF conversion server", long_about = None)]
struct Args {
    /// Conversion server URL (overrides the configured value)
    #[arg(long, short = 's')]
    server: Option<String>,

    /// Files to stage in the batch at startup
    files: Vec<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'd')]
    debug: bool,

    /// Configuration subcommand
    #[command(subcommand)]
    command: Option<Command>,
}

/// Main commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug)]
enum ConfigSubcommand {
    /// Get configuration value
    Get {
        /// Configuration key (e.g., "serverUrl", "ui.noIcons")
        key: Option<String>,
    },
    /// Set configuration value
    Set {
        /// Configuration key (e.g., "serverUrl", "ui.noIcons")
        key: String,
        /// Configuration value
        value: String,
    },
    /// List all configuration
    List,
    /// Show configuration file path
    Path,
    /// Validate configuration
    Validate,
}

/// Initialize logging based on debug flag
/// Returns the log file path if debug logging is enabled
fn init_logging(debug: bool) -> Option<PathBuf> {
    if !debug {
        // No logging by default (silent operation)
        return None;
    }

    // Log to a temp file so the TUI keeps stdout/stderr to itself
    let temp_file = tempfile::Builder::new()
        .prefix("mail2pdf-")
        .suffix(".log")
        .tempfile()
        .map(|f| {
            let path = f.path().to_path_buf();
            // Keep the file alive; the OS cleans it up later
            std::mem::forget(f);
            path
        })
        .unwrap_or_else(|_| {
            std::env::temp_dir().join(format!("mail2pdf-{}.log", std::process::id()))
        });

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&temp_file)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", temp_file.display(), e);
            return None;
        }
    };

    tracing_subscriber::fmt()
        .with_writer(file)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    Some(temp_file)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Handle config subcommand
    if let Some(Command::Config { subcommand }) = args.command {
        return handle_config_command(subcommand);
    }

    // Initialize logging if debug flag is set
    let log_file = init_logging(args.debug);
    if let Some(ref log_path) = log_file {
        eprintln!(
            "Debug logging enabled. Logs written to: {}",
            log_path.display()
        );
    }

    // Load configuration, with the CLI flag taking precedence
    let mut config = ConfigLoader::load().unwrap_or_else(|_| ConfigLoader::load_defaults());
    if let Some(server) = args.server {
        config.server_url = server;
    }

    let base = Url::parse(&config.server_url)
        .with_context(|| format!("Invalid server URL: {}", config.server_url))?;
    let api = Arc::new(HttpConvertClient::new(base).context("Failed to create HTTP client")?);

    tracing::debug!(
        "Configuration loaded: server={}, {} file(s) staged",
        config.server_url,
        args.files.len()
    );

    tui::run_tui(config, tui::Theme::default(), api, args.files).await?;

    Ok(())
}

/// Handle configuration subcommands
fn handle_config_command(cmd: ConfigSubcommand) -> Result<()> {
    match cmd {
        ConfigSubcommand::Get { key } => {
            let config = ConfigLoader::load().context("Failed to load configuration")?;
            if let Some(key) = key {
                let value = config::get_config_value(&config, &key)?;
                println!("{}", value);
            } else {
                let yaml =
                    serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
                print!("{}", yaml);
            }
        }
        ConfigSubcommand::Set { key, value } => {
            let mut config =
                ConfigLoader::load().unwrap_or_else(|_| ConfigLoader::load_defaults());
            config::set_config_value(&mut config, &key, &value)
                .with_context(|| format!("Failed to set {} = {}", key, value))?;
            ConfigLoader::save_root(&config).context("Failed to save configuration")?;
            println!("Configuration saved");
        }
        ConfigSubcommand::List => {
            let config = ConfigLoader::load().context("Failed to load configuration")?;
            let yaml =
                serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
            print!("{}", yaml);
        }
        ConfigSubcommand::Path => {
            println!("{}", config::paths::root_config_path().display());
        }
        ConfigSubcommand::Validate => match ConfigLoader::validate() {
            Ok(()) => println!("Configuration is valid"),
            Err(e) => {
                eprintln!("Configuration validation failed: {}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
