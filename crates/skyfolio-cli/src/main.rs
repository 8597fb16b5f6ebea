//! Skyfolio CLI — terminal gallery for NASA's Astronomy Picture of the Day

mod logging;
mod print;
mod tui;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;

use skyfolio::config::storage::{LOG_FILE, SETTINGS_FILE};
use skyfolio::source::{ApodProvider, ApodSource, JsonFileSource};
use skyfolio_app::app::AppController;
use skyfolio_app::data::{config_dir, ensure_dir, FileStore, Settings};

use logging::LogTarget;

#[derive(Parser)]
#[command(name = "skyfolio", about = "Terminal gallery for NASA's Astronomy Picture of the Day", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// APOD API key (overrides the settings file)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Records per batch (overrides the settings file)
    #[arg(long, global = true)]
    count: Option<usize>,

    /// APOD endpoint URL (overrides the settings file)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Read batches from a local JSON array instead of the API
    #[arg(long, global = true)]
    source_file: Option<PathBuf>,

    /// Directory for favorites, settings, and the log file
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Write the effective API settings back to the settings file
    #[arg(long, global = true)]
    save_settings: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print one view as plain text and exit
    Print {
        /// Print saved favorites instead of fetching a new batch
        #[arg(long)]
        favorites: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => config_dir()?,
    };
    ensure_dir(&data_dir)?;

    let log_path = data_dir.join(LOG_FILE);
    let log_target = match cli.command {
        Some(Command::Print { .. }) => LogTarget::Stderr,
        None => LogTarget::File(&log_path),
    };
    logging::init(&cli.log_level, log_target)?;

    let settings_path = data_dir.join(SETTINGS_FILE);
    let mut settings = Settings::load_from(&settings_path)?;
    apply_overrides(&mut settings, &cli);
    if cli.save_settings {
        settings.save_to(&settings_path)?;
    }

    let source: Arc<dyn ApodSource> = match cli.source_file.clone() {
        Some(path) => Arc::new(JsonFileSource::new(path)),
        None => {
            let provider =
                ApodProvider::with_endpoint(settings.endpoint.clone(), settings.api_key.clone())?;
            info!(endpoint = provider.endpoint(), "using APOD API");
            Arc::new(provider)
        }
    };
    info!(
        source = source.name(),
        data_dir = %data_dir.display(),
        demo_key = settings.uses_demo_key(),
        "starting"
    );

    let store = Box::new(FileStore::new(&data_dir));
    let controller = AppController::new(source, store, settings.count);

    match cli.command {
        Some(Command::Print { favorites }) => print::run(controller, favorites),
        None => tui::run(controller),
    }
}

/// Flags override the settings file
fn apply_overrides(settings: &mut Settings, cli: &Cli) {
    if let Some(key) = &cli.api_key {
        settings.api_key = key.clone();
    }
    if let Some(count) = cli.count {
        settings.count = count;
    }
    if let Some(endpoint) = &cli.endpoint {
        settings.endpoint = endpoint.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_settings() {
        let cli = Cli::parse_from([
            "skyfolio",
            "--api-key",
            "SECRET",
            "--count",
            "4",
            "print",
            "--endpoint",
            "http://localhost:8080/apod",
        ]);
        let mut settings = Settings::default();
        apply_overrides(&mut settings, &cli);

        assert_eq!(settings.api_key, "SECRET");
        assert_eq!(settings.count, 4);
        assert_eq!(settings.endpoint, "http://localhost:8080/apod");
        assert!(matches!(cli.command, Some(Command::Print { favorites: false })));
    }

    #[test]
    fn test_missing_flags_keep_settings() {
        let cli = Cli::parse_from(["skyfolio", "print", "--favorites"]);
        let mut settings = Settings {
            api_key: "FROM_FILE".to_string(),
            count: 7,
            ..Settings::default()
        };
        let endpoint = settings.endpoint.clone();
        apply_overrides(&mut settings, &cli);

        assert_eq!(settings.api_key, "FROM_FILE");
        assert_eq!(settings.count, 7);
        assert_eq!(settings.endpoint, endpoint);
        assert!(matches!(cli.command, Some(Command::Print { favorites: true })));
        assert_eq!(cli.log_level, "info");
    }
}
