use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;
use pse_alert_lib::config::{default_base_dir, AppConfig};
use pse_alert_lib::validation::validate_date;
use pse_alert_lib::{logging, run_once, PseMarketClient, StateStore, TwilioClient};

#[derive(Parser)]
#[command(name = "pse-alert")]
#[command(about = "Send an SMS when the PSE forecast imbalance price flips sign")]
struct Cli {
    /// Business date to check (YYYY-MM-DD). Defaults to today, local time
    #[arg(long)]
    date: Option<String>,

    /// State file path (default: state2.json next to the executable)
    #[arg(long)]
    state_file: Option<PathBuf>,

    /// Log file path (default: script_log2.txt next to the executable)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Env file with Twilio settings (default: .env in the working directory)
    #[arg(long)]
    env_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_result = load_env(cli.env_file.as_deref());

    let mut config = AppConfig::from_env(&default_base_dir());
    if let Some(path) = cli.state_file {
        config.state_file = path;
    }
    if let Some(path) = cli.log_file {
        config.log_file = path;
    }

    if let Err(e) = logging::init(&config.log_file) {
        logging::init_stderr_only();
        tracing::warn!(
            "Cannot open log file {}: {}; logging to stderr only",
            config.log_file.display(),
            e
        );
    }
    if let Err(e) = env_result {
        if !e.not_found() {
            tracing::warn!("Failed to load env file: {}", e);
        }
    }

    let date = match cli.date.as_deref() {
        Some(raw) => validate_date(raw)?,
        None => today(),
    };
    tracing::debug!("Checking {} with {:?}", date, config);

    let source = PseMarketClient::new(config.pse_base_url.as_deref());
    let notifier = TwilioClient::new(config.twilio.clone());
    let store = StateStore::new(config.state_file.clone());

    let outcome = run_once(&source, &notifier, &store, date).await;
    tracing::debug!("Run finished: {:?}", outcome);

    Ok(())
}

/// Loads `.env` values over the process environment.
fn load_env(path: Option<&Path>) -> Result<(), dotenvy::Error> {
    match path {
        Some(path) => dotenvy::from_path_override(path),
        None => dotenvy::dotenv_override().map(|_| ()),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
