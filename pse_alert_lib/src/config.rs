//! Run configuration, assembled once at startup from the environment.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::twilio::TwilioConfig;

pub const STATE_FILE_NAME: &str = "state2.json";
pub const LOG_FILE_NAME: &str = "script_log2.txt";

pub const PSE_BASE_URL_VAR: &str = "PSE_API_BASE_URL";
pub const STATE_FILE_VAR: &str = "PSE_ALERT_STATE_FILE";
pub const LOG_FILE_VAR: &str = "PSE_ALERT_LOG_FILE";

/// Errors from user-supplied configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Everything a run needs, passed explicitly into the clients.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Overrides the PSE API base URL. `None` means production.
    pub pse_base_url: Option<String>,
    pub twilio: TwilioConfig,
    pub state_file: PathBuf,
    pub log_file: PathBuf,
}

impl AppConfig {
    /// Reads the configuration from environment variables. Relative file
    /// defaults are placed in `base_dir`.
    pub fn from_env(base_dir: &Path) -> Self {
        Self::from_lookup(base_dir, |key| std::env::var(key).ok())
    }

    pub fn from_lookup(base_dir: &Path, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            pse_base_url: get(PSE_BASE_URL_VAR),
            twilio: TwilioConfig::from_lookup(&lookup),
            state_file: get(STATE_FILE_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| base_dir.join(STATE_FILE_NAME)),
            log_file: get(LOG_FILE_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| base_dir.join(LOG_FILE_NAME)),
        }
    }
}

/// Directory holding the running executable, falling back to the working directory.
pub fn default_base_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_live_in_base_dir() {
        let config = AppConfig::from_lookup(Path::new("/opt/pse"), |_| None);
        assert_eq!(config.state_file, Path::new("/opt/pse/state2.json"));
        assert_eq!(config.log_file, Path::new("/opt/pse/script_log2.txt"));
        assert!(config.pse_base_url.is_none());
        assert!(config.twilio.account_sid.is_none());
    }

    #[test]
    fn env_overrides_paths_and_urls() {
        let config = AppConfig::from_lookup(Path::new("/opt/pse"), |key| match key {
            STATE_FILE_VAR => Some("/var/lib/pse/state.json".to_string()),
            LOG_FILE_VAR => Some("/var/log/pse.log".to_string()),
            PSE_BASE_URL_VAR => Some("http://localhost:8080".to_string()),
            "TWILIO_ACCOUNT_SID" => Some("AC1".to_string()),
            _ => None,
        });
        assert_eq!(config.state_file, Path::new("/var/lib/pse/state.json"));
        assert_eq!(config.log_file, Path::new("/var/log/pse.log"));
        assert_eq!(config.pse_base_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(config.twilio.account_sid.as_deref(), Some("AC1"));
    }

    #[test]
    fn base_dir_is_absolute_or_dot() {
        let dir = default_base_dir();
        assert!(dir.is_absolute() || dir == Path::new("."));
    }
}
