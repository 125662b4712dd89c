//! Outbound alert channel.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from sending an alert.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Missing notifier setting {0}")]
    MissingSetting(&'static str),
    #[error("HTTP client unavailable: {0}")]
    ClientSetup(String),
    #[error("Invalid credentials (HTTP 401)")]
    Unauthorized,
    #[error("Message rejected (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    ParseFailed(String),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Receipt for a message the provider accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    /// Provider-assigned message id (Twilio `SID`).
    pub id: String,
}

/// Sends a plain-text alert to one preconfigured recipient.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &str) -> Result<Delivery, NotifyError>;
}
