//! Response types for the Twilio Messages API.

use serde::Deserialize;

/// Message resource returned by `POST /Accounts/{sid}/Messages.json`.
///
/// Only the fields the alert logs are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResource {
    pub sid: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Error body Twilio returns with 4xx/5xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<i64>,
    pub message: String,
    #[serde(default)]
    pub more_info: Option<String>,
}
