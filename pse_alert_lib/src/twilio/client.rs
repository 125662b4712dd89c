//! Twilio client sending one SMS per alert.

use std::time::Duration;

use async_trait::async_trait;

use super::config::TwilioConfig;
use super::types::{ApiErrorBody, MessageResource};
use crate::notifier::{Delivery, Notifier, NotifyError};

/// Request timeout for Twilio API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Twilio REST client bound to one sender and one recipient.
pub struct TwilioClient {
    client: Result<reqwest::Client, String>,
    config: TwilioConfig,
}

impl TwilioClient {
    /// Create a new TwilioClient. Missing settings and HTTP client setup
    /// failures are only reported when sending.
    pub fn new(config: TwilioConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client for Twilio: {}", e);
                e.to_string()
            });
        Self { client, config }
    }

    pub fn config(&self) -> &TwilioConfig {
        &self.config
    }

    /// Send `body` as an SMS from the configured number to the target number.
    ///
    /// Returns the message resource on HTTP 2xx. Twilio reports auth failures
    /// as 401 and validation failures (bad number, unverified recipient) as
    /// 400 with a JSON error body.
    pub async fn send_sms(&self, body: &str) -> Result<MessageResource, NotifyError> {
        let client = self
            .client
            .as_ref()
            .map_err(|e| NotifyError::ClientSetup(e.clone()))?;
        let creds = self.config.credentials()?;
        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.config.base_url(),
            creds.account_sid
        );

        let response = client
            .post(&url)
            .basic_auth(creds.account_sid, Some(creds.auth_token))
            .form(&[
                ("To", creds.to_number),
                ("From", creds.from_number),
                ("Body", body),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(NotifyError::Unauthorized);
        }

        let text = response.text().await.map_err(|e| {
            NotifyError::ParseFailed(format!("Failed to read response body: {}", e))
        })?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ApiErrorBody>(&text) {
                Ok(err) => match err.code {
                    Some(code) => format!("{} (code {})", err.message, code),
                    None => err.message,
                },
                Err(_) => snippet(&text).to_string(),
            };
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str::<MessageResource>(&text).map_err(|e| {
            NotifyError::ParseFailed(format!(
                "Failed to deserialize response: {} | body: {}",
                e,
                snippet(&text)
            ))
        })
    }
}

#[async_trait]
impl Notifier for TwilioClient {
    async fn send(&self, message: &str) -> Result<Delivery, NotifyError> {
        let resource = self.send_sms(message).await?;
        if let Some(code) = resource.error_code {
            tracing::warn!(
                "Twilio accepted message {} with error {}: {}",
                resource.sid,
                code,
                resource.error_message.as_deref().unwrap_or("")
            );
        }
        tracing::debug!(
            "Twilio message {} status {}",
            resource.sid,
            resource.status.as_deref().unwrap_or("unknown")
        );
        Ok(Delivery { id: resource.sid })
    }
}

fn snippet(body: &str) -> &str {
    let mut end = body.len().min(200);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
