//! Twilio settings read from the process environment.

use crate::notifier::NotifyError;

pub const ACCOUNT_SID_VAR: &str = "TWILIO_ACCOUNT_SID";
pub const AUTH_TOKEN_VAR: &str = "TWILIO_AUTH_TOKEN";
pub const FROM_NUMBER_VAR: &str = "TWILIO_PHONE_NUMBER";
pub const TO_NUMBER_VAR: &str = "TARGET_PHONE_NUMBER";
pub const BASE_URL_VAR: &str = "TWILIO_API_BASE_URL";

const DEFAULT_BASE_URL: &str = "https://api.twilio.com";

/// Account credentials plus the fixed sender and recipient numbers.
#[derive(Clone, Default)]
pub struct TwilioConfig {
    pub account_sid: Option<String>,
    pub auth_token: Option<String>,
    pub from_number: Option<String>,
    pub to_number: Option<String>,
    /// Overrides `https://api.twilio.com` (used with wiremock).
    pub base_url: Option<String>,
}

/// A complete set of settings, borrowed from [`TwilioConfig`].
pub struct Credentials<'a> {
    pub account_sid: &'a str,
    pub auth_token: &'a str,
    pub from_number: &'a str,
    pub to_number: &'a str,
}

impl TwilioConfig {
    /// Reads the settings from environment variables. Blank values count as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            account_sid: get(ACCOUNT_SID_VAR),
            auth_token: get(AUTH_TOKEN_VAR),
            from_number: get(FROM_NUMBER_VAR),
            to_number: get(TO_NUMBER_VAR),
            base_url: get(BASE_URL_VAR),
        }
    }

    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    /// Returns every setting needed to send, or the first one missing.
    pub fn credentials(&self) -> Result<Credentials<'_>, NotifyError> {
        Ok(Credentials {
            account_sid: require(&self.account_sid, ACCOUNT_SID_VAR)?,
            auth_token: require(&self.auth_token, AUTH_TOKEN_VAR)?,
            from_number: require(&self.from_number, FROM_NUMBER_VAR)?,
            to_number: require(&self.to_number, TO_NUMBER_VAR)?,
        })
    }
}

fn require<'a>(value: &'a Option<String>, name: &'static str) -> Result<&'a str, NotifyError> {
    value.as_deref().ok_or(NotifyError::MissingSetting(name))
}

// Keeps the auth token out of logs.
impl std::fmt::Debug for TwilioConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwilioConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "***"))
            .field("from_number", &self.from_number)
            .field("to_number", &self.to_number)
            .field("base_url", &self.base_url)
            .finish()
    }
}
