//! Twilio Programmable Messaging client for SMS alerts.
//!
//! Credentials and phone numbers come from [`TwilioConfig`]; any of them may be
//! missing at startup, in which case every send fails with
//! [`NotifyError::MissingSetting`](crate::notifier::NotifyError::MissingSetting).

pub mod client;
pub mod config;
pub mod types;

pub use client::TwilioClient;
pub use config::TwilioConfig;
