//! Library layer for the PSE price alert: price records, sign-flip detection,
//! persisted event state, the Twilio notifier, and the single-run job.
//!
//! Wraps the `pse_api` crate with a [`PriceSource`] seam so the job can be
//! driven by fakes in tests.

pub mod config;
pub mod detector;
pub mod error;
pub mod job;
pub mod logging;
pub mod market;
pub mod notifier;
pub mod record;
pub mod state;
pub mod twilio;
pub mod validation;

pub use pse_api;

pub use config::{AppConfig, ConfigError};
pub use detector::{detect, Detection, PriceShift};
pub use error::DataFetchError;
pub use job::{decide, evaluate, run_once, Decision, RunOutcome, Verdict};
pub use market::{PriceSource, PseMarketClient};
pub use notifier::{Delivery, Notifier, NotifyError};
pub use record::PriceRecord;
pub use state::{EventState, StateError, StateStore};
pub use twilio::{TwilioClient, TwilioConfig};
