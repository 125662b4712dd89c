//! One alert run: fetch, detect, and on a fresh sign flip notify and persist.

use chrono::NaiveDate;

use crate::detector::{self, Detection};
use crate::market::PriceSource;
use crate::notifier::Notifier;
use crate::record::{render_table, PriceRecord};
use crate::state::{EventState, StateStore};

/// What the job should do for a set of records and the previously handled event.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// The report has no rows for the date yet.
    NoData,
    /// Only one row; nothing to compare.
    NotEnoughData,
    /// The last two rows were compared.
    Evaluated(Verdict),
}

/// Result of comparing the last two records against the handled event.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// The last two prices do not flip sign.
    NotSignificant(Detection),
    /// A flip, but its newest record was already alerted on.
    AlreadyHandled(Detection),
    /// A new flip: send `detection.message` and store `new_state`.
    Notify {
        detection: Detection,
        new_state: EventState,
    },
}

/// Pure decision for one run.
pub fn decide(records: &[PriceRecord], prior: &EventState) -> Decision {
    if records.is_empty() {
        return Decision::NoData;
    }
    match detector::last_two(records) {
        Some(last_two) => Decision::Evaluated(evaluate(last_two, prior)),
        None => Decision::NotEnoughData,
    }
}

/// Compares `[older, newer]` and checks the newer record against `prior`.
pub fn evaluate(last_two: &[PriceRecord; 2], prior: &EventState) -> Verdict {
    let detection = detector::detect(last_two);
    if !detection.is_significant() {
        return Verdict::NotSignificant(detection);
    }
    let event_id = last_two[1].event_id();
    if prior.is_handled(&event_id) {
        return Verdict::AlreadyHandled(detection);
    }
    Verdict::Notify {
        detection,
        new_state: EventState::handled(event_id),
    }
}

/// Observable result of [`run_once`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    FetchFailed,
    NoData,
    NotEnoughData,
    NotSignificant,
    AlreadyHandled,
    /// An alert was attempted and the event marked handled.
    Notified { delivered: bool, state_saved: bool },
}

/// Runs the job for `date`.
///
/// Every failure is logged and absorbed: a fetch failure ends the run with no
/// side effects, a send failure still marks the event handled, and a state
/// write failure leaves the previous state in place.
pub async fn run_once(
    source: &dyn PriceSource,
    notifier: &dyn Notifier,
    store: &StateStore,
    date: NaiveDate,
) -> RunOutcome {
    let records = match source.fetch(date).await {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("Failed to retrieve data: {}", e);
            return RunOutcome::FetchFailed;
        }
    };

    if records.is_empty() {
        tracing::info!("No data available for the current date.");
        return RunOutcome::NoData;
    }
    let Some(last_two) = detector::last_two(&records) else {
        tracing::info!("Not enough data available to retrieve the last two records.");
        return RunOutcome::NotEnoughData;
    };
    tracing::info!("Last two records:\n{}", render_table(last_two));

    // State is read only once there is a pair to evaluate.
    let prior = store.load();
    match evaluate(last_two, &prior) {
        Verdict::NotSignificant(detection) => {
            tracing::info!("{}", detection.message);
            RunOutcome::NotSignificant
        }
        Verdict::AlreadyHandled(detection) => {
            tracing::info!("{}", detection.message);
            tracing::info!("Event already handled, not sending SMS.");
            RunOutcome::AlreadyHandled
        }
        Verdict::Notify {
            detection,
            new_state,
        } => {
            tracing::info!("{}", detection.message);
            let delivered = match notifier.send(&detection.message).await {
                Ok(delivery) => {
                    tracing::info!("SMS sent: {} (SID: {})", detection.message, delivery.id);
                    true
                }
                Err(e) => {
                    tracing::error!("Failed to send SMS: {}", e);
                    false
                }
            };
            // Marked handled whether or not the send succeeded.
            let state_saved = store.save(&new_state);
            RunOutcome::Notified {
                delivered,
                state_saved,
            }
        }
    }
}
