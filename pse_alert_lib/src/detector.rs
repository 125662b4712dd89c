//! Sign-flip detection over the two most recent price records.

use crate::record::{render_table, PriceRecord};

/// Message used when the last two prices do not flip sign.
pub const NO_CHANGE_MESSAGE: &str = "No significant change in price values.";

/// Direction of a sign flip between two adjacent prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceShift {
    /// Strictly positive, then strictly negative.
    TurnedNegative,
    /// Strictly negative, then strictly positive.
    TurnedPositive,
    /// Anything else, including any zero.
    Unchanged,
}

impl PriceShift {
    /// Classifies an older/newer price pair. Zero never counts as either sign.
    pub fn classify(first: f64, second: f64) -> Self {
        if first > 0.0 && second < 0.0 {
            PriceShift::TurnedNegative
        } else if first < 0.0 && second > 0.0 {
            PriceShift::TurnedPositive
        } else {
            PriceShift::Unchanged
        }
    }

    pub fn is_significant(self) -> bool {
        !matches!(self, PriceShift::Unchanged)
    }

    fn headline(self) -> &'static str {
        match self {
            PriceShift::TurnedNegative => "Negative price.",
            PriceShift::TurnedPositive => "Positive price.",
            PriceShift::Unchanged => NO_CHANGE_MESSAGE,
        }
    }
}

/// Outcome of comparing two adjacent records.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub shift: PriceShift,
    pub message: String,
}

impl Detection {
    pub fn is_significant(&self) -> bool {
        self.shift.is_significant()
    }
}

/// Compares `[older, newer]` and builds the alert message.
///
/// A flip produces `"Negative price. "` or `"Positive price. "` followed by a
/// table of both records; otherwise the message is [`NO_CHANGE_MESSAGE`].
pub fn detect(last_two: &[PriceRecord; 2]) -> Detection {
    let shift = PriceShift::classify(last_two[0].cen, last_two[1].cen);
    let message = if shift.is_significant() {
        format!("{} {}", shift.headline(), render_table(last_two))
    } else {
        NO_CHANGE_MESSAGE.to_string()
    };
    Detection { shift, message }
}

/// Returns the chronologically last two records, or `None` when fewer than two exist.
pub fn last_two(records: &[PriceRecord]) -> Option<&[PriceRecord; 2]> {
    let start = records.len().checked_sub(2)?;
    records[start..].try_into().ok()
}
