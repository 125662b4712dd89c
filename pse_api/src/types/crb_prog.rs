use serde::{Deserialize, Serialize};

/// One row of the `crb-prog` report with the three columns the alert uses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CrbProgRow {
    /// Business date, `YYYY-MM-DD`.
    pub business_date: String,
    /// Forecast imbalance settlement price (PLN/MWh). Can be negative.
    pub cen_prog: f64,
    /// Settlement interval label, e.g. `"13:45 - 14:00"`.
    pub udtczas_oreb: String,
}
