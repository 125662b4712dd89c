//! Price records as used by the alert, independent of the API's column names.

use pse_api::types::CrbProgRow;
use serde::{Deserialize, Serialize};

/// One forecast price for a settlement interval of a business date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Business date, `YYYY-MM-DD`.
    pub date: String,
    /// Interval label (`"od - do"`, from/to time of day).
    pub od_do: String,
    /// Forecast price. Sign is what the alert cares about.
    pub cen: f64,
}

impl From<CrbProgRow> for PriceRecord {
    fn from(row: CrbProgRow) -> Self {
        Self {
            date: row.business_date,
            od_do: row.udtczas_oreb,
            cen: row.cen_prog,
        }
    }
}

impl PriceRecord {
    pub fn new(date: impl Into<String>, od_do: impl Into<String>, cen: f64) -> Self {
        Self {
            date: date.into(),
            od_do: od_do.into(),
            cen,
        }
    }

    /// Stable identity used to deduplicate alerts across runs.
    ///
    /// JSON object with keys in sorted order (`cen`, `date`, `od_do`), so the
    /// same record always yields the same string.
    pub fn event_id(&self) -> String {
        serde_json::json!({
            "cen": self.cen,
            "date": self.date,
            "od_do": self.od_do,
        })
        .to_string()
    }
}

/// Renders records as a plain text table: a `date od_do cen` header and one
/// right-aligned row per record, without an index column.
pub fn render_table(records: &[PriceRecord]) -> String {
    let rows: Vec<[String; 3]> = records
        .iter()
        .map(|r| [r.date.clone(), r.od_do.clone(), r.cen.to_string()])
        .collect();
    let header = ["date", "od_do", "cen"];

    let mut widths = header.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |cells: [&str; 3]| -> String {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| format!("{:>width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join(" ")
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_line(header));
    for row in &rows {
        lines.push(format_line([row[0].as_str(), row[1].as_str(), row[2].as_str()]));
    }
    lines.join("\n")
}
