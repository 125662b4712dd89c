use std::fmt;

use chrono::NaiveDate;
use url::Url;

use super::common::{odata_literal, Query, QueryCommon};

/// Columns of the `crb-prog` (forecast imbalance price) report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrbProgField {
    BusinessDate,
    ForecastPrice,
    Interval,
}

impl fmt::Display for CrbProgField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            CrbProgField::BusinessDate => "business_date",
            CrbProgField::ForecastPrice => "cen_prog",
            CrbProgField::Interval => "udtczas_oreb",
        };
        write!(f, "{}", value)
    }
}

/// Query for the `crb-prog` report restricted to a single business date.
///
/// Selects `business_date`, `cen_prog` and `udtczas_oreb` by default.
#[derive(Clone, Debug)]
pub struct CrbProgQuery {
    pub common: QueryCommon,
    pub business_date: NaiveDate,
    pub fields: Vec<CrbProgField>,
}

impl CrbProgQuery {
    pub fn for_date(business_date: NaiveDate) -> Self {
        Self {
            common: QueryCommon::default(),
            business_date,
            fields: vec![
                CrbProgField::BusinessDate,
                CrbProgField::ForecastPrice,
                CrbProgField::Interval,
            ],
        }
    }

    pub fn with_fields(mut self, fields: &[CrbProgField]) -> Self {
        self.fields = fields.to_vec();
        self
    }
}

impl Query for CrbProgQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut common = self.common.clone();
        common.select = self.fields.iter().map(|f| f.to_string()).collect();
        let date_clause = format!(
            "{} eq {}",
            CrbProgField::BusinessDate,
            odata_literal(&self.business_date.format("%Y-%m-%d").to_string())
        );
        common.filters.insert(0, date_clause);
        common.add_to_url(url)
    }
}
