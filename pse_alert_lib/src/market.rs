//! Price source seam and its PSE-backed implementation.

use async_trait::async_trait;
use chrono::NaiveDate;
use pse_api::CrbProgQuery;

use crate::error::DataFetchError;
use crate::record::PriceRecord;

/// Supplies the price records published for a business date, in publication order.
#[async_trait]
pub trait PriceSource: Send + Sync {
    async fn fetch(&self, date: NaiveDate) -> Result<Vec<PriceRecord>, DataFetchError>;
}

/// Reads forecast prices from the PSE `crb-prog` report.
pub struct PseMarketClient {
    inner: pse_api::Client,
}

impl Default for PseMarketClient {
    fn default() -> Self {
        Self::new(None)
    }
}

impl PseMarketClient {
    /// Creates a client for the production API, or for `base_url` when given.
    pub fn new(base_url: Option<&str>) -> Self {
        let inner = match base_url {
            Some(url) => pse_api::Client::with_base_url(url),
            None => pse_api::Client::new(),
        };
        Self { inner }
    }
}

#[async_trait]
impl PriceSource for PseMarketClient {
    async fn fetch(&self, date: NaiveDate) -> Result<Vec<PriceRecord>, DataFetchError> {
        let query = CrbProgQuery::for_date(date);
        let resp = self.inner.get_crb_prog(&query).await?;
        Ok(resp.value.into_iter().map(PriceRecord::from).collect())
    }
}
