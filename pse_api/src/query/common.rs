//! Shared query infrastructure: the [`Query`] trait and the OData [`QueryCommon`] fields.

use url::Url;

/// Trait implemented by all report query builders. Provides URL serialization
/// and shared builder methods for OData projection and filtering.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Adds a raw OData filter clause. Clauses are joined with `and`.
    fn with_filter(mut self, clause: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.get_common().filters.push(clause.into());
        self
    }

    /// Limits the number of rows returned (`$top`).
    fn with_top(mut self, top: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().top = Some(top);
        self
    }
}

/// OData options shared by every report endpoint.
#[derive(Clone, Default, Debug)]
pub struct QueryCommon {
    /// Column names for `$select`. Empty means every column.
    pub select: Vec<String>,
    /// Filter clauses for `$filter`, joined with `and`.
    pub filters: Vec<String>,
    /// Row limit for `$top`. `None` uses the API default.
    pub top: Option<u32>,
}

impl QueryCommon {
    /// Appends `$select`, `$filter` and `$top` to the URL when set.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if !self.select.is_empty() {
            url.query_pairs_mut()
                .append_pair("$select", &self.select.join(","));
        }
        if !self.filters.is_empty() {
            url.query_pairs_mut()
                .append_pair("$filter", &self.filters.join(" and "));
        }
        if let Some(top) = self.top {
            url.query_pairs_mut().append_pair("$top", &top.to_string());
        }
        url
    }
}

/// Quotes a string literal for use inside an OData filter clause.
pub(crate) fn odata_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
