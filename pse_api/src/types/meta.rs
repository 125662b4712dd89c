use serde::{Deserialize, Serialize};

/// OData collection envelope returned by every report endpoint.
#[derive(Serialize, Deserialize, Debug)]
pub struct ODataResponse<T> {
    /// Rows of the report. A body without `value` decodes as no rows.
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
}
