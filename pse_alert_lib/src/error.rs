//! Error types for fetching market data.

use std::fmt;

/// Failure to obtain price records for a date. Network, HTTP status and
/// body decoding problems all end up here.
#[derive(Debug)]
pub enum DataFetchError {
    /// An error from the underlying PSE API client.
    Api(pse_api::Error),
}

impl fmt::Display for DataFetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "PSE API error: {}", e),
        }
    }
}

impl std::error::Error for DataFetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
        }
    }
}

impl From<pse_api::Error> for DataFetchError {
    fn from(e: pse_api::Error) -> Self {
        Self::Api(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn api_error_keeps_source() {
        let err = DataFetchError::from(pse_api::Error::HttpStatus {
            status: 502,
            body: "bad gateway".to_string(),
        });
        assert!(err.to_string().contains("502"));
        assert!(err.source().is_some());
    }

    #[test]
    fn request_failure_display() {
        let err = DataFetchError::from(pse_api::Error::RequestFailed("offline".to_string()));
        assert_eq!(err.to_string(), "PSE API error: Request failed: offline");
    }
}
