// src/error.rs

use thiserror::Error;

/// Expected outcomes of normalization that the caller surfaces verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizationError {
    #[error("Invalid stock symbol")]
    InvalidSymbol,

    #[error("API rate limit exceeded. Try again later.")]
    RateLimited,

    #[error("Stock not found")]
    NotFound,

    #[error("Stock symbol \"{symbol}\" appears to be invalid or the company may not be publicly traded. Please check the symbol and try again.")]
    InvalidOrUnlisted { symbol: String },
}

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Provider returned {status} for {function}")]
    Status {
        function: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("Malformed {function} response: {source}")]
    MalformedResponse {
        function: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Normalization(#[from] NormalizationError),
}

impl QueryError {
    /// True for faults talking to the provider, as opposed to a classified
    /// answer about the symbol itself.
    pub fn is_operational(&self) -> bool {
        !matches!(self, QueryError::Normalization(_))
    }
}
