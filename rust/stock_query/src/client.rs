// src/client.rs

use crate::error::QueryError;
use crate::models::{OverviewDocument, QuoteDocument, StockRecord};
use crate::normalize::normalize;
use log::{debug, warn};
use reqwest::header::CACHE_CONTROL;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co";
pub const DEMO_API_KEY: &str = "demo";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

const QUOTE_FUNCTION: &str = "GLOBAL_QUOTE";
const OVERVIEW_FUNCTION: &str = "OVERVIEW";

// Freshness hints for intermediary caches
const QUOTE_MAX_AGE: &str = "max-age=300";
const OVERVIEW_MAX_AGE: &str = "max-age=3600";

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: DEMO_API_KEY.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ProviderConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        ProviderConfig {
            base_url: base_url.into(),
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Reads `ALPHA_VANTAGE_API_KEY`, `ALPHA_VANTAGE_BASE_URL` and
    /// `ALPHA_VANTAGE_TIMEOUT_SECS`. The key falls back to the public demo key.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let timeout_secs = read("ALPHA_VANTAGE_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        ProviderConfig {
            base_url: read("ALPHA_VANTAGE_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key: read("ALPHA_VANTAGE_API_KEY").unwrap_or_else(|| DEMO_API_KEY.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

/// HTTP client for the quote provider's `query` endpoint.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    http: Client,
    config: ProviderConfig,
}

impl ProviderClient {
    pub fn new(config: ProviderConfig) -> Result<Self, QueryError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(ProviderClient { http, config })
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        function: &'static str,
        symbol: &str,
        max_age: &str,
    ) -> Result<T, QueryError> {
        let url = format!("{}/query", self.config.base_url.trim_end_matches('/'));
        debug!("Requesting {} for {}", function, symbol);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("function", function),
                ("symbol", symbol),
                ("apikey", self.config.api_key.as_str()),
            ])
            .header(CACHE_CONTROL, max_age)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} request for {} returned {}", function, symbol, status);
            return Err(QueryError::Status { function, status });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body)
            .map_err(|source| QueryError::MalformedResponse { function, source })
    }

    pub async fn fetch_quote(&self, symbol: &str) -> Result<QuoteDocument, QueryError> {
        self.fetch(QUOTE_FUNCTION, symbol, QUOTE_MAX_AGE).await
    }

    pub async fn fetch_overview(&self, symbol: &str) -> Result<OverviewDocument, QueryError> {
        self.fetch(OVERVIEW_FUNCTION, symbol, OVERVIEW_MAX_AGE).await
    }

    /// Fetches both documents concurrently; the first failure aborts the pair.
    pub async fn fetch_documents(
        &self,
        symbol: &str,
    ) -> Result<(QuoteDocument, OverviewDocument), QueryError> {
        tokio::try_join!(self.fetch_quote(symbol), self.fetch_overview(symbol))
    }

    pub async fn lookup(&self, symbol: &str) -> Result<StockRecord, QueryError> {
        let symbol = symbol.trim().to_uppercase();
        let (quote, overview) = self.fetch_documents(&symbol).await?;
        Ok(normalize(&symbol, &quote, &overview)?)
    }
}
