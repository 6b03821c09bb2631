// src/store.rs

//! Client-side holder for the last lookup.
//!
//! State lives in a `watch` channel so views can subscribe to changes. Writes
//! go through the transition methods only, which keep `record` and `error`
//! mutually exclusive.

use crate::models::{ErrorBody, StockRecord};
use log::warn;
use reqwest::Client;
use tokio::sync::watch;

const GENERIC_FAILURE: &str = "Failed to fetch stock data";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupState {
    pub query: String,
    pub record: Option<StockRecord>,
    pub error: Option<String>,
    pub is_loading: bool,
}

#[derive(Debug)]
pub struct StockStore {
    state: watch::Sender<LookupState>,
}

impl Default for StockStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StockStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(LookupState::default());
        StockStore { state }
    }

    pub fn snapshot(&self) -> LookupState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<LookupState> {
        self.state.subscribe()
    }

    pub fn set_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.state.send_modify(|state| state.query = query);
    }

    /// Starts a lookup: previous result and error are cleared.
    pub fn begin(&self, query: impl Into<String>) {
        let query = query.into();
        self.state.send_modify(|state| {
            state.query = query;
            state.record = None;
            state.error = None;
            state.is_loading = true;
        });
    }

    pub fn succeed(&self, record: StockRecord) {
        self.state.send_modify(|state| {
            state.record = Some(record);
            state.error = None;
            state.is_loading = false;
        });
    }

    pub fn fail(&self, message: impl Into<String>) {
        let message = message.into();
        self.state.send_modify(|state| {
            state.record = None;
            state.error = Some(message);
            state.is_loading = false;
        });
    }

    pub fn reset(&self) {
        self.state.send_replace(LookupState::default());
    }

    /// Runs a lookup against a `/api/stocks` endpoint and records the outcome.
    /// A blank query leaves the state untouched.
    pub async fn search(&self, http: &Client, endpoint: &str, query: &str) -> LookupState {
        if query.trim().is_empty() {
            return self.snapshot();
        }

        self.begin(query);
        match fetch_record(http, endpoint, query).await {
            Ok(record) => self.succeed(record),
            Err(message) => self.fail(message),
        }
        self.snapshot()
    }
}

async fn fetch_record(http: &Client, endpoint: &str, query: &str) -> Result<StockRecord, String> {
    let response = http
        .get(endpoint)
        .query(&[("query", query)])
        .send()
        .await
        .map_err(|err| {
            warn!("Lookup request for {} failed: {}", query, err);
            GENERIC_FAILURE.to_string()
        })?;

    if response.status().is_success() {
        return response.json::<StockRecord>().await.map_err(|err| {
            warn!("Unreadable lookup response for {}: {}", query, err);
            GENERIC_FAILURE.to_string()
        });
    }

    match response.json::<ErrorBody>().await {
        Ok(body) => Err(body.error),
        Err(_) => Err(GENERIC_FAILURE.to_string()),
    }
}
