// src/lib.rs

pub mod client;
pub mod error;
pub mod models;
pub mod normalize;
pub mod store;

pub use client::{ProviderClient, ProviderConfig};
pub use error::{NormalizationError, QueryError};
pub use models::{ErrorBody, OverviewDocument, QuoteDocument, StockRecord};
pub use normalize::normalize;
pub use store::{LookupState, StockStore};
