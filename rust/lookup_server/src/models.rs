// src/models.rs

use actix_web::web;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Deserialize, Serialize, Validate, Debug)]
pub struct LookupParams {
    // Absent `query` is treated like an empty one.
    #[serde(default)]
    #[validate(custom(function = "validate_symbol"))]
    pub query: String,
}

impl LookupParams {
    /// Takes the first `query` value from a raw query string. Repeated keys
    /// and undecodable strings never fail here; they fall to validation.
    pub fn from_query_string(query_string: &str) -> Self {
        let pairs = web::Query::<Vec<(String, String)>>::from_query(query_string)
            .map(web::Query::into_inner)
            .unwrap_or_default();
        let query = pairs
            .into_iter()
            .find(|(key, _)| key == "query")
            .map(|(_, value)| value)
            .unwrap_or_default();
        LookupParams { query }
    }

    pub fn symbol(&self) -> String {
        self.query.trim().to_uppercase()
    }
}

fn validate_symbol(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("symbol_required"));
    }
    Ok(())
}
