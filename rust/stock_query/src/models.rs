// src/models.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

// Provider fields are loosely typed: keep strings verbatim, render numbers and
// booleans to text, treat null as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a scalar field, found {}",
            other
        ))),
    }
}

// GLOBAL_QUOTE envelope
#[derive(Deserialize, Debug, Default, Clone)]
pub struct QuoteDocument {
    #[serde(rename = "Error Message", default, deserialize_with = "lenient_string")]
    pub error_message: Option<String>,

    #[serde(rename = "Note", default, deserialize_with = "lenient_string")]
    pub note: Option<String>,

    #[serde(rename = "Information", default, deserialize_with = "lenient_string")]
    pub information: Option<String>,

    #[serde(rename = "Global Quote", default)]
    pub global_quote: Option<GlobalQuote>,
}

// The nested quote object. The provider answers unknown tickers with `{}`.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct GlobalQuote {
    #[serde(rename = "01. symbol", default, deserialize_with = "lenient_string")]
    pub symbol: Option<String>,

    #[serde(rename = "02. open", default, deserialize_with = "lenient_string")]
    pub open: Option<String>,

    #[serde(rename = "03. high", default, deserialize_with = "lenient_string")]
    pub high: Option<String>,

    #[serde(rename = "04. low", default, deserialize_with = "lenient_string")]
    pub low: Option<String>,

    #[serde(rename = "05. price", default, deserialize_with = "lenient_string")]
    pub price: Option<String>,

    #[serde(rename = "06. volume", default, deserialize_with = "lenient_string")]
    pub volume: Option<String>,

    #[serde(rename = "07. latest trading day", default, deserialize_with = "lenient_string")]
    pub latest_trading_day: Option<String>,

    #[serde(rename = "08. previous close", default, deserialize_with = "lenient_string")]
    pub previous_close: Option<String>,

    #[serde(rename = "09. change", default, deserialize_with = "lenient_string")]
    pub change: Option<String>,

    #[serde(rename = "10. change percent", default, deserialize_with = "lenient_string")]
    pub change_percent: Option<String>,
}

impl GlobalQuote {
    pub fn is_empty(&self) -> bool {
        [
            &self.symbol,
            &self.open,
            &self.high,
            &self.low,
            &self.price,
            &self.volume,
            &self.latest_trading_day,
            &self.previous_close,
            &self.change,
            &self.change_percent,
        ]
        .iter()
        .all(|field| field.is_none())
    }
}

// OVERVIEW envelope. Only the fields the lookup renders are kept.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct OverviewDocument {
    #[serde(rename = "Error Message", default, deserialize_with = "lenient_string")]
    pub error_message: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub note: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub information: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub symbol: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub sector: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub industry: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub market_capitalization: Option<String>,

    #[serde(rename = "PERatio", default, deserialize_with = "lenient_string")]
    pub pe_ratio: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub book_value: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub dividend_yield: Option<String>,

    #[serde(rename = "EPS", default, deserialize_with = "lenient_string")]
    pub eps: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub beta: Option<String>,

    #[serde(rename = "52WeekHigh", default, deserialize_with = "lenient_string")]
    pub week52_high: Option<String>,

    #[serde(rename = "52WeekLow", default, deserialize_with = "lenient_string")]
    pub week52_low: Option<String>,
}

/// Display-ready record produced by [`crate::normalize::normalize`].
///
/// Optional fundamentals serialize as `null` rather than being omitted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    pub symbol: String,
    pub name: String,
    pub price: String,
    pub change: String,
    pub change_percent: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub volume: String,
    pub latest_trading_day: String,

    // Fundamentals
    pub pe_ratio: Option<String>,
    pub market_cap: String,
    pub book_value: Option<String>,
    pub dividend_yield: Option<String>,
    pub eps: Option<String>,
    pub beta: Option<String>,
    pub week52_high: Option<String>,
    pub week52_low: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorBody {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_document_parses_provider_keys() {
        let doc: QuoteDocument = serde_json::from_str(
            r#"{
                "Global Quote": {
                    "01. symbol": "IBM",
                    "05. price": "214.9400",
                    "06. volume": 4833284,
                    "10. change percent": "0.4252%"
                }
            }"#,
        )
        .unwrap();

        let quote = doc.global_quote.unwrap();
        assert_eq!(quote.symbol.as_deref(), Some("IBM"));
        assert_eq!(quote.price.as_deref(), Some("214.9400"));
        assert_eq!(quote.volume.as_deref(), Some("4833284"));
        assert_eq!(quote.change_percent.as_deref(), Some("0.4252%"));
        assert!(quote.open.is_none());
        assert!(doc.error_message.is_none());
    }

    #[test]
    fn test_empty_global_quote_is_empty() {
        let doc: QuoteDocument = serde_json::from_str(r#"{"Global Quote": {}}"#).unwrap();
        assert!(doc.global_quote.unwrap().is_empty());
    }

    #[test]
    fn test_overview_document_keeps_sentinels_and_nulls_absent() {
        let doc: OverviewDocument = serde_json::from_str(
            r#"{
                "Symbol": "IBM",
                "Name": "International Business Machines",
                "Sector": "TECHNOLOGY",
                "PERatio": "None",
                "52WeekHigh": "218.84",
                "Beta": null,
                "Description": "ignored"
            }"#,
        )
        .unwrap();

        assert_eq!(doc.name.as_deref(), Some("International Business Machines"));
        assert_eq!(doc.pe_ratio.as_deref(), Some("None"));
        assert_eq!(doc.week52_high.as_deref(), Some("218.84"));
        assert!(doc.beta.is_none());
    }

    #[test]
    fn test_non_scalar_field_is_rejected() {
        let result = serde_json::from_str::<OverviewDocument>(r#"{"Name": {"nested": true}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_stock_record_serializes_camel_case_with_nulls() {
        let record = StockRecord {
            symbol: "IBM".to_string(),
            name: "International Business Machines".to_string(),
            price: "214.94".to_string(),
            change: "0.91".to_string(),
            change_percent: "0.43".to_string(),
            open: "213.00".to_string(),
            high: "215.50".to_string(),
            low: "212.10".to_string(),
            volume: "4833284".to_string(),
            latest_trading_day: "2024-09-18".to_string(),
            pe_ratio: None,
            market_cap: "197.99B".to_string(),
            book_value: None,
            dividend_yield: Some("3.11%".to_string()),
            eps: None,
            beta: None,
            week52_high: Some("218.84".to_string()),
            week52_low: None,
            sector: Some("TECHNOLOGY".to_string()),
            industry: None,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["changePercent"], "0.43");
        assert_eq!(json["latestTradingDay"], "2024-09-18");
        assert_eq!(json["marketCap"], "197.99B");
        assert_eq!(json["week52High"], "218.84");
        assert!(json["peRatio"].is_null());
        assert!(json.as_object().unwrap().contains_key("industry"));
    }
}
