// src/normalize.rs

use crate::error::NormalizationError;
use crate::models::{OverviewDocument, QuoteDocument, StockRecord};

/// Strings the provider uses in place of an absent value.
pub const MISSING_SENTINELS: [&str; 3] = ["", "None", "N/A"];

/// True when a provider field is absent or holds one of the missing-value sentinels.
pub fn is_missing(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(v) => MISSING_SENTINELS.contains(&v.trim()),
    }
}

fn non_missing(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !is_missing(Some(v)))
}

// An explicit provider signal (error or advisory) is any non-blank value.
fn has_signal(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|v| !v.trim().is_empty())
}

fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn fixed2(value: f64) -> String {
    // Adding 0.0 folds -0.0 into 0.0 so it never prints as "-0.00".
    format!("{:.2}", value + 0.0)
}

/// Core quote field: two decimals, `"0.00"` when absent or unparseable.
pub fn format_decimal(value: Option<&str>) -> String {
    value
        .and_then(parse_number)
        .map(fixed2)
        .unwrap_or_else(|| "0.00".to_string())
}

/// Optional fundamentals field: two decimals, `None` when absent, sentinel or unparseable.
pub fn format_optional_decimal(value: Option<&str>) -> Option<String> {
    if is_missing(value) {
        return None;
    }
    value.and_then(parse_number).map(fixed2)
}

/// Drops the provider's trailing `%` and renders the bare number.
pub fn format_change_percent(value: Option<&str>) -> String {
    let bare = value.map(|v| {
        let v = v.trim();
        v.strip_suffix('%').unwrap_or(v)
    });
    format_decimal(bare)
}

/// Scales a market capitalization to `T`/`B`/`M`, or a plain integer below one million.
pub fn format_market_cap(value: f64) -> String {
    if value >= 1e12 {
        format!("{}T", fixed2(value / 1e12))
    } else if value >= 1e9 {
        format!("{}B", fixed2(value / 1e9))
    } else if value >= 1e6 {
        format!("{}M", fixed2(value / 1e6))
    } else {
        format!("{:.0}", value + 0.0)
    }
}

/// Converts a yield ratio to a percentage string, e.g. `0.025` → `"2.50%"`.
pub fn format_dividend_yield(value: Option<&str>) -> Option<String> {
    if is_missing(value) {
        return None;
    }
    value
        .and_then(parse_number)
        .map(|ratio| format!("{}%", fixed2(ratio * 100.0)))
}

/// Validates the two provider documents for `symbol` and builds a [`StockRecord`].
///
/// Checks run in order and the first failing one decides the outcome:
/// provider error message, provider advisory (rate limiting), missing or
/// empty quote, then the fundamentals gate (name, sector and a parseable
/// market capitalization must all be present and not sentinel-valued).
pub fn normalize(
    symbol: &str,
    quote_doc: &QuoteDocument,
    overview: &OverviewDocument,
) -> Result<StockRecord, NormalizationError> {
    let requested = symbol.trim().to_uppercase();

    if has_signal(&quote_doc.error_message) || has_signal(&overview.error_message) {
        return Err(NormalizationError::InvalidSymbol);
    }

    let advisories = [
        &quote_doc.note,
        &quote_doc.information,
        &overview.note,
        &overview.information,
    ];
    if advisories.into_iter().any(has_signal) {
        return Err(NormalizationError::RateLimited);
    }

    let quote = match &quote_doc.global_quote {
        Some(quote) if !quote.is_empty() => quote,
        _ => return Err(NormalizationError::NotFound),
    };

    let name = non_missing(&overview.name);
    let sector = non_missing(&overview.sector);
    let market_cap = non_missing(&overview.market_capitalization).and_then(parse_number);

    let (name, sector, market_cap) = match (name, sector, market_cap) {
        (Some(name), Some(sector), Some(market_cap)) => (name, sector, market_cap),
        _ => {
            return Err(NormalizationError::InvalidOrUnlisted { symbol: requested });
        }
    };

    let symbol = non_missing(&quote.symbol)
        .map(|s| s.trim().to_string())
        .unwrap_or(requested);

    Ok(StockRecord {
        name: name.to_string(),
        price: format_decimal(quote.price.as_deref()),
        change: format_decimal(quote.change.as_deref()),
        change_percent: format_change_percent(quote.change_percent.as_deref()),
        open: format_decimal(quote.open.as_deref()),
        high: format_decimal(quote.high.as_deref()),
        low: format_decimal(quote.low.as_deref()),
        volume: quote
            .volume
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or("0")
            .to_string(),
        latest_trading_day: quote
            .latest_trading_day
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or("N/A")
            .to_string(),
        pe_ratio: format_optional_decimal(overview.pe_ratio.as_deref()),
        market_cap: format_market_cap(market_cap),
        book_value: format_optional_decimal(overview.book_value.as_deref()),
        dividend_yield: format_dividend_yield(overview.dividend_yield.as_deref()),
        eps: format_optional_decimal(overview.eps.as_deref()),
        beta: format_optional_decimal(overview.beta.as_deref()),
        week52_high: format_optional_decimal(overview.week52_high.as_deref()),
        week52_low: format_optional_decimal(overview.week52_low.as_deref()),
        sector: Some(sector.to_string()),
        industry: non_missing(&overview.industry).map(str::to_string),
        symbol,
    })
}
