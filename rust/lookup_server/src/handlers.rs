// src/handlers.rs

use crate::models::LookupParams;
use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use log::{error, info};
use stock_query::{ErrorBody, NormalizationError, ProviderClient, QueryError};
use validator::Validate;

pub const SYMBOL_REQUIRED: &str = "Stock symbol is required";
pub const FETCH_FAILED: &str = "Failed to fetch stock data. Please try again later.";

#[get("/api/stocks")]
pub async fn lookup(req: HttpRequest, client: web::Data<ProviderClient>) -> impl Responder {
    let params = LookupParams::from_query_string(req.query_string());
    if params.validate().is_err() {
        return HttpResponse::BadRequest().json(ErrorBody::new(SYMBOL_REQUIRED));
    }

    let symbol = params.symbol();
    match client.lookup(&symbol).await {
        Ok(record) => {
            info!("Served quote for {}", record.symbol);
            HttpResponse::Ok().json(record)
        }
        Err(err) if err.is_operational() => {
            // Log the detail, answer with the generic message.
            error!("Stock API error for {}: {}", symbol, err);
            HttpResponse::InternalServerError().json(ErrorBody::new(FETCH_FAILED))
        }
        Err(err) => {
            info!("Lookup for {} rejected: {}", symbol, err);
            rejection_response(&err)
        }
    }
}

// User-facing outcomes carry their own message.
fn rejection_response(err: &QueryError) -> HttpResponse {
    let body = ErrorBody::new(err.to_string());
    match err {
        QueryError::Normalization(NormalizationError::RateLimited) => {
            HttpResponse::TooManyRequests().json(body)
        }
        _ => HttpResponse::NotFound().json(body),
    }
}

#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("OK")
}
