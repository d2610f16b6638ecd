//! Forex rate provider
//!
//! Fetches current exchange rates for the configured base currency from
//! api.valuta.se. Transport failures and payload-shape failures are kept
//! as distinct error kinds: a payload that no longer matches the
//! documented schema is treated as a possible integrity problem on the
//! wire, not just a parse bug, and is never echoed back to the caller.

use crate::types::{Result, SubtrackError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Rate API base URL
const VALUTA_BASE_URL: &str = "https://api.valuta.se";

/// HTTP request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// One row of the provider's rate table.
///
/// `change` is published by the provider but unused here; it stays in the
/// shape so validation rejects payloads that dropped it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RateEntry {
    pub iso: String,
    pub change: f64,
    pub value: f64,
}

impl RateEntry {
    /// Multiplier converting one unit of `iso` currency into the base
    /// currency. api.valuta.se publishes rates scaled by 100, so the
    /// raw value must be divided by 100 (upstream API convention).
    pub fn base_multiplier(&self) -> f64 {
        self.value / 100.0
    }
}

/// Current exchange rates for a base currency
pub trait RateProvider {
    /// Fetch the rate table relative to `base` (a currency code).
    fn fetch_rates(&self, base: &str) -> Result<Vec<RateEntry>>;
}

/// Rate provider backed by api.valuta.se
pub struct ValutaRates {
    base_url: String,
    timeout: Duration,
}

impl ValutaRates {
    pub fn new() -> Self {
        Self {
            base_url: VALUTA_BASE_URL.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }

    /// Custom endpoint constructor (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }

    fn rates_url(&self, base: &str) -> String {
        format!("{}/api/{}/rates/", self.base_url, base.to_lowercase())
    }
}

impl Default for ValutaRates {
    fn default() -> Self {
        Self::new()
    }
}

impl RateProvider for ValutaRates {
    fn fetch_rates(&self, base: &str) -> Result<Vec<RateEntry>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| SubtrackError::RateFetch(format!("HTTP client error: {}", e)))?;

        let response = client
            .get(self.rates_url(base))
            .send()
            .map_err(|e| SubtrackError::RateFetch(format!("HTTP request failed: {}", e)))?;

        let body = response
            .text()
            .map_err(|e| SubtrackError::RateFetch(format!("failed to read response: {}", e)))?;

        parse_rates(&body)
    }
}

/// Validate a provider payload against the expected rate-table shape.
///
/// The error message deliberately omits the payload itself.
pub fn parse_rates(body: &str) -> Result<Vec<RateEntry>> {
    serde_json::from_str(body).map_err(|e| {
        SubtrackError::RateSchema(format!(
            "rates payload did not match schema ({}), man in the middle?",
            e
        ))
    })
}
