//! Operator configuration
//!
//! All settings come from the environment with sane defaults, so the
//! binary runs with zero setup: totals in SEK over `~/.subtrack/`.

use crate::types::{Result, SubtrackError};
use std::path::PathBuf;

/// Environment variable overriding the base currency
const CURRENCY_ENV: &str = "SUBTRACK_CURRENCY";

/// Environment variable overriding the store file location
const STORE_ENV: &str = "SUBTRACK_STORE";

/// Default base currency when none is configured
const DEFAULT_CURRENCY: &str = "SEK";

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Uppercased base currency code (1-10 chars)
    pub base_currency: String,
    /// Location of the subscription store JSON file
    pub store_path: PathBuf,
}

impl Config {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self> {
        let base_currency = match std::env::var(CURRENCY_ENV) {
            Ok(code) => normalize_currency(&code)?,
            Err(_) => DEFAULT_CURRENCY.to_string(),
        };

        let store_path = match std::env::var(STORE_ENV) {
            Ok(path) => PathBuf::from(path),
            Err(_) => default_store_path()?,
        };

        Ok(Self {
            base_currency,
            store_path,
        })
    }
}

/// Validate a currency code and normalize it to uppercase.
///
/// Codes are 1-10 characters: longer than ISO-4217's 3 because the store
/// also holds crypto tickers.
pub fn normalize_currency(code: &str) -> Result<String> {
    let trimmed = code.trim();
    if trimmed.is_empty() || trimmed.len() > 10 {
        return Err(SubtrackError::Config(format!(
            "base currency must be 1-10 characters, got {:?}",
            code
        )));
    }
    Ok(trimmed.to_uppercase())
}

/// Default store location (~/.subtrack/subscriptions.json)
fn default_store_path() -> Result<PathBuf> {
    let base_dirs = directories::BaseDirs::new()
        .ok_or_else(|| SubtrackError::Config("Cannot determine home directory".into()))?;
    Ok(base_dirs
        .home_dir()
        .join(".subtrack")
        .join("subscriptions.json"))
}
