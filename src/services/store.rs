//! Subscription store
//!
//! The aggregator only ever reads subscriptions, so the store surface is a
//! single fetch-all capability. Backing it with a trait keeps the
//! aggregator testable against in-memory fakes.

use crate::types::{Result, Subscription, SubtrackError};
use std::fs;
use std::path::PathBuf;

/// Read access to the subscription records
pub trait SubscriptionStore {
    /// Fetch every stored subscription.
    ///
    /// An empty store returns `Ok(vec![])`; only an actual read failure
    /// returns an error, so callers can tell "no rows" from "store down".
    fn fetch_all(&self) -> Result<Vec<Subscription>>;
}

/// Store backed by a JSON file holding an array of subscriptions
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SubscriptionStore for JsonFileStore {
    fn fetch_all(&self) -> Result<Vec<Subscription>> {
        // A store file that was never created is an empty store,
        // not a failure.
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let subscriptions: Vec<Subscription> = serde_json::from_str(&content).map_err(|e| {
            SubtrackError::Store(format!("invalid store file {}: {}", self.path.display(), e))
        })?;
        Ok(subscriptions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BillingInterval;
    use tempfile::TempDir;

    fn write_store(dir: &TempDir, content: &str) -> JsonFileStore {
        let path = dir.path().join("subscriptions.json");
        fs::write(&path, content).unwrap();
        JsonFileStore::new(path)
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nonexistent.json"));

        let subscriptions = store.fetch_all().unwrap();
        assert!(subscriptions.is_empty());
    }

    #[test]
    fn test_reads_subscription_array() {
        let dir = TempDir::new().unwrap();
        let store = write_store(
            &dir,
            r#"[
                {
                    "service": "spotify",
                    "title": "Spotify Premium",
                    "cost": 119.0,
                    "currency": "SEK",
                    "billingInterval": "monthly",
                    "active": true
                },
                {
                    "service": "fastmail",
                    "title": "Fastmail Standard",
                    "cost": 60.0,
                    "currency": "USD",
                    "billingInterval": "yearly",
                    "active": true
                }
            ]"#,
        );

        let subscriptions = store.fetch_all().unwrap();
        assert_eq!(subscriptions.len(), 2);
        assert_eq!(subscriptions[0].currency, "SEK");
        assert_eq!(subscriptions[1].billing_interval, BillingInterval::Yearly);
    }

    #[test]
    fn test_empty_array_is_zero_rows() {
        let dir = TempDir::new().unwrap();
        let store = write_store(&dir, "[]");

        let subscriptions = store.fetch_all().unwrap();
        assert!(subscriptions.is_empty());
    }

    #[test]
    fn test_malformed_json_is_store_error() {
        let dir = TempDir::new().unwrap();
        let store = write_store(&dir, "not valid json{{{");

        let err = store.fetch_all().unwrap_err();
        assert!(matches!(err, SubtrackError::Store(_)));
    }

    #[test]
    fn test_wrong_shape_is_store_error() {
        let dir = TempDir::new().unwrap();
        // Object instead of array
        let store = write_store(&dir, r#"{"service": "spotify"}"#);

        let err = store.fetch_all().unwrap_err();
        assert!(matches!(err, SubtrackError::Store(_)));
    }
}
