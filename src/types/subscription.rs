//! Subscription record types

use serde::{Deserialize, Serialize};

/// How often a subscription bills.
///
/// Only `Monthly` and `Yearly` participate in cost aggregation; `Weekly`
/// still parses so older store files load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingInterval {
    Monthly,
    /// One schema revision persisted this variant as "daily".
    #[serde(alias = "daily")]
    Weekly,
    Yearly,
}

impl BillingInterval {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingInterval::Monthly => "monthly",
            BillingInterval::Weekly => "weekly",
            BillingInterval::Yearly => "yearly",
        }
    }
}

/// A single tracked subscription, as stored on disk.
///
/// `cost` is the amount in `currency` charged per one billing cycle of
/// `billing_interval`. Currency codes are ISO-4217-like but up to 10
/// characters, since crypto tickers do not fit in 3.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub service: String,
    pub title: String,
    pub cost: f64,
    pub currency: String,
    pub billing_interval: BillingInterval,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_fields() {
        let json = r#"{
            "service": "spotify",
            "title": "Spotify Premium",
            "cost": 119.0,
            "currency": "SEK",
            "billingInterval": "monthly"
        }"#;

        let sub: Subscription = serde_json::from_str(json).unwrap();
        assert_eq!(sub.service, "spotify");
        assert_eq!(sub.billing_interval, BillingInterval::Monthly);
        // active defaults to true when omitted
        assert!(sub.active);
    }

    #[test]
    fn test_interval_serialized_lowercase() {
        let json = serde_json::to_string(&BillingInterval::Yearly).unwrap();
        assert_eq!(json, "\"yearly\"");
    }

    #[test]
    fn test_interval_daily_alias_maps_to_weekly() {
        let interval: BillingInterval = serde_json::from_str("\"daily\"").unwrap();
        assert_eq!(interval, BillingInterval::Weekly);
    }

    #[test]
    fn test_interval_unknown_value_rejected() {
        let result: std::result::Result<BillingInterval, _> =
            serde_json::from_str("\"quarterly\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_interval_as_str() {
        assert_eq!(BillingInterval::Monthly.as_str(), "monthly");
        assert_eq!(BillingInterval::Weekly.as_str(), "weekly");
        assert_eq!(BillingInterval::Yearly.as_str(), "yearly");
    }
}
