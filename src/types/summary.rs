//! Aggregated cost totals

use serde::{Deserialize, Serialize};

/// Cost totals in the base currency, across all convertible subscriptions.
///
/// `monthly_total`/`yearly_total` sum only subscriptions billed on that
/// interval. The split totals fold the other interval in: yearly costs
/// amortized over 12 months, monthly costs annualized by 12.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CostSummary {
    /// Resolved base currency code (uppercase)
    pub currency: String,
    pub monthly_total: f64,
    pub monthly_split_total: f64,
    pub yearly_total: f64,
    pub yearly_split_total: f64,
}

impl CostSummary {
    /// All-zero totals, used when the store holds no subscriptions.
    pub fn zero(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            monthly_total: 0.0,
            monthly_split_total: 0.0,
            yearly_total: 0.0,
            yearly_split_total: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_summary() {
        let summary = CostSummary::zero("SEK");
        assert_eq!(summary.currency, "SEK");
        assert_eq!(summary.monthly_total, 0.0);
        assert_eq!(summary.yearly_split_total, 0.0);
    }

    #[test]
    fn test_serializes_camel_case_keys() {
        let summary = CostSummary {
            currency: "SEK".into(),
            monthly_total: 10.0,
            monthly_split_total: 20.0,
            yearly_total: 120.0,
            yearly_split_total: 240.0,
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["currency"], "SEK");
        assert_eq!(json["monthlyTotal"], 10.0);
        assert_eq!(json["monthlySplitTotal"], 20.0);
        assert_eq!(json["yearlyTotal"], 120.0);
        assert_eq!(json["yearlySplitTotal"], 240.0);
    }
}
