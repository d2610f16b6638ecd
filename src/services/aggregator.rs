//! Aggregator service for computing subscription cost totals
//!
//! Converts every convertible subscription into the base currency and
//! rolls the amounts up into monthly/yearly totals plus the cross-interval
//! "split" views. Stateless; fetches fresh inputs on every call.

use crate::services::rates::{RateEntry, RateProvider};
use crate::services::store::SubscriptionStore;
use crate::types::{BillingInterval, CostSummary, Result, Subscription, SubtrackError};

/// Aggregator for computing cost totals in the base currency
pub struct CostAggregator;

impl CostAggregator {
    /// Compute cost totals for everything in the store.
    ///
    /// With an empty store this returns zero totals without contacting
    /// the rate provider at all.
    pub fn total_cost(
        store: &dyn SubscriptionStore,
        provider: &dyn RateProvider,
        base_currency: &str,
    ) -> Result<CostSummary> {
        let base = base_currency.to_uppercase();

        let subscriptions = store.fetch_all()?;
        if subscriptions.is_empty() {
            return Ok(CostSummary::zero(base));
        }

        let rates = provider.fetch_rates(&base)?;
        Self::summarize(&subscriptions, &rates, &base)
    }

    /// Aggregate already-fetched inputs.
    ///
    /// Subscriptions whose currency is neither the base currency nor in
    /// the rate table are excluded from every total. They are never
    /// counted as zero; they simply do not exist for these sums.
    pub fn summarize(
        subscriptions: &[Subscription],
        rates: &[RateEntry],
        base_currency: &str,
    ) -> Result<CostSummary> {
        let base = base_currency.to_uppercase();

        let mut monthly_total = 0.0;
        let mut yearly_total = 0.0;

        for subscription in subscriptions {
            if !Self::is_exchangeable(subscription, rates, &base) {
                continue;
            }

            let converted = Self::convert(subscription.cost, &subscription.currency, rates, &base)?;

            match subscription.billing_interval {
                BillingInterval::Monthly => monthly_total += converted,
                BillingInterval::Yearly => yearly_total += converted,
                // Weekly billing never took part in the cost totals
                BillingInterval::Weekly => {}
            }
        }

        // Conversion is linear in cost, so the split views reduce to the
        // already-converted interval totals.
        Ok(CostSummary {
            currency: base,
            monthly_total,
            monthly_split_total: monthly_total + yearly_total / 12.0,
            yearly_total,
            yearly_split_total: yearly_total + monthly_total * 12.0,
        })
    }

    /// Whether a subscription's cost can be expressed in the base currency
    fn is_exchangeable(subscription: &Subscription, rates: &[RateEntry], base: &str) -> bool {
        let currency = subscription.currency.to_uppercase();
        currency == base || rates.iter().any(|r| r.iso.to_uppercase() == currency)
    }

    /// Convert a cost into the base currency.
    ///
    /// Callers must have established exchangeability first; a missing rate
    /// here means the filter and the lookup disagree, and a wrong money
    /// total is worse than a failed request.
    fn convert(cost: f64, currency: &str, rates: &[RateEntry], base: &str) -> Result<f64> {
        let currency = currency.to_uppercase();

        if currency == base {
            return Ok(cost);
        }

        let rate = rates
            .iter()
            .find(|r| r.iso.to_uppercase() == currency)
            .ok_or_else(|| {
                SubtrackError::Inconsistency(format!(
                    "no rate for exchangeable currency {}",
                    currency
                ))
            })?;

        Ok(cost * rate.base_multiplier())
    }
}
