use crate::config::Config;
use crate::services::{CostAggregator, JsonFileStore, SubscriptionStore, ValutaRates};
use crate::types::{CostSummary, Subscription, SubtrackError};
use clap::{Parser, Subcommand};

/// Personal subscription cost tracker
#[derive(Parser)]
#[command(name = "subtrack")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show cost totals in the base currency (default)
    Total {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List stored subscriptions
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let config = Config::from_env()?;

        match self.command {
            None => run_total(&config, false),
            Some(Commands::Total { json }) => run_total(&config, json),
            Some(Commands::List { json }) => run_list(&config, json),
        }
    }
}

fn run_total(config: &Config, json: bool) -> anyhow::Result<()> {
    let store = JsonFileStore::new(config.store_path.clone());
    let provider = ValutaRates::new();

    let summary = CostAggregator::total_cost(&store, &provider, &config.base_currency)
        .map_err(|e| surface_failure(e, "failed to compute subscription totals"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn run_list(config: &Config, json: bool) -> anyhow::Result<()> {
    let store = JsonFileStore::new(config.store_path.clone());
    let subscriptions = store
        .fetch_all()
        .map_err(|e| surface_failure(e, "failed to load subscriptions"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&subscriptions)?);
    } else if subscriptions.is_empty() {
        println!("No subscriptions in {}", config.store_path.display());
    } else {
        for subscription in &subscriptions {
            print_subscription(subscription);
        }
    }
    Ok(())
}

/// Log the real cause to stderr, hand the caller a generic failure.
///
/// Upstream payloads and rate details stay out of the surfaced message.
fn surface_failure(err: SubtrackError, message: &str) -> anyhow::Error {
    match &err {
        SubtrackError::Inconsistency(_) => {
            eprintln!("[subtrack] {} (this is a bug, please report it)", err);
        }
        _ => eprintln!("[subtrack] {}", err),
    }
    anyhow::anyhow!("{}", message)
}

fn print_summary(summary: &CostSummary) {
    println!("Subscription costs ({})", summary.currency);
    println!("  monthly:        {}", summary.monthly_total);
    println!("  monthly split:  {}", summary.monthly_split_total);
    println!("  yearly:         {}", summary.yearly_total);
    println!("  yearly split:   {}", summary.yearly_split_total);
}

fn print_subscription(subscription: &Subscription) {
    let status = if subscription.active { "" } else { " [inactive]" };
    println!(
        "{} ({}) - {} {} {}{}",
        subscription.title,
        subscription.service,
        subscription.cost,
        subscription.currency,
        subscription.billing_interval.as_str(),
        status
    );
}
