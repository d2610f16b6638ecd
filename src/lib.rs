//! subtrack: personal subscription cost tracker
//!
//! Reads subscription records from a local JSON store, fetches live forex
//! rates for the configured base currency, and reports monthly/yearly cost
//! totals in that currency.

pub mod cli;
pub mod config;
pub mod services;
pub mod types;
