//! Dashgate - package entitlements and time-window filtering for the
//! business dashboard.
//!
//! - [`access`]: feature flags and creation limits per package tier,
//!   including pay-as-you-go add-ons
//! - [`timeframe`]: dashboard periods, response listing and the edit window
//! - [`local`]: config file and exported data loading

pub mod access;
pub mod local;
pub mod timeframe;
pub mod types;
