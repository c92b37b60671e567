//! UK energy-flexibility revenue stacking explorer.
//!
//! A load-once [`data::CompatibilityStore`] answers pairwise and multi-way
//! service compatibility queries over a static JSON dataset, and the
//! [`estimator`] module turns user-entered asset, tariff, and participation
//! figures into deterministic annual cost/revenue/CO2 estimates.

#[cfg(feature = "api")]
pub mod api;
pub mod config;
/// Static reference data: dataset model, store, and display copy.
pub mod data;
pub mod estimator;
/// Append-only analytics and lead event log.
pub mod events;
pub mod io;
pub mod reporting;
