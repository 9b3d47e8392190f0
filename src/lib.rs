//! Synthetic residential appliance populations and tariff bid curves for an EDCo.

pub mod catalog;
pub mod config;
/// Tariff model, appliance sampling, population build, and consolidation.
pub mod r#gen;
pub mod io;
pub mod runner;
