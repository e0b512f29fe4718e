//! Catch simulator for Monte Carlo balance checks.
//!
//! Resolves many catches against a catalog snapshot and compares the
//! observed rarity frequencies with the closed-form expectation.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RarityStats, SimReport};
pub use runner::run_simulation;
