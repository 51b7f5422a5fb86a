//! Balance simulator for Monte Carlo analysis.
//!
//! Plays many independent sessions to see how fast items climb under the
//! level-up rule, and samples the roll at fixed levels to check the
//! observed rate against the exact one.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, sample_success_rate, ChanceSample};
