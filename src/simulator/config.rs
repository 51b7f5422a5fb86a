//! Simulation configuration.

use crate::core::settings::Settings;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of independent sessions to play
    pub num_runs: u32,

    /// Wins simulated in each session
    pub wins_per_run: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Settings every session starts with
    pub settings: Settings,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            wins_per_run: 1000,
            seed: None,
            settings: Settings::default(),
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Short sessions, enough to see early-level pacing
    pub fn quick() -> Self {
        Self {
            num_runs: 20,
            wins_per_run: 100,
            ..Default::default()
        }
    }

    /// Long sessions that push items well past the saturation level
    pub fn long_haul() -> Self {
        Self {
            num_runs: 20,
            wins_per_run: 50_000,
            ..Default::default()
        }
    }
}
