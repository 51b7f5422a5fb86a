//! Simulation runner. Plays whole sessions through the same store and
//! battle functions the interactive calculator uses.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::core::battle::{is_level_up, roll_chance, simulate_wins, success_probability};
use crate::core::store::GameStore;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(u64::from(run_idx))),
            None => ChaCha8Rng::from_entropy(),
        };

        let run = simulate_single_run(config, &mut rng);

        if config.verbosity >= 2 {
            let levels: Vec<String> = run
                .item_names
                .iter()
                .zip(&run.final_levels)
                .map(|(name, level)| format!("{} {}", name, level))
                .collect();
            println!(
                "Run {}/{} - {} level-ups: {}",
                run_idx + 1,
                config.num_runs,
                run.total_level_ups,
                levels.join(", ")
            );
        }

        all_runs.push(run);
    }

    log::info!(
        "Simulated {} runs of {} wins",
        config.num_runs,
        config.wins_per_run
    );

    SimReport::from_runs(all_runs, config)
}

fn simulate_single_run<R: Rng>(config: &SimConfig, rng: &mut R) -> RunStats {
    let mut store = GameStore::with_settings(config.settings);
    let report = simulate_wins(&mut store, config.wins_per_run, rng);

    let mut level_ups = vec![0u32; store.items().len()];
    for level_up in &report.level_ups {
        level_ups[level_up.index] += 1;
    }

    RunStats {
        item_names: store.items().iter().map(|i| i.name.clone()).collect(),
        final_levels: store.items().iter().map(|i| i.level).collect(),
        level_ups,
        total_level_ups: report.level_ups.len() as u32,
        battles: store.battles_count(),
        history_len: store.history().len(),
    }
}

/// Empirical level-up rate at a fixed level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChanceSample {
    pub level: u32,
    pub trials: u32,
    pub successes: u32,
}

impl ChanceSample {
    pub fn empirical_rate(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        f64::from(self.successes) / f64::from(self.trials)
    }

    pub fn expected_rate(&self) -> f64 {
        success_probability(self.level)
    }

    pub fn deviation(&self) -> f64 {
        self.empirical_rate() - self.expected_rate()
    }
}

/// Rolls `trials` times against an item held at `level`.
pub fn sample_success_rate<R: Rng + ?Sized>(level: u32, trials: u32, rng: &mut R) -> ChanceSample {
    let successes = (0..trials)
        .filter(|_| is_level_up(roll_chance(rng), level))
        .count() as u32;
    ChanceSample {
        level,
        trials,
        successes,
    }
}
