//! Balance simulator CLI.
//!
//! Run Monte Carlo sessions to see how fast items level, or sample the
//! level-up roll at a fixed level.
//!
//! Examples:
//!   cargo run --bin simulate                          # 100 runs of 1000 wins
//!   cargo run --bin simulate -- -n 20 -w 5000        # longer sessions
//!   cargo run --bin simulate -- --seed 42            # reproducible run
//!   cargo run --bin simulate -- --level 50           # roll sample at level 50

use anyhow::{Context, Result};
use clap::Parser;
use levelcalc::core::battle::success_probability;
use levelcalc::core::settings::SettingKey;
use levelcalc::simulator::{run_simulation, sample_success_rate, SimConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Parser)]
#[command(name = "simulate", about = "Levelcalc balance simulator")]
struct Args {
    /// Number of simulated sessions
    #[arg(short = 'n', long, default_value_t = 100)]
    runs: u32,

    /// Wins per session
    #[arg(short = 'w', long, default_value_t = 1000)]
    wins: u32,

    /// Random seed for reproducibility
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// Sample the roll at this level instead of running sessions
    #[arg(long)]
    level: Option<u32>,

    /// Trials for --level sampling
    #[arg(long, default_value_t = 100_000)]
    trials: u32,

    /// Short sessions preset
    #[arg(long, conflicts_with = "long_haul")]
    quick: bool,

    /// Long sessions preset
    #[arg(long)]
    long_haul: bool,

    #[arg(long)]
    max_level: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    min_chance: Option<f64>,

    #[arg(long)]
    modifier_step: Option<f64>,

    /// Seconds per battle, for the elapsed time readout
    #[arg(long)]
    battle_time: Option<f64>,

    /// Save JSON report
    #[arg(long)]
    json: bool,

    /// Print every run
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> SimConfig {
        let mut config = if self.quick {
            SimConfig::quick()
        } else if self.long_haul {
            SimConfig::long_haul()
        } else {
            SimConfig {
                num_runs: self.runs,
                wins_per_run: self.wins,
                ..Default::default()
            }
        };
        config.seed = self.seed;
        if self.verbose {
            config.verbosity = 2;
        }

        let overrides = [
            (SettingKey::EffectiveMaxLevel, self.max_level),
            (SettingKey::MinChance, self.min_chance),
            (SettingKey::ModifierStepLevel, self.modifier_step),
            (SettingKey::Time, self.battle_time),
        ];
        for (key, value) in overrides {
            if value.is_some() {
                config.settings.set(key, value);
            }
        }
        config
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Some(level) = args.level {
        sample_level(level, args.trials, args.seed);
        return Ok(());
    }

    let config = args.config();

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              LEVELCALC BALANCE SIMULATOR                      ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Wins per run:   {}", config.wins_per_run);
    println!("  Battle time:    {}s", config.settings.time);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, report.to_json())
            .with_context(|| format!("failed to write {}", filename))?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}

fn sample_level(level: u32, trials: u32, seed: Option<u64>) {
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let sample = sample_success_rate(level, trials, &mut rng);

    println!("Level {} over {} rolls:", level, trials);
    println!(
        "  Observed:  {:.4} ({} successes)",
        sample.empirical_rate(),
        sample.successes
    );
    println!("  Expected:  {:.4}", success_probability(level));
    println!("  Deviation: {:+.4}", sample.deviation());
}
