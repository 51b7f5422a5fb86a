//! Integration test: balance simulator

use levelcalc::core::battle::success_probability;
use levelcalc::simulator::{run_simulation, sample_success_rate, SimConfig};
use levelcalc::{SettingKey, Settings};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_sample_converges_at_level_50() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let sample = sample_success_rate(50, 100_000, &mut rng);
    assert!(sample.deviation().abs() < 0.01, "{:?}", sample);
    assert!((sample.expected_rate() - 0.5050).abs() < 1e-4);
}

#[test]
fn test_sample_floor_at_high_levels() {
    let mut rng = ChaCha8Rng::seed_from_u64(2025);
    let sample = sample_success_rate(150, 100_000, &mut rng);
    assert!(sample.successes > 0);
    assert!((sample.empirical_rate() - success_probability(150)).abs() < 0.01);
    assert!((success_probability(150) - 0.0198).abs() < 1e-4);
}

#[test]
fn test_levels_stay_within_win_count() {
    let config = SimConfig {
        num_runs: 10,
        wins_per_run: 500,
        seed: Some(7),
        verbosity: 0,
        ..Default::default()
    };
    let report = run_simulation(&config);

    assert_eq!(report.num_runs, 10);
    assert_eq!(report.item_names, vec!["Heal", "Power Strike", "Staff"]);
    for i in 0..report.item_names.len() {
        assert!(report.min_final_level[i] >= 1);
        assert!(report.max_final_level[i] <= 500);
        assert!(report.avg_final_level[i] >= f64::from(report.min_final_level[i]));
        assert!(report.avg_final_level[i] <= f64::from(report.max_final_level[i]));
    }
}

#[test]
fn test_long_sessions_climb_past_saturation() {
    // Expected wins to reach level 99 is about 375
    let config = SimConfig {
        num_runs: 3,
        wins_per_run: 5000,
        seed: Some(11),
        verbosity: 0,
        ..Default::default()
    };
    let report = run_simulation(&config);
    assert!(report.min_final_level.iter().all(|&level| level >= 99));
}

#[test]
fn test_report_reflects_settings() {
    let config = SimConfig {
        num_runs: 1,
        wins_per_run: 48,
        seed: Some(1),
        verbosity: 0,
        settings: Settings::default().with(SettingKey::Time, Some(3600.0)),
    };
    let report = run_simulation(&config);
    assert_eq!(report.elapsed_per_run(), "2.0 days");
    assert!(report.to_text().contains("48 wins"));
}
