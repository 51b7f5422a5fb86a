//! Integration test: battle simulation
//!
//! Drives the store through win batches, manual bumps and settings changes
//! and checks the leveling rule end to end.

use levelcalc::core::battle::{
    bump_item_level, format_history_line, roll_level_up, simulate_wins, success_probability,
};
use levelcalc::core::time_format::format_elapsed;
use levelcalc::{GameStore, SettingKey, Settings};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn levels(store: &GameStore) -> Vec<u32> {
    store.items().iter().map(|i| i.level).collect()
}

// =============================================================================
// Battle counter
// =============================================================================

#[test]
fn test_zero_wins_mutates_nothing() {
    let mut store = GameStore::new();
    let before_items = store.items().to_vec();

    let report = simulate_wins(&mut store, 0, &mut rng(1));

    assert_eq!(report.wins, 0);
    assert!(report.level_ups.is_empty());
    assert_eq!(store.battles_count(), 0);
    assert_eq!(store.items(), before_items.as_slice());
    assert!(store.history().is_empty());
}

#[test]
fn test_five_wins_count_exactly_five_battles() {
    for seed in 0..20 {
        let mut store = GameStore::new();
        simulate_wins(&mut store, 5, &mut rng(seed));
        assert_eq!(store.battles_count(), 5, "seed {}", seed);
    }
}

#[test]
fn test_batches_accumulate() {
    let mut store = GameStore::new();
    let mut r = rng(2);
    for batch in [1, 10, 100, 1000, 5000] {
        simulate_wins(&mut store, batch, &mut r);
    }
    assert_eq!(store.battles_count(), 6111);
}

// =============================================================================
// Levels and history
// =============================================================================

#[test]
fn test_levels_never_decrease() {
    let mut store = GameStore::new();
    let mut r = rng(3);
    let mut previous = levels(&store);

    for step in 0..400 {
        if step % 50 == 0 {
            bump_item_level(&mut store, (step / 50) % 3, 25);
        } else {
            simulate_wins(&mut store, 7, &mut r);
        }
        let current = levels(&store);
        for (before, after) in previous.iter().zip(&current) {
            assert!(after >= before);
        }
        previous = current;
    }
}

#[test]
fn test_first_win_levels_every_item_in_order() {
    // Level 0 succeeds on every roll
    let mut store = GameStore::new();
    let report = simulate_wins(&mut store, 1, &mut rng(4));

    let indices: Vec<usize> = report.level_ups.iter().map(|l| l.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    assert_eq!(levels(&store), vec![1, 1, 1]);

    // Newest first: Staff was rolled last
    let names: Vec<&str> = store
        .history()
        .iter()
        .map(|line| line.split(' ').nth(1).unwrap_or(""))
        .collect();
    assert_eq!(names, vec!["Staff", "Power", "Heal"]);
}

#[test]
fn test_history_line_carries_fields() {
    let mut store = GameStore::new();
    let report = simulate_wins(&mut store, 1, &mut rng(5));
    let heal = &report.level_ups[0];

    let expected = format_history_line("Heal", 0, 1, heal.roll, 1);
    assert_eq!(store.history().back(), Some(&expected));
    assert_eq!(store.items()[0].last_chance, heal.roll);
}

#[test]
fn test_history_prepends_e2_before_e1() {
    let mut store = GameStore::new();
    let e1 = bump_item_level(&mut store, 0, 25).unwrap();
    let e2 = bump_item_level(&mut store, 1, 25).unwrap();

    let history: Vec<&String> = store.history().iter().collect();
    assert_eq!(history.len(), 2);
    assert_eq!(
        *history[0],
        format_history_line(&e2.name, e2.previous_level, 25, -1, 0)
    );
    assert_eq!(
        *history[1],
        format_history_line(&e1.name, e1.previous_level, 25, -1, 0)
    );
}

#[test]
fn test_history_line_uses_current_battle_count() {
    let mut store = GameStore::new();
    let mut r = rng(6);
    let report = simulate_wins(&mut store, 200, &mut r);

    let mut battles: Vec<u64> = report.level_ups.iter().map(|l| l.battle).collect();
    assert_eq!(battles.first(), Some(&1));
    let sorted = {
        let mut s = battles.clone();
        s.sort_unstable();
        s
    };
    assert_eq!(battles, sorted);
    battles.dedup();
    assert!(battles.len() > 1);
}

#[test]
fn test_out_of_range_update_leaves_items_alone() {
    let mut store = GameStore::new();
    simulate_wins(&mut store, 20, &mut rng(7));
    let before = store.items().to_vec();

    store.update_item_level(store.items().len(), 5, 50);
    assert!(bump_item_level(&mut store, 99, 25).is_none());
    assert!(roll_level_up(&mut store, 99, 1, &mut rng(7)).is_none());

    assert_eq!(store.items(), before.as_slice());
}

// =============================================================================
// Probability
// =============================================================================

fn empirical_rate_at(level: u32, trials: u32, seed: u64) -> f64 {
    let mut store = GameStore::new();
    let mut r = rng(seed);
    let mut successes = 0u32;
    for _ in 0..trials {
        store.replace_items(GameStore::new().items().to_vec());
        store.update_item_level(0, level, 0);
        if roll_level_up(&mut store, 0, 1, &mut r).is_some() {
            successes += 1;
        }
    }
    f64::from(successes) / f64::from(trials)
}

#[test]
fn test_success_rate_at_level_50() {
    let rate = empirical_rate_at(50, 100_000, 8);
    assert!((rate - 51.0 / 101.0).abs() < 0.01, "rate {}", rate);
}

#[test]
fn test_success_rate_floors_above_99() {
    for level in [99, 100, 500] {
        let rate = empirical_rate_at(level, 100_000, 9);
        assert!((rate - 2.0 / 101.0).abs() < 0.01, "level {} rate {}", level, rate);
        assert!(rate > 0.0);
    }
    assert_eq!(success_probability(99), success_probability(10_000));
}

#[test]
fn test_min_chance_has_no_effect() {
    let low = Settings::default().with(SettingKey::MinChance, Some(1.0));
    let high = Settings::default().with(SettingKey::MinChance, Some(100.0));

    let mut a = GameStore::with_settings(low);
    let mut b = GameStore::with_settings(high);
    simulate_wins(&mut a, 3000, &mut rng(10));
    simulate_wins(&mut b, 3000, &mut rng(10));

    assert_eq!(levels(&a), levels(&b));
    assert_eq!(a.history(), b.history());
}

// =============================================================================
// Elapsed time
// =============================================================================

#[test]
fn test_elapsed_time_after_wins() {
    let mut store = GameStore::new();
    simulate_wins(&mut store, 120, &mut rng(11));
    assert_eq!(format_elapsed(store.battles_count(), store.settings()), "2.0 h.");

    simulate_wins(&mut store, 1880, &mut rng(12));
    assert_eq!(
        format_elapsed(store.battles_count(), store.settings()),
        "1.4 days"
    );
}

#[test]
fn test_reset_keeps_levels() {
    let mut store = GameStore::new();
    simulate_wins(&mut store, 50, &mut rng(13));
    let before = levels(&store);
    let history_len = store.history().len();

    store.reset();

    assert_eq!(store.battles_count(), 0);
    assert_eq!(levels(&store), before);
    assert_eq!(store.history().len(), history_len);
    assert_eq!(format_elapsed(0, store.settings()), "0.0 h.");
}
