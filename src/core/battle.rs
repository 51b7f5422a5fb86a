//! Battle simulation: win batches and chance-based level-ups.

use super::constants::{DISPLAY_CHANCE_LEVEL_CAP, MANUAL_ROLL_SENTINEL, ROLL_MAX, SATURATION_ROLL};
use super::store::GameStore;
use rand::Rng;

/// One level change written to the store and the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUp {
    pub index: usize,
    pub name: String,
    pub previous_level: u32,
    pub levels: u32,
    /// Roll that produced it, or the manual sentinel.
    pub roll: i32,
    pub battle: u64,
}

/// What a call to [`simulate_wins`] did, for drivers that want events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BattleReport {
    pub wins: u32,
    pub level_ups: Vec<LevelUp>,
}

/// Draws a roll uniformly from `0..=100`.
pub fn roll_chance<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.gen_range(0..=ROLL_MAX)
}

/// 99 and 100 always succeed; below that the roll must reach the level.
pub fn is_level_up(roll: i32, level: u32) -> bool {
    roll >= SATURATION_ROLL || i64::from(roll) >= i64::from(level)
}

/// Exact success probability at `level`: `(101 - L) / 101`, floored at `2 / 101`.
pub fn success_probability(level: u32) -> f64 {
    let outcomes = f64::from(ROLL_MAX + 1);
    let winning = outcomes - f64::from(level.min(SATURATION_ROLL as u32));
    winning / outcomes
}

/// Percent shown on an item card.
pub fn display_chance(level: u32) -> u32 {
    100 - level.min(DISPLAY_CHANCE_LEVEL_CAP)
}

pub fn format_history_line(
    item_name: &str,
    previous_level: u32,
    delta: u32,
    roll: i32,
    battle_count: u64,
) -> String {
    format!(
        "Level {} {} increased by {} with chance ({}) in battle {}",
        item_name, previous_level, delta, roll, battle_count
    )
}

fn apply_level_change(store: &mut GameStore, index: usize, levels: u32, roll: i32) -> Option<LevelUp> {
    let item = store.item(index)?;
    let level_up = LevelUp {
        index,
        name: item.name.clone(),
        previous_level: item.level,
        levels,
        roll,
        battle: store.battles_count(),
    };

    store.append_history(format_history_line(
        &level_up.name,
        level_up.previous_level,
        levels,
        roll,
        level_up.battle,
    ));
    store.update_item_level(index, levels, roll);
    Some(level_up)
}

/// Rolls once for the item at `index` and applies `levels` on success.
///
/// Returns the level-up, or `None` on a failed roll or a bad index.
pub fn roll_level_up<R: Rng + ?Sized>(
    store: &mut GameStore,
    index: usize,
    levels: u32,
    rng: &mut R,
) -> Option<LevelUp> {
    let Some(level) = store.item(index).map(|item| item.level) else {
        log::warn!("Level-up roll for missing item {}", index);
        return None;
    };

    let roll = roll_chance(rng);
    log::debug!("Level-up roll: item {} rolled {} at level {}", index, roll, level);

    if !is_level_up(roll, level) {
        return None;
    }

    let level_up = apply_level_change(store, index, levels, roll)?;
    log::info!(
        "{} reached level {} (roll {}, battle {})",
        level_up.name,
        level_up.previous_level.saturating_add(levels),
        roll,
        level_up.battle
    );
    Some(level_up)
}

/// Runs `count` wins: each bumps the battle counter once, then rolls every
/// leveled item in list order.
pub fn simulate_wins<R: Rng + ?Sized>(store: &mut GameStore, count: u32, rng: &mut R) -> BattleReport {
    let mut report = BattleReport::default();

    for _ in 0..count {
        store.increase_battles_count(1);
        report.wins += 1;

        for index in 0..store.items().len() {
            if !store.items()[index].item_type.is_leveled() {
                continue;
            }
            if let Some(level_up) = roll_level_up(store, index, 1, rng) {
                report.level_ups.push(level_up);
            }
        }
    }

    report
}

/// Manual override: adds `levels` without rolling.
pub fn bump_item_level(store: &mut GameStore, index: usize, levels: u32) -> Option<LevelUp> {
    let Some(level_up) = apply_level_change(store, index, levels, MANUAL_ROLL_SENTINEL) else {
        log::warn!("Ignoring manual bump for missing item {}", index);
        return None;
    };
    log::info!("{} manually raised by {}", level_up.name, levels);
    Some(level_up)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::items::{Item, ItemStats, ItemType, Strategy};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_is_level_up_boundaries() {
        assert!(is_level_up(0, 0));
        assert!(is_level_up(50, 50));
        assert!(!is_level_up(49, 50));
        assert!(!is_level_up(98, 99));
        assert!(is_level_up(99, 99));
        assert!(is_level_up(99, 5000));
        assert!(is_level_up(100, 5000));
        assert!(!is_level_up(98, 5000));
    }

    #[test]
    fn test_success_probability_matches_outcome_count() {
        for level in [0u32, 1, 50, 98, 99, 100, 250] {
            let winning = (0..=100).filter(|&r| is_level_up(r, level)).count();
            let expected = winning as f64 / 101.0;
            assert!((success_probability(level) - expected).abs() < 1e-12);
        }
        assert!((success_probability(99) - 2.0 / 101.0).abs() < 1e-12);
    }

    #[test]
    fn test_display_chance() {
        assert_eq!(display_chance(0), 100);
        assert_eq!(display_chance(40), 60);
        assert_eq!(display_chance(99), 1);
        assert_eq!(display_chance(1000), 1);
    }

    #[test]
    fn test_roll_chance_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..20_000 {
            let r = roll_chance(&mut rng);
            assert!((0..=100).contains(&r));
            seen_min |= r == 0;
            seen_max |= r == 100;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn test_format_history_line() {
        assert_eq!(
            format_history_line("Heal", 4, 1, 73, 12),
            "Level Heal 4 increased by 1 with chance (73) in battle 12"
        );
    }

    #[test]
    fn test_level_zero_always_levels() {
        let mut store = GameStore::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        store.increase_battles_count(1);

        let level_up = roll_level_up(&mut store, 0, 1, &mut rng).unwrap();

        assert_eq!(level_up.previous_level, 0);
        assert_eq!(level_up.battle, 1);
        assert_eq!(store.items()[0].level, 1);
        assert_eq!(store.items()[0].last_chance, level_up.roll);
        assert_eq!(store.history().len(), 1);
    }

    #[test]
    fn test_roll_level_up_missing_item() {
        let mut store = GameStore::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(roll_level_up(&mut store, 42, 1, &mut rng).is_none());
        assert!(store.history().is_empty());
    }

    #[test]
    fn test_simulate_wins_skips_modifiers_in_list() {
        let mut store = GameStore::new();
        let mut items = store.items().to_vec();
        items.push(Item::new(
            ItemType::Modifier,
            "Stray",
            "",
            ItemStats::default(),
            Strategy::Win,
        ));
        store.replace_items(items);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        simulate_wins(&mut store, 50, &mut rng);

        assert_eq!(store.items()[3].level, 0);
        assert!(store.items()[..3].iter().all(|i| i.level > 0));
    }

    #[test]
    fn test_bump_item_level() {
        let mut store = GameStore::new();
        let level_up = bump_item_level(&mut store, 2, 25).unwrap();
        assert_eq!(level_up.roll, -1);
        assert_eq!(store.items()[2].level, 25);
        assert_eq!(store.items()[2].last_chance, -1);
        assert_eq!(
            store.history()[0],
            "Level Staff 0 increased by 25 with chance (-1) in battle 0"
        );
    }

    #[test]
    fn test_bump_missing_item_is_ignored() {
        let mut store = GameStore::new();
        assert!(bump_item_level(&mut store, 3, 25).is_none());
        assert!(store.history().is_empty());
    }
}
