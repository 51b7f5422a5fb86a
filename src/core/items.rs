//! Progressable items: skills, weapons and modifiers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Skill,
    Weapon,
    Modifier,
}

impl ItemType {
    pub fn name(&self) -> &'static str {
        match self {
            ItemType::Skill => "Skill",
            ItemType::Weapon => "Weapon",
            ItemType::Modifier => "Modifier",
        }
    }

    /// Whether battles roll level-ups for this item type.
    pub fn is_leveled(&self) -> bool {
        !matches!(self, ItemType::Modifier)
    }
}

/// What improves an item. Display only; the battle loop ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Strategy {
    Use,
    Win,
    UseAny,
}

impl Strategy {
    pub fn describe(&self) -> &'static str {
        match self {
            Strategy::Use => "on use",
            Strategy::UseAny => "on use and attack",
            Strategy::Win => "on win",
        }
    }
}

/// Named base values. Missing fields deserialize as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemStats {
    pub heal: f64,
    pub attack: f64,
    pub target_count: f64,
    pub power: f64,
    pub repeat_chance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub name: String,
    /// Template rendered by [`Item::description`].
    pub description: String,
    #[serde(default)]
    pub stats: ItemStats,
    pub level: u32,
    /// Roll behind the last level change, or the manual sentinel.
    pub last_chance: i32,
    pub strategy: Strategy,
    /// Not advanced by any battle logic yet.
    pub uses: u32,
}

impl Item {
    pub fn new(
        item_type: ItemType,
        name: &str,
        description: &str,
        stats: ItemStats,
        strategy: Strategy,
    ) -> Self {
        Self {
            item_type,
            name: name.to_string(),
            description: description.to_string(),
            stats,
            level: 0,
            last_chance: 0,
            strategy,
            uses: 0,
        }
    }

    /// Renders the description template against the current level and stats.
    ///
    /// Recognised placeholders: `{level}`, `{heal}`, `{attack}`,
    /// `{target_count}`, `{power}`, `{repeat_chance}`. Anything else is left
    /// as written.
    pub fn description(&self) -> String {
        let s = &self.stats;
        self.description
            .replace("{level}", &self.level.to_string())
            .replace("{heal}", &s.heal.to_string())
            .replace("{attack}", &s.attack.to_string())
            .replace("{target_count}", &s.target_count.to_string())
            .replace("{power}", &s.power.to_string())
            .replace("{repeat_chance}", &s.repeat_chance.to_string())
    }
}

/// Activation state of a modifier under a given item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierStatus {
    Active,
    RequiresLevel(u64),
}

/// The k-th modifier (0-based) unlocks once the item reaches `(k + 1) * step`.
///
/// A non-positive step unlocks every modifier immediately.
pub fn modifier_status(item_level: u32, modifier_index: usize, step_level: i64) -> ModifierStatus {
    if step_level <= 0 {
        return ModifierStatus::Active;
    }
    let required = (modifier_index as u64 + 1).saturating_mul(step_level as u64);
    if u64::from(item_level) >= required {
        ModifierStatus::Active
    } else {
        ModifierStatus::RequiresLevel(required)
    }
}

/// Leveled items a fresh session starts with, skills before weapons.
pub fn default_items() -> Vec<Item> {
    vec![
        Item::new(
            ItemType::Skill,
            "Heal",
            "Heals for {heal} (+1% per level, now +{level}%) plus Heal",
            ItemStats {
                heal: 10.0,
                ..Default::default()
            },
            Strategy::Use,
        ),
        Item::new(
            ItemType::Skill,
            "Power Strike",
            "Hits for {attack} (+1% per level, now +{level}%) plus Attack",
            ItemStats {
                attack: 10.0,
                ..Default::default()
            },
            Strategy::Use,
        ),
        Item::new(
            ItemType::Weapon,
            "Staff",
            "Attack +{attack} (+1% per 100 levels), Heal +{heal} (+1% per 100 levels)",
            ItemStats {
                attack: 10.0,
                heal: 5.0,
                ..Default::default()
            },
            Strategy::UseAny,
        ),
    ]
}

/// Modifier catalog shown under every leveled item.
pub fn default_modifiers() -> Vec<Item> {
    vec![
        Item::new(
            ItemType::Modifier,
            "Targets",
            "Extra targets +{target_count} (+1 per 100 levels)",
            ItemStats {
                target_count: 1.0,
                ..Default::default()
            },
            Strategy::Win,
        ),
        Item::new(
            ItemType::Modifier,
            "Power",
            "Raises skill power by {power}% (+1 per level)",
            ItemStats {
                power: 10.0,
                ..Default::default()
            },
            Strategy::Win,
        ),
        Item::new(
            ItemType::Modifier,
            "Repeat",
            "{repeat_chance}% chance (+1 per level) to fire again",
            ItemStats {
                repeat_chance: 10.0,
                ..Default::default()
            },
            Strategy::Win,
        ),
    ]
}
