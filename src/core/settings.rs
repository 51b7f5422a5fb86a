//! Global tunables and the permissive settings-form policy.

use super::constants::{
    DEFAULT_BATTLE_TIME_SECONDS, DEFAULT_EFFECTIVE_MAX_LEVEL, DEFAULT_MIN_CHANCE,
    DEFAULT_MODIFIER_STEP_LEVEL,
};
use super::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Level at which an item's chance floor saturates.
    pub effective_max_level: i64,
    /// Stored and editable. Rolls do not consult it.
    pub min_chance: i64,
    /// Spacing of modifier unlock thresholds.
    pub modifier_step_level: i64,
    /// Seconds attributed to one battle. Only feeds the elapsed-time readout.
    pub time: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            effective_max_level: DEFAULT_EFFECTIVE_MAX_LEVEL,
            min_chance: DEFAULT_MIN_CHANCE,
            modifier_step_level: DEFAULT_MODIFIER_STEP_LEVEL,
            time: DEFAULT_BATTLE_TIME_SECONDS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    EffectiveMaxLevel,
    MinChance,
    ModifierStepLevel,
    Time,
}

impl SettingKey {
    pub fn all() -> [SettingKey; 4] {
        [
            SettingKey::EffectiveMaxLevel,
            SettingKey::MinChance,
            SettingKey::ModifierStepLevel,
            SettingKey::Time,
        ]
    }

    /// Wire name, as used by the settings form.
    pub fn key(&self) -> &'static str {
        match self {
            SettingKey::EffectiveMaxLevel => "effectiveMaxLevel",
            SettingKey::MinChance => "minChance",
            SettingKey::ModifierStepLevel => "modifierStepLevel",
            SettingKey::Time => "time",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingKey::EffectiveMaxLevel => "Level cap",
            SettingKey::MinChance => "Min. chance",
            SettingKey::ModifierStepLevel => "Modifier step",
            SettingKey::Time => "Battle time",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            SettingKey::EffectiveMaxLevel | SettingKey::ModifierStepLevel => "lvl",
            SettingKey::MinChance => "%",
            SettingKey::Time => "sec",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SettingKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingKey::all()
            .into_iter()
            .find(|k| k.key() == s)
            .ok_or_else(|| CoreError::invalid_setting(s, "unknown settings key"))
    }
}

/// Converts a form value into a stored setting.
///
/// Finite values truncate toward zero and saturate at the `i64` range.
/// Missing and non-finite values are rejected.
pub fn normalize_setting_value(key: SettingKey, value: Option<f64>) -> CoreResult<i64> {
    match value {
        None => Err(CoreError::invalid_setting(key.key(), "missing value")),
        Some(v) if !v.is_finite() => Err(CoreError::invalid_setting(
            key.key(),
            format!("non-finite value {}", v),
        )),
        // `as` saturates for out-of-range floats
        Some(v) => Ok(v.trunc() as i64),
    }
}

/// Parses free text from an input field. Blank or non-numeric text is `None`.
pub fn parse_setting_input(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

impl Settings {
    pub fn get(&self, key: SettingKey) -> i64 {
        match key {
            SettingKey::EffectiveMaxLevel => self.effective_max_level,
            SettingKey::MinChance => self.min_chance,
            SettingKey::ModifierStepLevel => self.modifier_step_level,
            SettingKey::Time => self.time,
        }
    }

    fn slot(&mut self, key: SettingKey) -> &mut i64 {
        match key {
            SettingKey::EffectiveMaxLevel => &mut self.effective_max_level,
            SettingKey::MinChance => &mut self.min_chance,
            SettingKey::ModifierStepLevel => &mut self.modifier_step_level,
            SettingKey::Time => &mut self.time,
        }
    }

    /// Strict setter: invalid values leave the settings untouched.
    pub fn try_set(&mut self, key: SettingKey, value: Option<f64>) -> CoreResult<()> {
        let normalized = normalize_setting_value(key, value)?;
        *self.slot(key) = normalized;
        Ok(())
    }

    /// Form setter: invalid values are stored as 0.
    pub fn set(&mut self, key: SettingKey, value: Option<f64>) {
        if let Err(e) = self.try_set(key, value) {
            log::warn!("{}; storing 0", e);
            *self.slot(key) = 0;
        }
    }

    /// Returns a copy with one field changed through the form policy.
    pub fn with(mut self, key: SettingKey, value: Option<f64>) -> Self {
        self.set(key, value);
        self
    }
}
