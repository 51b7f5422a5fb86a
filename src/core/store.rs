//! The single owner of simulation state.
//!
//! Every mutation goes through one of the methods below. Items are addressed
//! by position, so the list order never changes except through
//! [`GameStore::replace_items`].

use super::error::{CoreError, CoreResult};
use super::items::{default_items, default_modifiers, Item};
use super::settings::{SettingKey, Settings};
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct GameStore {
    battles_count: u64,
    items: Vec<Item>,
    /// Static catalog, never rolled.
    modifiers: Vec<Item>,
    settings: Settings,
    /// Newest first, unbounded.
    history: VecDeque<String>,
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStore {
    /// A fresh session with the default catalog and settings.
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            battles_count: 0,
            items: default_items(),
            modifiers: default_modifiers(),
            settings,
            history: VecDeque::new(),
        }
    }

    pub fn battles_count(&self) -> u64 {
        self.battles_count
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn modifiers(&self) -> &[Item] {
        &self.modifiers
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn history(&self) -> &VecDeque<String> {
        &self.history
    }

    pub fn increase_battles_count(&mut self, by: u64) {
        self.battles_count = self.battles_count.saturating_add(by);
    }

    /// Zeroes the battle counter. Items, settings and history are kept.
    pub fn reset(&mut self) {
        log::info!("Battle counter reset (was {})", self.battles_count);
        self.battles_count = 0;
    }

    pub fn replace_items(&mut self, new_items: Vec<Item>) {
        self.items = new_items;
    }

    /// Adds `level_delta` to one item and records the roll behind it.
    pub fn try_update_item_level(
        &mut self,
        index: usize,
        level_delta: u32,
        last_chance: i32,
    ) -> CoreResult<()> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(CoreError::InvalidIndex { index, len })?;
        item.level = item.level.saturating_add(level_delta);
        item.last_chance = last_chance;
        Ok(())
    }

    /// Like [`try_update_item_level`](Self::try_update_item_level), but an
    /// out-of-range index is logged and ignored.
    pub fn update_item_level(&mut self, index: usize, level_delta: u32, last_chance: i32) {
        if let Err(e) = self.try_update_item_level(index, level_delta, last_chance) {
            log::warn!("Ignoring level update: {}", e);
        }
    }

    pub fn replace_settings(&mut self, new_settings: Settings) {
        self.settings = new_settings;
    }

    /// Changes one setting with the form policy (invalid input stores 0).
    pub fn set_setting(&mut self, key: SettingKey, value: Option<f64>) {
        let updated = self.settings.with(key, value);
        log::info!("Setting {} = {}", key, updated.get(key));
        self.replace_settings(updated);
    }

    pub fn append_history(&mut self, text: String) {
        self.history.push_front(text);
    }
}
