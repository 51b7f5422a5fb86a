//! Interactive session: the store plus the driver state around it.
//!
//! Every trigger the screen offers lands on one method here, so the
//! terminal loop and the tests drive the same code.

use crate::core::auto_battle::AutoBattle;
use crate::core::battle::{bump_item_level, simulate_wins, BattleReport};
use crate::core::constants::MANUAL_BUMP_LEVELS;
use crate::core::settings::{parse_setting_input, SettingKey, Settings};
use crate::core::store::GameStore;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

pub struct App {
    pub store: GameStore,
    pub auto: AutoBattle,
    /// Card the `+` key bumps.
    pub selected_item: usize,
    pub selected_setting: usize,
    /// Text being typed into the selected setting, if editing.
    pub setting_edit: Option<String>,
    pub should_quit: bool,
    rng: ChaCha8Rng,
}

impl App {
    pub fn new(settings: Settings, interval: Duration, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            store: GameStore::with_settings(settings),
            auto: AutoBattle::new(interval),
            selected_item: 0,
            selected_setting: 0,
            setting_edit: None,
            should_quit: false,
            rng,
        }
    }

    pub fn win(&mut self, count: u32) -> BattleReport {
        simulate_wins(&mut self.store, count, &mut self.rng)
    }

    pub fn set_auto(&mut self, on: bool, now: Instant) {
        self.auto.set(on, now);
    }

    pub fn toggle_auto(&mut self, now: Instant) {
        self.auto.toggle(now);
    }

    /// Called every pass of the driver loop. Plays one win per due tick.
    pub fn tick(&mut self, now: Instant) -> Option<BattleReport> {
        if self.auto.poll_tick(now) {
            Some(self.win(1))
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.store.reset();
    }

    pub fn bump_selected(&mut self) {
        bump_item_level(&mut self.store, self.selected_item, MANUAL_BUMP_LEVELS);
    }

    pub fn select_next_item(&mut self) {
        let len = self.store.items().len();
        if len > 0 {
            self.selected_item = (self.selected_item + 1) % len;
        }
    }

    pub fn select_prev_item(&mut self) {
        let len = self.store.items().len();
        if len > 0 {
            self.selected_item = (self.selected_item + len - 1) % len;
        }
    }

    pub fn selected_setting_key(&self) -> SettingKey {
        let keys = SettingKey::all();
        keys[self.selected_setting % keys.len()]
    }

    pub fn select_setting(&mut self, delta: isize) {
        let len = SettingKey::all().len() as isize;
        self.selected_setting = (self.selected_setting as isize + delta).rem_euclid(len) as usize;
    }

    pub fn begin_setting_edit(&mut self) {
        let current = self.store.settings().get(self.selected_setting_key());
        self.setting_edit = Some(current.to_string());
    }

    pub fn cancel_setting_edit(&mut self) {
        self.setting_edit = None;
    }

    /// Stores the typed text. Blank or non-numeric text stores 0.
    pub fn commit_setting_edit(&mut self) {
        if let Some(text) = self.setting_edit.take() {
            let key = self.selected_setting_key();
            self.store.set_setting(key, parse_setting_input(&text));
        }
    }

    pub fn is_editing(&self) -> bool {
        self.setting_edit.is_some()
    }
}
