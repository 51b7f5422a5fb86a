//! Core simulation state and logic.

pub mod auto_battle;
pub mod battle;
pub mod constants;
pub mod error;
pub mod items;
pub mod settings;
pub mod store;
pub mod time_format;

pub use auto_battle::AutoBattle;
pub use battle::{simulate_wins, BattleReport, LevelUp};
pub use error::{CoreError, CoreResult};
pub use items::{Item, ItemStats, ItemType, ModifierStatus, Strategy};
pub use settings::{SettingKey, Settings};
pub use store::GameStore;
