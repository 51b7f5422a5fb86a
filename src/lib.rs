//! Levelcalc - idle game leveling calculator.
//!
//! Battles roll chance-based level-ups for a small set of skills and weapons.
//! This crate exposes the simulation core, the balance simulator and the
//! terminal screen so the binaries and tests share one implementation.

pub mod app;
pub mod build_info;
pub mod core;
pub mod input;
pub mod simulator;
pub mod ui;

pub use crate::core::{GameStore, Item, ItemType, SettingKey, Settings};
