//! Elapsed in-game time readout.

use super::constants::{HOURS_PER_DAY, SECONDS_PER_HOUR};
use super::settings::Settings;

/// Seconds attributed to `battles` battles of `seconds_per_battle` each.
pub fn elapsed_seconds(battles: u64, seconds_per_battle: i64) -> f64 {
    battles as f64 * seconds_per_battle as f64
}

/// Hours with one decimal ("2.0 h."), switching to days above 24 hours.
pub fn format_elapsed(battles: u64, settings: &Settings) -> String {
    let hours = elapsed_seconds(battles, settings.time) / SECONDS_PER_HOUR;
    if hours > HOURS_PER_DAY {
        format!("{:.1} days", hours / HOURS_PER_DAY)
    } else {
        format!("{:.1} h.", hours)
    }
}
