// Rolls
/// Highest value a level-up roll can produce. Rolls are drawn from `0..=ROLL_MAX`.
pub const ROLL_MAX: i32 = 100;
/// Any roll at or above this value succeeds regardless of level.
pub const SATURATION_ROLL: i32 = 99;
/// `last_chance` value recorded for manual level changes (no roll happened).
pub const MANUAL_ROLL_SENTINEL: i32 = -1;
/// Card readout floors at `100 - DISPLAY_CHANCE_LEVEL_CAP` percent.
pub const DISPLAY_CHANCE_LEVEL_CAP: u32 = 99;

// Manual override
pub const MANUAL_BUMP_LEVELS: u32 = 25;

// Settings defaults
pub const DEFAULT_EFFECTIVE_MAX_LEVEL: i64 = 100;
pub const DEFAULT_MIN_CHANCE: i64 = 1;
pub const DEFAULT_MODIFIER_STEP_LEVEL: i64 = 100;
pub const DEFAULT_BATTLE_TIME_SECONDS: i64 = 60;

// Driver timing
pub const AUTO_BATTLE_INTERVAL_MS: u64 = 50;
pub const INPUT_POLL_MS: u64 = 50;
/// Win batches offered by the control panel.
pub const WIN_BATCHES: [u32; 5] = [1, 10, 100, 1000, 5000];

// Elapsed time display
pub const SECONDS_PER_HOUR: f64 = 3600.0;
pub const HOURS_PER_DAY: f64 = 24.0;
