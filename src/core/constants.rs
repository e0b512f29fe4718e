// Config files
pub const CONFIG_DIR_NAME: &str = ".lurecast";
pub const RARITY_FILE: &str = "rarity.yml";
pub const BAIT_FILE: &str = "bait.yml";
pub const SETTINGS_FILE: &str = "settings.yml";
pub const PROGRESSION_FILE: &str = "progression.json";

// Leaderboard weight defaults to (LEADERBOARD_WEIGHT_BASE - Chance)
pub const LEADERBOARD_WEIGHT_BASE: f64 = 100.0;

// Critical catches
pub const CRITICAL_CHANCE_MIN: f64 = 0.0;
pub const CRITICAL_CHANCE_MAX: f64 = 100.0;
pub const DEFAULT_CRITICAL_VALUE_MULTIPLIER: f64 = 1.0;

// Economy
pub const COST_PLACEHOLDER: &str = "%cost%";
pub const DEFAULT_ECONOMY_FORMAT: &str = "$%cost%";

// Leaderboard
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 10;
