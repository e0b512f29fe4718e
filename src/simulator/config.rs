//! Simulation configuration.

/// Configuration for a catch simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of catch attempts
    pub trials: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Bait used for every attempt
    pub bait: Option<String>,

    /// Lure enchantment level
    pub lure_level: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = every catch)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            trials: 100_000,
            seed: None,
            bait: None,
            lure_level: 0,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for checking one bait
    pub fn bait_check(bait: &str, trials: u32) -> Self {
        Self {
            trials,
            bait: Some(bait.to_string()),
            ..Default::default()
        }
    }

    /// Quick config for checking a lure level
    pub fn lure_check(lure_level: u32, trials: u32) -> Self {
        Self {
            trials,
            lure_level,
            ..Default::default()
        }
    }
}
