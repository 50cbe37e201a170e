//! Runner settings
//!
//! Read from an optional JSON file; missing fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::DEFAULT_SEED;

/// Headless runner settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation seed (alien fire decisions)
    pub seed: u32,
    /// Number of clock ticks to run
    pub ticks: u64,

    // === Autopilot ===
    /// Let the autopilot play
    pub autopilot: bool,
    /// Seed for the autopilot's own decisions
    pub autopilot_seed: u64,
    /// Restart automatically after a game over
    pub auto_restart: bool,

    // === Output ===
    /// Ticks between HUD log lines (0 disables)
    pub report_every: u64,
    /// Print a JSON summary on exit
    pub summary_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            ticks: 6_000,

            autopilot: true,
            autopilot_seed: 7,
            auto_restart: true,

            report_every: 500,
            summary_json: true,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Load settings from a file, falling back to defaults on any problem
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {} - using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}
