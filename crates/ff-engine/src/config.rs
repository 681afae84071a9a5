//! Game settings
//!
//! The table stakes a machine opens with. Loadable from a JSON file so a
//! front-end can ship presets; both values must be positive.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Table stakes for one machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Credits on the table when a game opens (and after every reset)
    pub starting_credits: i64,
    /// Credits one spin consumes
    pub spin_cost: i64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            starting_credits: 100,
            spin_cost: 10,
        }
    }
}

impl GameSettings {
    /// Create settings, rejecting non-positive values
    pub fn new(starting_credits: i64, spin_cost: i64) -> Result<Self, SettingsError> {
        let settings = Self {
            starting_credits,
            spin_cost,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Check the positivity rules
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.starting_credits <= 0 {
            return Err(SettingsError::NonPositiveCredits(self.starting_credits));
        }
        if self.spin_cost <= 0 {
            return Err(SettingsError::NonPositiveCost(self.spin_cost));
        }
        Ok(())
    }

    /// Load settings from a JSON file and validate them
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a JSON file
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Settings layer failures
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("starting credits must be positive, got {0}")]
    NonPositiveCredits(i64),
    #[error("spin cost must be positive, got {0}")]
    NonPositiveCost(i64),
}
