//! Session settings injected by the presentation layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use sismotower_core::constants::DEFAULT_FLOOR_COUNT;

/// Configuration for starting a new session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Floors in the building. Must be at least 1.
    pub floor_count: usize,
    /// Start with audio cues suppressed.
    pub muted: bool,
    /// Whether the first-run tutorial has already been completed.
    /// Persisting this flag is the caller's job.
    pub tutorial_completed: bool,
    /// Refuse to install a second defense system while one is active.
    pub exclusive_defense: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            floor_count: DEFAULT_FLOOR_COUNT,
            muted: false,
            tutorial_completed: false,
            exclusive_defense: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to parse session settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("a building needs at least one floor")]
    NoFloors,
}

impl SessionSettings {
    /// Parse settings from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: SessionSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.floor_count == 0 {
            return Err(SettingsError::NoFloors);
        }
        Ok(())
    }
}
