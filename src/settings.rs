//! Presentation preferences
//!
//! Persisted as JSON next to the game; nothing here affects the simulation.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Draw sprites when the assets are present (primitive shapes otherwise)
    pub sprites: bool,
    /// Outline player and obstacle hitboxes
    pub show_hitboxes: bool,
    /// Freeze the road scroll regardless of the level's scroll speed
    pub reduced_motion: bool,
    /// Seed for lane traffic; `None` derives one from the level number
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sprites: true,
            show_hitboxes: false,
            reduced_motion: false,
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a file, falling back to defaults if it is missing
    /// or unreadable
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Traffic seed for a level
    pub fn seed_for(&self, level_num: u32) -> u64 {
        self.seed
            .unwrap_or_else(|| (level_num as u64).wrapping_mul(2654435761))
    }

    /// Traffic seed for a custom level file, derived from its name (FNV-1a)
    pub fn seed_for_name(&self, name: &str) -> u64 {
        self.seed.unwrap_or_else(|| {
            name.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
                (hash ^ byte as u64).wrapping_mul(0x0100_0000_01b3)
            })
        })
    }
}
