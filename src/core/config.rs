//! Engine configuration with documented constants
//!
//! All tunable numbers for round resolution are collected here. The config
//! is passed explicitly to the scheduler; nothing reads it from a global.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{EngineError, Result};

/// Configuration for round resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for the world's dice
    ///
    /// `None` picks a random seed at startup; the chosen seed is logged so a
    /// session can be replayed.
    pub seed: Option<u64>,

    // === ROLLS ===
    /// Faces on the initiative die (initiative = roll + awareness)
    pub initiative_die: u32,

    /// Faces on the AI behavior-table die
    ///
    /// The behavior tables are written against a d20; changing this shifts
    /// every AI archetype's odds.
    pub behavior_die: u32,

    /// Faces on the attack die (attack = roll + base attack for the kind)
    pub attack_die: u32,

    /// Declared range of thrown attacks, in in-room tiles
    pub throw_range: u32,

    // === MESSAGING ===
    /// Tell each actor which action it committed at the end of its turn
    pub announce_pending: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            initiative_die: 20,
            behavior_die: 20,
            attack_die: 6,
            throw_range: 2,
            announce_pending: true,
        }
    }
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load and validate a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(contents)?;
        config.validate().map_err(EngineError::InvalidConfig)?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.initiative_die == 0 || self.behavior_die == 0 || self.attack_die == 0 {
            return Err(format!(
                "die sizes must be at least 1 (initiative {}, behavior {}, attack {})",
                self.initiative_die, self.behavior_die, self.attack_die
            ));
        }

        if self.throw_range == 0 {
            return Err("throw_range must be at least 1".into());
        }

        Ok(())
    }
}
