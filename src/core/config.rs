//! Simulation configuration with documented constants
//!
//! All tunable values are collected here with explanations of their purpose.
//! Defaults reproduce the reference pacing: a care action locks the controls
//! for two seconds and then moves the day-cycle forward one period, while
//! needs erode a little every ten seconds whether or not the player acts.

use crate::core::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the simulation core and its host timers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    // === TIMERS ===
    /// Milliseconds between passive-decay ticks
    ///
    /// At the default (10_000), an unattended creature loses 6 hunger and
    /// 3 energy per real-world minute.
    pub decay_interval_ms: u64,

    /// Milliseconds an action keeps the session busy
    ///
    /// While the window is open, further care actions are dropped. When it
    /// closes, the day clock advances exactly one period.
    pub action_cooldown_ms: u64,

    // === PASSIVE DECAY ===
    /// Hunger lost per decay tick (floored at 0)
    pub decay_hunger: f32,

    /// Energy lost per decay tick (floored at 0)
    ///
    /// Half the hunger rate: appetite is meant to be the first thing the
    /// player has to manage.
    pub decay_energy: f32,

    // === ACTION EFFECTS ===
    /// Feed: hunger restored
    pub feed_hunger: f32,
    /// Feed: energy restored
    pub feed_energy: f32,
    /// Feed: happiness gained
    pub feed_happiness: f32,

    /// Groom: hygiene restored
    pub groom_hygiene: f32,
    /// Groom: happiness gained
    pub groom_happiness: f32,
    /// Groom: bond gained
    pub groom_bond: f32,

    /// Train: minimum energy required to start a session
    ///
    /// Below this the action is rejected outright with no stat change.
    pub train_energy_threshold: f32,
    /// Train: energy spent
    pub train_energy_cost: f32,
    /// Train: hunger worked up
    pub train_hunger_cost: f32,
    /// Train: experience gained (never clamped)
    pub train_xp: u32,
    /// Train: bond gained
    pub train_bond: f32,

    /// Rest: hunger lost while napping. Energy is set to full, not added.
    pub rest_hunger_cost: f32,

    // === TEXT GENERATION ===
    /// Token budget for one reply; replies are capped at ~15 words
    pub llm_max_tokens: u32,

    /// Seconds before an outstanding reply request is abandoned
    ///
    /// On expiry the creature falls back to its fixed glitch line.
    pub llm_request_timeout_secs: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            decay_interval_ms: 10_000,
            action_cooldown_ms: 2_000,

            decay_hunger: 1.0,
            decay_energy: 0.5,

            feed_hunger: 30.0,
            feed_energy: 10.0,
            feed_happiness: 5.0,

            groom_hygiene: 40.0,
            groom_happiness: 10.0,
            groom_bond: 5.0,

            train_energy_threshold: 20.0,
            train_energy_cost: 30.0,
            train_hunger_cost: 20.0,
            train_xp: 15,
            train_bond: 2.0,

            rest_hunger_cost: 10.0,

            llm_max_tokens: 128,
            llm_request_timeout_secs: 20,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: SimulationConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.decay_interval_ms == 0 || self.action_cooldown_ms == 0 {
            return Err("Timer intervals must be positive".into());
        }

        if self.decay_hunger < 0.0 || self.decay_energy < 0.0 {
            return Err("Decay deltas must be non-negative".into());
        }

        if !(0.0..=100.0).contains(&self.train_energy_threshold) {
            return Err(format!(
                "train_energy_threshold ({}) must lie in [0, 100]",
                self.train_energy_threshold
            ));
        }

        if self.llm_request_timeout_secs == 0 {
            return Err("llm_request_timeout_secs must be positive".into());
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<SimulationConfig> = OnceLock::new();

/// Get the global simulation config (initializes with defaults if not set)
pub fn config() -> &'static SimulationConfig {
    CONFIG.get_or_init(SimulationConfig::default)
}

/// Set the global simulation config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: SimulationConfig) -> std::result::Result<(), SimulationConfig> {
    CONFIG.set(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut cfg = SimulationConfig::default();
        cfg.decay_interval_ms = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let mut cfg = SimulationConfig::default();
        cfg.train_energy_threshold = 120.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let cfg: SimulationConfig = toml::from_str("decay_interval_ms = 5000").unwrap();
        assert_eq!(cfg.decay_interval_ms, 5_000);
        assert_eq!(cfg.action_cooldown_ms, 2_000);
        assert_eq!(cfg.train_xp, 15);
    }

    #[test]
    fn test_negative_decay_rejected() {
        let mut cfg = SimulationConfig::default();
        cfg.decay_energy = -0.5;
        assert!(cfg.validate().is_err());
    }
}
