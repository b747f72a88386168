//! Mood derivation
//!
//! A mood is read off the stat record by fixed thresholds, checked from
//! most to least urgent. Display-only; no transition consults it.

use crate::creature::stats::CreatureStats;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
    Tired,
    Excited,
}

impl Mood {
    pub fn from_stats(stats: &CreatureStats) -> Self {
        if stats.energy < 20.0 {
            return Mood::Tired;
        }
        if stats.hunger < 20.0 || stats.happiness < 30.0 {
            return Mood::Sad;
        }
        if stats.happiness > 80.0 && stats.energy > 60.0 {
            return Mood::Excited;
        }
        if stats.happiness > 55.0 {
            return Mood::Happy;
        }
        Mood::Neutral
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Mood::Happy => "happy",
            Mood::Neutral => "neutral",
            Mood::Sad => "sad",
            Mood::Tired => "tired",
            Mood::Excited => "excited",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::coat::CoatColor;

    fn stats_with(hunger: f32, energy: f32, happiness: f32) -> CreatureStats {
        let mut stats = CreatureStats::new("Stardust", CoatColor::default());
        stats.hunger = hunger;
        stats.energy = energy;
        stats.happiness = happiness;
        stats
    }

    #[test]
    fn test_exhaustion_wins_over_everything() {
        let stats = stats_with(10.0, 5.0, 90.0);
        assert_eq!(Mood::from_stats(&stats), Mood::Tired);
    }

    #[test]
    fn test_starving_creature_is_sad() {
        let stats = stats_with(10.0, 50.0, 70.0);
        assert_eq!(Mood::from_stats(&stats), Mood::Sad);
    }

    #[test]
    fn test_thriving_creature_is_excited() {
        let stats = stats_with(80.0, 90.0, 95.0);
        assert_eq!(Mood::from_stats(&stats), Mood::Excited);
    }

    #[test]
    fn test_fresh_creature_is_happy() {
        let stats = CreatureStats::new("Stardust", CoatColor::default());
        assert_eq!(Mood::from_stats(&stats), Mood::Happy);
    }

    #[test]
    fn test_middling_stats_are_neutral() {
        let stats = stats_with(50.0, 50.0, 40.0);
        assert_eq!(Mood::from_stats(&stats), Mood::Neutral);
    }
}
