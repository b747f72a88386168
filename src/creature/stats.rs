//! The creature's stat record
//!
//! Five care stats held in [0, 100] plus unbounded experience. Every
//! transition that writes a care stat must clamp before publishing; the
//! transition functions live in `sim::state`.

use crate::creature::coat::CoatColor;

/// Lower bound for every care stat
pub const STAT_MIN: f32 = 0.0;
/// Upper bound for every care stat
pub const STAT_MAX: f32 = 100.0;

/// The single creature record owned by the simulation core
///
/// `name` and `coat_color` are fixed at creation. `xp` only ever grows.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatureStats {
    pub name: String,
    pub coat_color: CoatColor,
    pub hunger: f32,
    pub hygiene: f32,
    pub energy: f32,
    pub happiness: f32,
    pub bond: f32,
    pub xp: u32,
}

impl CreatureStats {
    /// A newly adopted creature: moderately fed and rested, barely bonded.
    pub fn new(name: impl Into<String>, coat_color: CoatColor) -> Self {
        Self {
            name: name.into(),
            coat_color,
            hunger: 50.0,
            hygiene: 60.0,
            energy: 80.0,
            happiness: 60.0,
            bond: 10.0,
            xp: 0,
        }
    }

    /// Display level derived from experience (100 xp per level, floor 1)
    pub fn level(&self) -> u32 {
        self.xp / 100 + 1
    }

    /// True when every care stat lies within [STAT_MIN, STAT_MAX]
    pub fn in_range(&self) -> bool {
        [self.hunger, self.hygiene, self.energy, self.happiness, self.bond]
            .iter()
            .all(|v| (STAT_MIN..=STAT_MAX).contains(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creature_in_range() {
        let stats = CreatureStats::new("Stardust", CoatColor::default());
        assert!(stats.in_range());
        assert_eq!(stats.xp, 0);
        assert_eq!(stats.name, "Stardust");
    }

    #[test]
    fn test_level_from_xp() {
        let mut stats = CreatureStats::new("Stardust", CoatColor::default());
        assert_eq!(stats.level(), 1);
        stats.xp = 99;
        assert_eq!(stats.level(), 1);
        stats.xp = 100;
        assert_eq!(stats.level(), 2);
        stats.xp = 450;
        assert_eq!(stats.level(), 5);
    }

    #[test]
    fn test_in_range_detects_violation() {
        let mut stats = CreatureStats::new("Stardust", CoatColor::default());
        stats.energy = 120.0;
        assert!(!stats.in_range());
    }
}
