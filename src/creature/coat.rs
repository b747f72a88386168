//! Coat color palette
//!
//! A coat is a display-only attribute; nothing in the simulation rules
//! reads it. Picked once at creation and fixed thereafter.

use rand::Rng;

/// An opaque display attribute: a named hex color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoatColor {
    pub name: &'static str,
    pub hex: &'static str,
}

/// The full coat palette
pub const COAT_COLORS: [CoatColor; 10] = [
    CoatColor { name: "Diamond Dust", hex: "#E0F7FA" },
    CoatColor { name: "Rose Quartz", hex: "#F8BBD0" },
    CoatColor { name: "Nebula Mist", hex: "#E1BEE7" },
    CoatColor { name: "Deep Void", hex: "#B39DDB" },
    CoatColor { name: "Cyan Glitch", hex: "#80DEEA" },
    CoatColor { name: "Sunset Peach", hex: "#FFCCBC" },
    CoatColor { name: "Starlight Gold", hex: "#FFF9C4" },
    CoatColor { name: "Moon Metal", hex: "#CFD8DC" },
    CoatColor { name: "Black Hole", hex: "#1A1A2E" },
    CoatColor { name: "Neon Heart", hex: "#FF80AB" },
];

impl CoatColor {
    /// Pick a coat at random from the palette
    pub fn random(rng: &mut impl Rng) -> Self {
        COAT_COLORS[rng.gen_range(0..COAT_COLORS.len())]
    }
}

impl Default for CoatColor {
    fn default() -> Self {
        COAT_COLORS[0]
    }
}

impl std::fmt::Display for CoatColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.hex)
    }
}
