pub mod coat;
pub mod mood;
pub mod stats;

pub use coat::{CoatColor, COAT_COLORS};
pub use mood::Mood;
pub use stats::{CreatureStats, STAT_MAX, STAT_MIN};
