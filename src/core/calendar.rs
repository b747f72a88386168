//! Day and time-of-day cycle
//!
//! Time moves one period per completed action cycle, not per wall-clock
//! tick. Wrapping past Night starts the next day.

use serde::{Deserialize, Serialize};

/// Time of day periods, in fixed successor order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// The next period in the cycle. Night wraps to Morning.
    pub fn successor(self) -> Self {
        match self {
            TimeOfDay::Morning => TimeOfDay::Afternoon,
            TimeOfDay::Afternoon => TimeOfDay::Evening,
            TimeOfDay::Evening => TimeOfDay::Night,
            TimeOfDay::Night => TimeOfDay::Morning,
        }
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
            TimeOfDay::Night => "Night",
        };
        write!(f, "{}", s)
    }
}

/// Tracks the in-game day counter and current period
///
/// Invariant: `day` starts at 1 and never decreases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayClock {
    day: u32,
    time_of_day: TimeOfDay,
}

impl DayClock {
    pub fn new() -> Self {
        Self {
            day: 1,
            time_of_day: TimeOfDay::Morning,
        }
    }

    /// Advance to the next period. Wrapping from Night to Morning
    /// increments the day by exactly 1.
    pub fn advance(&mut self) {
        let next = self.time_of_day.successor();
        if next == TimeOfDay::Morning {
            self.day += 1;
        }
        self.time_of_day = next;
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        self.time_of_day
    }
}

impl Default for DayClock {
    fn default() -> Self {
        Self::new()
    }
}
