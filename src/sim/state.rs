//! Aggregate simulation state and its transition functions
//!
//! Each transition consumes the current state and publishes the next as a
//! single indivisible step; the session actor serializes calls so two
//! transitions can never interleave on the same record.

use crate::core::calendar::DayClock;
use crate::core::config::config;
use crate::creature::coat::CoatColor;
use crate::creature::mood::Mood;
use crate::creature::stats::{CreatureStats, STAT_MAX, STAT_MIN};
use crate::sim::action::{ActionKind, ActionOutcome};
use crate::sim::log::{MessageLog, Sender};

/// Everything a running session owns: one creature, one clock, the log,
/// and the advisory reaction flag.
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub stats: CreatureStats,
    pub clock: DayClock,
    pub log: MessageLog,
    /// True while a reaction request is outstanding. Advisory only: the
    /// shell uses it to dim the chat input; nothing in the core blocks on it.
    pub awaiting_reaction: bool,
}

impl SimulationState {
    pub fn new(name: impl Into<String>, coat_color: CoatColor) -> Self {
        let mut log = MessageLog::new();
        log.append(
            Sender::System,
            "Welcome to the starlit stable! Take good care of your new friend.",
        );
        Self {
            stats: CreatureStats::new(name, coat_color),
            clock: DayClock::new(),
            log,
            awaiting_reaction: false,
        }
    }

    /// Apply one player action. Every branch appends exactly one message:
    /// a system line describing the outcome, or the user's own text for chat.
    ///
    /// The Train precondition is a short-circuit: on rejection no stat
    /// changes, not even partially.
    pub fn apply_action(&mut self, action: &ActionKind) -> ActionOutcome {
        let cfg = config();
        let system_msg = match action {
            ActionKind::Feed => {
                self.stats.hunger = (self.stats.hunger + cfg.feed_hunger).clamp(STAT_MIN, STAT_MAX);
                self.stats.energy = (self.stats.energy + cfg.feed_energy).clamp(STAT_MIN, STAT_MAX);
                self.stats.happiness =
                    (self.stats.happiness + cfg.feed_happiness).clamp(STAT_MIN, STAT_MAX);
                format!("You fed {} a shiny apple.", self.stats.name)
            }
            ActionKind::Groom => {
                self.stats.hygiene =
                    (self.stats.hygiene + cfg.groom_hygiene).clamp(STAT_MIN, STAT_MAX);
                self.stats.happiness =
                    (self.stats.happiness + cfg.groom_happiness).clamp(STAT_MIN, STAT_MAX);
                self.stats.bond = (self.stats.bond + cfg.groom_bond).clamp(STAT_MIN, STAT_MAX);
                format!("You brushed {}'s coat until it sparkled.", self.stats.name)
            }
            ActionKind::Train => {
                if self.stats.energy < cfg.train_energy_threshold {
                    let msg = format!("{} is too tired to train!", self.stats.name);
                    self.log.append(Sender::System, msg);
                    return ActionOutcome::Rejected;
                }
                self.stats.energy =
                    (self.stats.energy - cfg.train_energy_cost).clamp(STAT_MIN, STAT_MAX);
                self.stats.hunger =
                    (self.stats.hunger - cfg.train_hunger_cost).clamp(STAT_MIN, STAT_MAX);
                self.stats.xp += cfg.train_xp;
                self.stats.bond = (self.stats.bond + cfg.train_bond).clamp(STAT_MIN, STAT_MAX);
                "Training session complete! XP gained.".to_string()
            }
            ActionKind::Rest => {
                // A nap always restores to full; it is a set, not a delta.
                self.stats.energy = STAT_MAX;
                self.stats.hunger =
                    (self.stats.hunger - cfg.rest_hunger_cost).clamp(STAT_MIN, STAT_MAX);
                format!("{} took a long nap.", self.stats.name)
            }
            ActionKind::Chat(text) => {
                self.log.append(Sender::User, text.clone());
                return ActionOutcome::Applied;
            }
        };
        self.log.append(Sender::System, system_msg);
        ActionOutcome::Applied
    }

    /// Move the day clock one period forward
    pub fn advance_time(&mut self) {
        self.clock.advance();
    }

    /// One passive-decay step: needs erode regardless of player activity
    pub fn apply_decay(&mut self) {
        let cfg = config();
        self.stats.hunger = (self.stats.hunger - cfg.decay_hunger).max(STAT_MIN);
        self.stats.energy = (self.stats.energy - cfg.decay_energy).max(STAT_MIN);
    }

    /// Append one log entry
    pub fn append_message(&mut self, sender: Sender, text: impl Into<String>) {
        self.log.append(sender, text);
    }

    /// Current mood, derived from stats
    pub fn mood(&self) -> Mood {
        Mood::from_stats(&self.stats)
    }
}
