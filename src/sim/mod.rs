pub mod action;
pub mod log;
pub mod state;

pub use action::{ActionKind, ActionOutcome};
pub use log::{Message, MessageLog, Sender};
pub use state::SimulationState;
