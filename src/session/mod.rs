//! Session actor: single-writer ownership of the simulation state
//!
//! Every mutation flows through one command queue: player intents from the
//! shell, cooldown expiry, decay ticks, and reaction arrivals. The actor task
//! owns the `SimulationState` outright and applies each command as a whole,
//! indivisible transition, so the clamp invariants cannot be torn by
//! interleaving timers.
//!
//! Two scheduled tasks feed the queue for the life of the session:
//! - the cooldown task, spawned per accepted care action, submits exactly
//!   one `AdvanceTime` when the busy window closes;
//! - the decay task submits `Decay` on a fixed period until teardown.
//!
//! Reaction requests are fire-and-forget: the actor snapshots the stats,
//! hands them to a spawned task, and the task re-enters through the queue
//! with `ReactionArrived` whenever the client resolves. No ordering exists
//! between a reaction landing and the next action being accepted.

use crate::core::calendar::TimeOfDay;
use crate::core::config::config;
use crate::core::error::{Result, StableError};
use crate::core::types::SessionId;
use crate::creature::mood::Mood;
use crate::creature::stats::CreatureStats;
use crate::llm::client::LlmClient;
use crate::llm::reaction::generate_reaction;
use crate::sim::action::ActionKind;
use crate::sim::log::{Message, Sender};
use crate::sim::state::SimulationState;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

/// Commands accepted by the session actor
#[derive(Debug)]
pub enum SessionCommand {
    /// A player intent from the shell
    Perform(ActionKind),
    /// Busy window closed; move the day clock forward once
    AdvanceTime,
    /// Periodic passive decay
    Decay,
    /// A reaction request resolved (possibly with a fallback string)
    ReactionArrived(String),
    /// Read-only state snapshot for rendering
    Inspect(oneshot::Sender<SessionSnapshot>),
    /// End the session
    Shutdown,
}

/// Read-only view of the session handed to the presentation shell
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub stats: CreatureStats,
    pub mood: Mood,
    pub day: u32,
    pub time_of_day: TimeOfDay,
    pub messages: Vec<Message>,
    pub awaiting_reaction: bool,
    /// True while an action cooldown is open; the shell disables the
    /// care buttons when set
    pub busy: bool,
}

/// Handle for submitting intents into a running session
pub struct SessionHandle {
    id: SessionId,
    tx: mpsc::UnboundedSender<SessionCommand>,
    decay_task: JoinHandle<()>,
}

impl SessionHandle {
    /// Spawn the actor and its decay timer. Must be called inside a tokio
    /// runtime. Without a client the creature simply never replies.
    pub fn spawn(state: SimulationState, client: Option<Arc<LlmClient>>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let decay_tx = tx.clone();
        let decay_task = tokio::spawn(async move {
            let period = Duration::from_millis(config().decay_interval_ms);
            let mut interval = tokio::time::interval(period);
            // The first tick fires immediately; the creature should not
            // lose anything at t=0.
            interval.tick().await;
            loop {
                interval.tick().await;
                if decay_tx.send(SessionCommand::Decay).is_err() {
                    break;
                }
            }
        });

        let actor_tx = tx.clone();
        tokio::spawn(run_session(state, rx, actor_tx, client));

        Self {
            id: SessionId::new(),
            tx,
            decay_task,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Submit a player intent
    pub fn perform(&self, action: ActionKind) -> Result<()> {
        self.tx
            .send(SessionCommand::Perform(action))
            .map_err(|_| StableError::SessionClosed)
    }

    /// Fetch a state snapshot, serialized behind every earlier command
    pub async fn snapshot(&self) -> Result<SessionSnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(SessionCommand::Inspect(reply_tx))
            .map_err(|_| StableError::SessionClosed)?;
        reply_rx.await.map_err(|_| StableError::SessionClosed)
    }

    /// Tear the session down: stops the decay timer and ends the actor.
    /// State is discarded; nothing is persisted.
    pub fn shutdown(&self) {
        let _ = self.tx.send(SessionCommand::Shutdown);
        self.decay_task.abort();
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn run_session(
    mut state: SimulationState,
    mut rx: mpsc::UnboundedReceiver<SessionCommand>,
    tx: mpsc::UnboundedSender<SessionCommand>,
    client: Option<Arc<LlmClient>>,
) {
    let mut busy = false;

    while let Some(cmd) = rx.recv().await {
        match cmd {
            SessionCommand::Perform(action) => {
                if busy && action.has_cooldown() {
                    tracing::debug!(action = action.label(), "action dropped: cooldown active");
                    continue;
                }

                let user_text = action.user_text().map(str::to_owned);
                state.apply_action(&action);

                if action.has_cooldown() {
                    busy = true;
                    let cooldown = Duration::from_millis(config().action_cooldown_ms);
                    let timer_tx = tx.clone();
                    tokio::spawn(async move {
                        tokio::time::sleep(cooldown).await;
                        let _ = timer_tx.send(SessionCommand::AdvanceTime);
                    });
                }

                // A reaction is requested for every intent, including a
                // rejected training attempt; the creature comments either way.
                if let Some(client) = client.clone() {
                    state.awaiting_reaction = true;
                    let stats = state.stats.clone();
                    let label = action.label();
                    let reaction_tx = tx.clone();
                    tokio::spawn(async move {
                        let text =
                            generate_reaction(&client, &stats, label, user_text.as_deref()).await;
                        let _ = reaction_tx.send(SessionCommand::ReactionArrived(text));
                    });
                }
            }
            SessionCommand::AdvanceTime => {
                state.advance_time();
                busy = false;
                tracing::debug!(
                    day = state.clock.day(),
                    time = %state.clock.time_of_day(),
                    "day clock advanced"
                );
            }
            SessionCommand::Decay => {
                state.apply_decay();
            }
            SessionCommand::ReactionArrived(text) => {
                state.append_message(Sender::Creature, text);
                state.awaiting_reaction = false;
            }
            SessionCommand::Inspect(reply) => {
                let _ = reply.send(SessionSnapshot {
                    stats: state.stats.clone(),
                    mood: state.mood(),
                    day: state.clock.day(),
                    time_of_day: state.clock.time_of_day(),
                    messages: state.log.entries().to_vec(),
                    awaiting_reaction: state.awaiting_reaction,
                    busy,
                });
            }
            SessionCommand::Shutdown => break,
        }
    }

    tracing::debug!("session actor stopped");
}
