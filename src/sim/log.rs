//! Append-only message log
//!
//! Ordering is log-position-based; timestamps are informational only and
//! non-decreasing (ties permitted). Nothing is removed or edited in place.

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Who a log entry is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Creature,
    System,
}

/// One immutable log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    /// Milliseconds since session start
    pub timestamp_ms: u64,
}

/// The session's ordered message history
#[derive(Debug, Clone)]
pub struct MessageLog {
    entries: Vec<Message>,
    started_at: Instant,
    last_stamp_ms: u64,
}

impl MessageLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            started_at: Instant::now(),
            last_stamp_ms: 0,
        }
    }

    /// Append one entry. Timestamps never go backwards even if the
    /// monotonic clock is coarse enough to tie.
    pub fn append(&mut self, sender: Sender, text: impl Into<String>) {
        let elapsed = self.started_at.elapsed().as_millis() as u64;
        let stamp = elapsed.max(self.last_stamp_ms);
        self.last_stamp_ms = stamp;
        self.entries.push(Message {
            sender,
            text: text.into(),
            timestamp_ms: stamp,
        });
    }

    pub fn entries(&self) -> &[Message] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.entries.last()
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new()
    }
}
