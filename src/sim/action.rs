//! Player intents toward the creature
//!
//! A closed set: four care actions plus free-text chat. Chat bypasses the
//! busy window and never advances the day clock.

/// Everything the player can do to the creature
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionKind {
    Feed,
    Groom,
    Train,
    Rest,
    Chat(String),
}

impl ActionKind {
    /// Label sent to the text-generation service with each reaction request
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::Feed => "FEED",
            ActionKind::Groom => "GROOM",
            ActionKind::Train => "TRAIN",
            ActionKind::Rest => "REST",
            ActionKind::Chat(_) => "CHAT",
        }
    }

    /// Whether this action opens the busy window and, on expiry, advances time
    pub fn has_cooldown(&self) -> bool {
        !matches!(self, ActionKind::Chat(_))
    }

    /// The chat payload, if any
    pub fn user_text(&self) -> Option<&str> {
        match self {
            ActionKind::Chat(text) => Some(text),
            _ => None,
        }
    }
}

/// What applying an action did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Stat deltas applied (or chat text logged)
    Applied,
    /// Precondition failed; only a system message was appended
    Rejected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_match_service_contract() {
        assert_eq!(ActionKind::Feed.label(), "FEED");
        assert_eq!(ActionKind::Groom.label(), "GROOM");
        assert_eq!(ActionKind::Train.label(), "TRAIN");
        assert_eq!(ActionKind::Rest.label(), "REST");
        assert_eq!(ActionKind::Chat("hi".into()).label(), "CHAT");
    }

    #[test]
    fn test_only_chat_skips_cooldown() {
        assert!(ActionKind::Feed.has_cooldown());
        assert!(ActionKind::Train.has_cooldown());
        assert!(!ActionKind::Chat("hello".into()).has_cooldown());
    }

    #[test]
    fn test_user_text_only_on_chat() {
        assert_eq!(ActionKind::Rest.user_text(), None);
        assert_eq!(
            ActionKind::Chat("good morning".into()).user_text(),
            Some("good morning")
        );
    }
}
