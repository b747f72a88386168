//! One-shot creature name generation
//!
//! Used at most once per new-creature creation, with its own fallbacks:
//! an empty reply names the creature "Nebula", a failed request "Galaxy".

use crate::llm::client::LlmClient;

pub const NAME_FALLBACK_EMPTY: &str = "Nebula";
pub const NAME_FALLBACK_ERROR: &str = "Galaxy";

const NAMING_SYSTEM_PROMPT: &str =
    "You name fantasy creatures. Reply with the name only, nothing else.";

const NAMING_PROMPT: &str = "Generate a magical, celestial, or crystal-themed name \
for a fantasy horse (e.g., Nebula, Prism, Gossamer). Just return the name.";

/// Request a generated name. Never fails; both failure modes collapse to
/// fixed fallback names.
pub async fn generate_name(client: &LlmClient) -> String {
    match client.complete(NAMING_SYSTEM_PROMPT, NAMING_PROMPT).await {
        Ok(text) => {
            let name = text.trim();
            if name.is_empty() {
                NAME_FALLBACK_EMPTY.to_string()
            } else {
                name.to_string()
            }
        }
        Err(e) => {
            tracing::warn!("name request failed: {}", e);
            NAME_FALLBACK_ERROR.to_string()
        }
    }
}
