//! Creature reaction generation
//!
//! Builds the persona prompt from the current stats and the triggering
//! action, then collapses every possible failure into one fixed in-character
//! fallback. Nothing past this boundary ever sees a transport error.

use crate::creature::stats::CreatureStats;
use crate::llm::client::LlmClient;

/// Returned for any transport or service failure, with no detail exposed
pub const REACTION_FALLBACK: &str = "*glitches in the void* (AI connection weak)";

/// Returned when the service answers successfully but with empty text
pub const EMPTY_REACTION: &str = "*cosmic shimmer*";

const PERSONA_SYSTEM_PROMPT: &str = "\
You are roleplaying as a \"Celestial Steed\" (a magical unicorn-like creature) \
in a vaporwave fantasy game. Your personality is ethereal, slightly mysterious, \
sometimes alien, but affectionate. Respond with a short, expressive sentence \
(max 15 words). Use magical sounds or telepathic emotes (e.g., *sparkles*, \
*telepathic hum*, *cosmic whinny*). Reference stars, crystals, dreams, or the void.";

/// Assemble the per-request prompt
fn build_prompt(stats: &CreatureStats, action_label: &str, user_text: Option<&str>) -> String {
    let mut prompt = format!(
        "Your name is {}.\n\
         Your current stats are:\n\
         - Hunger: {:.0}/100 (Lower is hungrier)\n\
         - Energy: {:.0}/100\n\
         - Happiness: {:.0}/100\n\
         - Bond with owner: {:.0}/100\n\n\
         The player just performed this action: \"{}\".\n",
        stats.name, stats.hunger, stats.energy, stats.happiness, stats.bond, action_label
    );
    if let Some(text) = user_text {
        prompt.push_str(&format!("The player said: \"{}\"\n", text));
    }
    prompt
}

/// Request one in-character reaction. Infallible by contract: any error or
/// empty reply becomes a fixed fallback string.
pub async fn generate_reaction(
    client: &LlmClient,
    stats: &CreatureStats,
    action_label: &str,
    user_text: Option<&str>,
) -> String {
    let prompt = build_prompt(stats, action_label, user_text);
    match client.complete(PERSONA_SYSTEM_PROMPT, &prompt).await {
        Ok(text) => {
            let text = text.trim();
            if text.is_empty() {
                EMPTY_REACTION.to_string()
            } else {
                text.to_string()
            }
        }
        Err(e) => {
            tracing::warn!("reaction request failed: {}", e);
            REACTION_FALLBACK.to_string()
        }
    }
}
