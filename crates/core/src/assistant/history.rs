//! Conversation history sanitizer.

use serde_json::Value;

use super::schema::{truncate_chars, ConversationTurn, Speaker, MAX_HISTORY_TURNS, MAX_TURN_CHARS};

/// Normalizes untrusted conversation history into a bounded, well-typed turn
/// sequence.
///
/// Only the last [`MAX_HISTORY_TURNS`] entries are considered. Entries that
/// are not objects, carry an unknown role, or have non-textual or blank
/// content are dropped silently; surviving content is cut to
/// [`MAX_TURN_CHARS`] characters. Total over arbitrary input.
pub fn sanitize_history(raw_history: &[Value]) -> Vec<ConversationTurn> {
    let window_start = raw_history.len().saturating_sub(MAX_HISTORY_TURNS);

    raw_history[window_start..]
        .iter()
        .filter_map(|entry| {
            let record = entry.as_object()?;
            let role = Speaker::parse(record.get("role")?.as_str()?)?;
            let content = record.get("content")?.as_str()?.trim();
            if content.is_empty() {
                return None;
            }
            Some(ConversationTurn {
                role,
                content: truncate_chars(content, MAX_TURN_CHARS).to_string(),
            })
        })
        .collect()
}
