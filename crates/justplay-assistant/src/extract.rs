use crate::types::ThreadMessage;

/// Pick the assistant's answer from a newest-first message list.
///
/// Returns the text of the first assistant message that has a text part, or
/// an empty string when there is none. An empty answer is a valid outcome.
pub fn extract_reply(messages: &[ThreadMessage]) -> String {
    messages
        .iter()
        .filter(|msg| msg.is_assistant())
        .find_map(ThreadMessage::text)
        .map(str::to_string)
        .unwrap_or_default()
}
