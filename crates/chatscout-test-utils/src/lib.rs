//! Shared testing fixtures for the Chatscout workspace.

use chatscout_common::{ChatRecord, LastMessage};

/// Build a chat preview with the given display name and last-message text.
/// The sender defaults to the chat name, matching how the scraper fills
/// list-view previews.
pub fn chat(name: &str, content: &str) -> ChatRecord {
    chat_at(name, content, "10:30")
}

/// Like [`chat`], with an explicit display time.
pub fn chat_at(name: &str, content: &str, time: &str) -> ChatRecord {
    ChatRecord {
        name: name.to_string(),
        last_message: LastMessage {
            sender: name.to_string(),
            content: content.to_string(),
            time: time.to_string(),
        },
    }
}

/// A small mixed roster: technical, business, and small-talk chats.
pub fn sample_roster() -> Vec<ChatRecord> {
    vec![
        chat("Dev Corner", "just fixed a tricky API bug in our backend"),
        chat_at("Marketing Minds", "the new seo campaign doubled our engagement", "Yesterday"),
        chat("Dinner Club", "had dinner last night"),
        chat_at("Startup Founders", "our pitch deck needs funding numbers", "Tuesday"),
    ]
}
