//! Core chat data model shared by the analysis and ranking crates.
//!
//! Field names serialize in camelCase so the JSON shape matches the host
//! messaging payloads exchanged with the scraping and UI collaborators.

use serde::{Deserialize, Serialize};

/// Preview of the most recent message in a conversation.
///
/// All fields are loosely formatted display text from the scraper; anything
/// missing normalizes to an empty string rather than failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastMessage {
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub content: String,
    /// Display timestamp, not guaranteed to be ISO-8601.
    #[serde(default)]
    pub time: String,
}

/// One visible conversation as captured by a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRecord {
    pub name: String,
    #[serde(default)]
    pub last_message: LastMessage,
}

/// Kind of supporting evidence attached to a chat during enrichment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalType {
    /// Taxonomy keywords found in the chat's last message.
    Expertise,
    /// Token overlap between the prompt and the chat's last message.
    Conversation,
}

/// A single piece of context evidence explaining why a chat is relevant,
/// independent of the final score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextSignal {
    #[serde(rename = "type")]
    pub signal_type: SignalType,
    pub details: String,
}

impl ContextSignal {
    pub fn new(signal_type: SignalType, details: impl Into<String>) -> Self {
        Self {
            signal_type,
            details: details.into(),
        }
    }
}

/// A chat record augmented with detected expertise and context evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedChat {
    #[serde(flatten)]
    pub chat: ChatRecord,
    /// Expertise categories detected in the last message, in taxonomy walk
    /// order, deduplicated.
    pub expertise: Vec<String>,
    pub context_match: Vec<ContextSignal>,
}

/// One ranked result, ready for direct display.
///
/// `relevance` is the raw score divided by 100 and is deliberately not
/// clamped, so callers can see signal strength above 1.0;
/// `confidence_score` is the bounded display value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub name: String,
    pub relevance: f64,
    pub reason: String,
    pub expertise: Vec<String>,
    pub confidence_score: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub context_match: Vec<ContextSignal>,
}
