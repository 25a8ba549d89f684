//! Per-chat context enrichment.
//!
//! Two independent passes over a chat's last-message text: expertise
//! detection via the taxonomy walk, and context evidence from prompt/message
//! token overlap plus per-category keyword hits. Missing message content
//! behaves as an empty string; there are no failure modes.

use std::collections::HashSet;

use chatscout_common::{ChatRecord, ContextSignal, EnrichedChat, SignalType};

use crate::taxonomy::DomainTaxonomy;

/// Minimum prompt/message token overlap that counts as an ongoing relevant
/// conversation.
const OVERLAP_THRESHOLD: f64 = 0.3;

/// Augment a chat record with detected expertise and context evidence.
pub fn enrich_chat(taxonomy: &DomainTaxonomy, chat: &ChatRecord, prompt: &str) -> EnrichedChat {
    let content = chat.last_message.content.to_lowercase();
    let expertise = taxonomy.match_categories(&content);
    let context_match = context_signals(taxonomy, &content, prompt);
    EnrichedChat {
        chat: chat.clone(),
        expertise,
        context_match,
    }
}

fn context_signals(taxonomy: &DomainTaxonomy, message: &str, prompt: &str) -> Vec<ContextSignal> {
    let mut signals = Vec::new();

    let prompt_tokens = token_set(prompt);
    let message_tokens = token_set(message);
    // A prompt with no tokens has overlap 0 by definition, not a division error.
    if !prompt_tokens.is_empty() {
        let shared = prompt_tokens.intersection(&message_tokens).count();
        let overlap = shared as f64 / prompt_tokens.len() as f64;
        if overlap > OVERLAP_THRESHOLD {
            signals.push(ContextSignal::new(
                SignalType::Conversation,
                "Recent messages show relevant discussion",
            ));
        }
    }

    // Independent of the expertise set above; one entry per category whose
    // keywords appear in the message, without deduplication against it.
    for (category, keywords) in taxonomy.keyword_categories() {
        if keywords.iter().any(|k| message.contains(k)) {
            signals.push(ContextSignal::new(
                SignalType::Expertise,
                format!("Shows knowledge in {category}"),
            ));
        }
    }

    signals
}

/// Lower-cased word tokens, split on runs of non-word characters.
pub fn token_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatscout_test_utils::chat;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_expertise_detected_from_message() {
        let taxonomy = DomainTaxonomy::default();
        let record = chat("Dev Corner", "just fixed a tricky API bug in our backend");
        let enriched = enrich_chat(&taxonomy, &record, "I need help with React frontend bugs");
        assert!(enriched.expertise.contains(&"programming".to_string()));
    }

    #[test]
    fn test_identical_text_yields_conversation_signal() {
        let taxonomy = DomainTaxonomy::default();
        let record = chat("Echo", "shall we plan the product launch");
        let enriched = enrich_chat(&taxonomy, &record, "shall we plan the product launch");
        assert!(enriched
            .context_match
            .iter()
            .any(|s| s.signal_type == SignalType::Conversation));
    }

    #[test]
    fn test_low_overlap_yields_no_conversation_signal() {
        let taxonomy = DomainTaxonomy::default();
        let record = chat("Quiet", "good night");
        let enriched = enrich_chat(&taxonomy, &record, "looking for a UX designer for my app");
        assert!(!enriched
            .context_match
            .iter()
            .any(|s| s.signal_type == SignalType::Conversation));
    }

    #[test]
    fn test_keyword_hit_yields_expertise_signal_per_category() {
        let taxonomy = DomainTaxonomy::default();
        // "api" hits programming, "advertising" hits marketing.
        let record = chat("Mixed", "the advertising api is live");
        let enriched = enrich_chat(&taxonomy, &record, "");
        let details: Vec<&str> = enriched
            .context_match
            .iter()
            .filter(|s| s.signal_type == SignalType::Expertise)
            .map(|s| s.details.as_str())
            .collect();
        assert_eq!(
            details,
            vec!["Shows knowledge in programming", "Shows knowledge in marketing"]
        );
    }

    #[test]
    fn test_empty_message_content() {
        let taxonomy = DomainTaxonomy::default();
        let record = chat("Empty", "");
        let enriched = enrich_chat(&taxonomy, &record, "need help with python");
        assert!(enriched.expertise.is_empty());
        assert!(enriched.context_match.is_empty());
    }

    #[test]
    fn test_token_set_splits_on_non_word_runs() {
        let tokens = token_set("Hey -- need help: React/Node?");
        assert!(tokens.contains("react"));
        assert!(tokens.contains("node"));
        assert!(!tokens.contains(""));
    }
}
