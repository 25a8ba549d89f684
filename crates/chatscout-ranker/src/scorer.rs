//! Per-chat weighted scoring, reason construction, and threshold filtering.

use chatscout_analysis::Intent;
use chatscout_common::{EnrichedChat, Recommendation, SignalType};

use crate::weights::WeightVector;

/// Recommendations at or below this confidence are dropped. Fixed design
/// constant, not configurable.
pub const MIN_CONFIDENCE: u32 = 40;

/// Score every enriched chat and keep those above the confidence threshold.
/// Output order matches input order; ranking is the caller's concern.
pub fn score_chats(
    chats: &[EnrichedChat],
    intents: &[Intent],
    topics: &[String],
    weights: &WeightVector,
) -> Vec<Recommendation> {
    chats
        .iter()
        .filter_map(|chat| score_chat(chat, intents, topics, weights))
        .collect()
}

fn score_chat(
    chat: &EnrichedChat,
    intents: &[Intent],
    topics: &[String],
    weights: &WeightVector,
) -> Option<Recommendation> {
    let content = chat.chat.last_message.content.to_lowercase();
    let mut score = 0.0;

    // Topic labels found verbatim in the message.
    let exact_matches = topics
        .iter()
        .filter(|topic| content.contains(&topic.to_lowercase()))
        .count();
    score += exact_matches as f64 * weights.exact_match;

    // Detected expertise that the prompt actually asked about.
    let expertise_matches: Vec<&str> = chat
        .expertise
        .iter()
        .filter(|category| topics.contains(*category))
        .map(String::as_str)
        .collect();
    score += expertise_matches.len() as f64 * weights.expertise_match;

    // Context evidence: expertise signals count double.
    if !chat.context_match.is_empty() {
        let evidence: u32 = chat
            .context_match
            .iter()
            .map(|signal| match signal.signal_type {
                SignalType::Expertise => 2,
                SignalType::Conversation => 1,
            })
            .sum();
        score += evidence as f64 * weights.context_match;
    }

    // Intent alignment: the detected intent label appearing in the message.
    let intent_hit = intents
        .iter()
        .any(|intent| content.contains(intent.as_str()));
    if intent_hit {
        score += weights.intent_match;
    }

    let mut reasons: Vec<String> = Vec::new();
    if !expertise_matches.is_empty() {
        reasons.push(format!("Expert in {}", expertise_matches.join(", ")));
    }
    if exact_matches > 0 {
        reasons.push("Directly matches your needs".to_string());
    }
    if intent_hit {
        reasons.push("Shows relevant experience".to_string());
    }

    let confidence_score = (score.round() as u32).min(100);
    if confidence_score <= MIN_CONFIDENCE {
        return None;
    }

    Some(Recommendation {
        name: chat.chat.name.clone(),
        relevance: score / 100.0,
        reason: reasons.join(". "),
        expertise: chat.expertise.clone(),
        confidence_score,
        context_match: chat.context_match.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatscout_common::{ChatRecord, ContextSignal, LastMessage};
    use pretty_assertions::assert_eq;

    fn enriched(name: &str, expertise: &[&str], signals: Vec<ContextSignal>) -> EnrichedChat {
        EnrichedChat {
            chat: ChatRecord {
                name: name.to_string(),
                last_message: LastMessage::default(),
            },
            expertise: expertise.iter().map(|s| s.to_string()).collect(),
            context_match: signals,
        }
    }

    fn topics(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let results = score_chats(&[], &[], &topics(&["programming"]), &WeightVector::default());
        assert!(results.is_empty());
    }

    #[test]
    fn test_expertise_match_weight() {
        let signal = ContextSignal::new(SignalType::Expertise, "Shows knowledge in programming");
        let chat = enriched("Dev", &["programming"], vec![signal]);
        let results = score_chats(
            &[chat],
            &[],
            &topics(&["programming"]),
            &WeightVector::default(),
        );
        // 25 expertise + 2 * 20 context = 65
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].confidence_score, 65);
        assert!((results[0].relevance - 0.65).abs() < 1e-9);
        assert_eq!(results[0].reason, "Expert in programming");
    }

    #[test]
    fn test_below_threshold_is_dropped() {
        // Single expertise match with no context: 25 points.
        let chat = enriched("Weak", &["programming"], vec![]);
        let results = score_chats(
            &[chat],
            &[],
            &topics(&["programming"]),
            &WeightVector::default(),
        );
        assert!(results.is_empty());
    }

    #[test]
    fn test_exactly_threshold_is_dropped() {
        // One expertise context signal alone: 2 * 20 = 40, not above 40.
        let signal = ContextSignal::new(SignalType::Expertise, "Shows knowledge in data");
        let chat = enriched("Borderline", &[], vec![signal]);
        let results = score_chats(&[chat], &[], &[], &WeightVector::default());
        assert!(results.is_empty());
    }

    #[test]
    fn test_confidence_capped_at_100_relevance_unclamped() {
        let signals = vec![
            ContextSignal::new(SignalType::Expertise, "Shows knowledge in programming"),
            ContextSignal::new(SignalType::Expertise, "Shows knowledge in data"),
            ContextSignal::new(SignalType::Conversation, "Recent messages show relevant discussion"),
        ];
        let chat = enriched("Strong", &["programming", "data"], signals);
        let results = score_chats(
            &[chat],
            &[],
            &topics(&["programming", "data"]),
            &WeightVector::default(),
        );
        // 2 * 25 + (2 + 2 + 1) * 20 = 150
        assert_eq!(results[0].confidence_score, 100);
        assert!((results[0].relevance - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_more_matches_score_strictly_higher() {
        let signal = || ContextSignal::new(SignalType::Expertise, "Shows knowledge in programming");
        let three = enriched("Three", &["programming", "languages", "concepts"], vec![signal()]);
        let one = enriched("One", &["programming"], vec![signal()]);
        let all_topics = topics(&["programming", "languages", "concepts"]);
        let results = score_chats(&[three, one], &[], &all_topics, &WeightVector::default());
        assert_eq!(results.len(), 2);
        // 3 * 25 + 40 = 115 -> 100 vs 1 * 25 + 40 = 65
        assert!(results[0].confidence_score > results[1].confidence_score);
    }

    #[test]
    fn test_added_evidence_never_decreases_score() {
        let base = enriched("Base", &["programming"], vec![]);
        let mut more = enriched("More", &["programming"], vec![]);
        more.context_match.push(ContextSignal::new(
            SignalType::Conversation,
            "Recent messages show relevant discussion",
        ));
        let t = topics(&["programming"]);
        let weights = WeightVector::default();
        let base_score = score_chats(&[base], &[], &t, &weights);
        let more_score = score_chats(&[more], &[], &t, &weights);
        let base_conf = base_score.first().map(|r| r.confidence_score).unwrap_or(0);
        let more_conf = more_score.first().map(|r| r.confidence_score).unwrap_or(0);
        assert!(more_conf >= base_conf);
    }

    #[test]
    fn test_intent_alignment_adds_once() {
        let signals = vec![ContextSignal::new(
            SignalType::Expertise,
            "Shows knowledge in marketing",
        )];
        let mut chat = enriched("Networker", &["marketing"], signals);
        chat.chat.last_message.content = "happy to help with networking and learning".to_string();
        let results = score_chats(
            &[chat],
            &[Intent::Networking, Intent::Learning],
            &topics(&["marketing"]),
            &WeightVector::default(),
        );
        // 25 expertise + 40 context + 10 intent (once) = 75
        assert_eq!(results[0].confidence_score, 75);
        assert!(results[0].reason.contains("Shows relevant experience"));
    }
}
