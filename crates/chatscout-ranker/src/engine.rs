//! One-shot analysis entry point tying intent classification, topic
//! extraction, enrichment, and scoring together.

use chatscout_analysis::{enrich_chat, extract_topics, DomainTaxonomy, IntentClassifier};
use chatscout_common::{ChatRecord, EnrichedChat, Recommendation, MAX_CHATS};
use tracing::debug;

use crate::scorer::score_chats;
use crate::weights::WeightVector;

/// Stateless relevance engine.
///
/// The taxonomy, pattern table, and weights are immutable after
/// construction, so one instance can serve concurrent callers by shared
/// reference. Each call operates purely on its own inputs.
#[derive(Default)]
pub struct RelevanceEngine {
    taxonomy: DomainTaxonomy,
    classifier: IntentClassifier,
    weights: WeightVector,
}

impl RelevanceEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: WeightVector) -> Self {
        Self {
            weights,
            ..Self::default()
        }
    }

    /// Rank the given chat previews against a free-text need description.
    ///
    /// Pure and total: an empty prompt or empty chat list yields an empty
    /// ranking, never an error. At most [`MAX_CHATS`] previews are
    /// considered. Results are sorted by descending relevance; ties keep
    /// input order.
    pub fn analyze(&self, prompt: &str, chats: &[ChatRecord]) -> Vec<Recommendation> {
        let intents = self.classifier.classify(prompt);
        debug!(?intents, "classified prompt intent");

        let topics = extract_topics(&self.taxonomy, prompt);
        debug!(?topics, "extracted prompt topics");

        let enriched: Vec<EnrichedChat> = chats
            .iter()
            .take(MAX_CHATS)
            .map(|chat| enrich_chat(&self.taxonomy, chat, prompt))
            .collect();

        let mut results = score_chats(&enriched, &intents, &topics, &self.weights);
        results.sort_by(|a, b| {
            b.relevance
                .partial_cmp(&a.relevance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        debug!(
            candidates = chats.len(),
            ranked = results.len(),
            "analysis complete"
        );
        results
    }
}
