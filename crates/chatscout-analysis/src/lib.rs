//! chatscout-analysis — Prompt and chat analysis phase: the domain taxonomy,
//! intent classification, topic extraction, and per-chat enrichment.

pub mod enrich;
pub mod intent;
pub mod taxonomy;

pub use enrich::{enrich_chat, token_set};
pub use intent::{Intent, IntentClassifier};
pub use taxonomy::{DomainTaxonomy, TaxonomyNode};

/// Collect every taxonomy category whose keywords appear in the prompt.
///
/// Deterministic and idempotent; an empty prompt yields an empty set.
pub fn extract_topics(taxonomy: &DomainTaxonomy, prompt: &str) -> Vec<String> {
    taxonomy.match_categories(prompt)
}
