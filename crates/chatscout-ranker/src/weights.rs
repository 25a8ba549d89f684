//! Weight table for relevance scoring.
//!
//! Unlike a normalised weight vector these are raw additive point values;
//! the bounded display score is derived in the scorer.

use serde::{Deserialize, Serialize};

/// The 4-component weight table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightVector {
    /// A prompt topic label found verbatim in the message, per topic.
    pub exact_match: f64,
    /// A detected expertise category that is also a prompt topic, per category.
    pub expertise_match: f64,
    /// Multiplier applied to the summed context evidence.
    pub context_match: f64,
    /// A detected intent label found in the message, at most once.
    pub intent_match: f64,
}

impl Default for WeightVector {
    fn default() -> Self {
        Self {
            exact_match:     35.0,
            expertise_match: 25.0,
            context_match:   20.0,
            intent_match:    10.0,
        }
    }
}

impl WeightVector {
    /// Convert to array for iteration.
    pub fn as_array(&self) -> [f64; 4] {
        [
            self.exact_match,
            self.expertise_match,
            self.context_match,
            self.intent_match,
        ]
    }

    /// All weights non-negative; a negative weight would break score
    /// monotonicity.
    pub fn validate(&self) -> bool {
        self.as_array().iter().all(|w| *w >= 0.0)
    }
}
