//! Prompt intent classification.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Coarse classification of what kind of help a prompt is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intent {
    ProblemSolving,
    Networking,
    Learning,
    Collaboration,
    Analysis,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::ProblemSolving => "problem-solving",
            Intent::Networking => "networking",
            Intent::Learning => "learning",
            Intent::Collaboration => "collaboration",
            Intent::Analysis => "analysis",
        }
    }
}

/// Matches a prompt against the fixed intent pattern table.
///
/// A prompt may match zero, one, or many intents; absence of a match is not
/// an error.
pub struct IntentClassifier {
    patterns: Vec<(Intent, Regex)>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        let table: [(Intent, &str); 5] = [
            (
                Intent::ProblemSolving,
                r"help|issue|problem|fix|solve|trouble|need assistance",
            ),
            (
                Intent::Networking,
                r"connect|introduction|network|meet|refer|recommendation",
            ),
            (
                Intent::Learning,
                r"learn|study|understand|explain|teach|guide|tutorial",
            ),
            (
                Intent::Collaboration,
                r"collaborate|work together|partner|join|team up",
            ),
            (
                Intent::Analysis,
                r"analyze|analyse|review|evaluate|assess|examine",
            ),
        ];
        let patterns = table
            .into_iter()
            .map(|(intent, pattern)| {
                let re = Regex::new(&format!("(?i){pattern}")).expect("intent pattern compiles");
                (intent, re)
            })
            .collect();
        Self { patterns }
    }
}

impl IntentClassifier {
    /// Every intent whose pattern matches anywhere in the prompt, in table order.
    pub fn classify(&self, prompt: &str) -> Vec<Intent> {
        self.patterns
            .iter()
            .filter(|(_, re)| re.is_match(prompt))
            .map(|(intent, _)| *intent)
            .collect()
    }
}
