//! A single replacement rule

use serde::{Deserialize, Serialize};

/// How a rule's key is located in the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Key contains whitespace: every literal occurrence is replaced,
    /// even inside larger words
    Phrase,
    /// Key is a single token: only whole-word occurrences are replaced
    Word,
}

/// An `incorrect -> correct` text pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Text as it was mis-transcribed
    pub incorrect: String,
    /// Replacement text
    pub correct: String,
}

impl Rule {
    /// Create a new rule
    pub fn new(incorrect: impl Into<String>, correct: impl Into<String>) -> Self {
        Self {
            incorrect: incorrect.into(),
            correct: correct.into(),
        }
    }

    /// Match kind derived from the key
    pub fn kind(&self) -> MatchKind {
        if self.incorrect.chars().any(char::is_whitespace) {
            MatchKind::Phrase
        } else {
            MatchKind::Word
        }
    }

    /// Whether the key is a phrase
    pub fn is_phrase(&self) -> bool {
        self.kind() == MatchKind::Phrase
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Rule {
    fn from((incorrect, correct): (K, V)) -> Self {
        Self::new(incorrect, correct)
    }
}
