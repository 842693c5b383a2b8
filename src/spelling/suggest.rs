//! Spelling suggestion selection.

use serde::{Deserialize, Serialize};

use crate::spelling::levenshtein::LevenshteinMatcher;
use crate::spelling::vocabulary::Vocabulary;

/// Default maximum edit distance (exclusive) for proposing a correction.
///
/// With the default of 2, only candidates at distance 0 or 1 are considered
/// plausible typos.
pub const DEFAULT_THRESHOLD: usize = 2;

/// A proposed correction for a single token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested vocabulary entry.
    pub word: String,
    /// Edit distance between the token and the entry.
    pub distance: usize,
}

/// Selects the closest vocabulary entry for a token.
pub struct SuggestionEngine {
    vocabulary: Vocabulary,
    threshold: usize,
}

impl SuggestionEngine {
    /// Create a new engine with the default threshold.
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self::with_threshold(vocabulary, DEFAULT_THRESHOLD)
    }

    /// Create a new engine with a custom threshold.
    pub fn with_threshold(vocabulary: Vocabulary, threshold: usize) -> Self {
        SuggestionEngine {
            vocabulary,
            threshold,
        }
    }

    /// Get the vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Get the threshold.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Check if a word is a vocabulary entry (case-insensitive).
    pub fn is_correct(&self, word: &str) -> bool {
        self.vocabulary.contains(word)
    }

    /// Find the closest vocabulary entry within the threshold.
    ///
    /// Entries are scanned in vocabulary order and only a strictly smaller
    /// distance replaces the current best, so the earliest entry reaching
    /// the minimum wins ties.
    ///
    /// Returns `None` when no entry is strictly closer than the threshold,
    /// or when the best entry is the token itself: an exact match is not an
    /// error, even though its distance of 0 qualifies.
    pub fn suggest(&self, token: &str) -> Option<Suggestion> {
        let matcher = LevenshteinMatcher::new(token);
        let mut best: Option<(&str, usize)> = None;
        let mut cutoff = self.threshold;

        for entry in self.vocabulary.iter() {
            if cutoff == 0 {
                break;
            }
            if let Some(distance) = matcher.distance_bounded(entry, cutoff - 1) {
                best = Some((entry, distance));
                cutoff = distance;
            }
        }

        match best {
            Some((word, _)) if word == token => None,
            Some((word, distance)) => Some(Suggestion {
                word: word.to_string(),
                distance,
            }),
            None => None,
        }
    }
}
