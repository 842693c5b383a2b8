//! Spell checker tying tokenization, suggestion selection, and report
//! formatting together.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::WhitespaceTokenizer;
use crate::error::{OrthoError, Result};
use crate::spelling::report::{Correction, ReportFormatter, ReportStyle};
use crate::spelling::suggest::{DEFAULT_THRESHOLD, SuggestionEngine};
use crate::spelling::vocabulary::{BuiltinVocabulary, Vocabulary};

/// Configuration for the spell checker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Maximum edit distance (exclusive) for proposing a correction.
    pub threshold: usize,
    /// Maximum input length in chars; longer inputs fail fast, keeping the
    /// quadratic distance cost bounded.
    pub max_input_chars: usize,
    /// Marker strings for the rendered report.
    pub style: ReportStyle,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        CheckerConfig {
            threshold: DEFAULT_THRESHOLD,
            max_input_chars: 10_000,
            style: ReportStyle::french(),
        }
    }
}

impl CheckerConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }
}

/// Result of checking one input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionReport {
    /// The verbatim input.
    pub original: String,
    /// Corrections in token order.
    pub corrections: Vec<Correction>,
    /// The rendered report.
    pub text: String,
}

impl CorrectionReport {
    /// Check if any corrections were proposed.
    pub fn has_corrections(&self) -> bool {
        !self.corrections.is_empty()
    }
}

/// Checks input text against a reference vocabulary and proposes
/// corrections for tokens that look like typos.
///
/// The checker holds no per-call state: checking is a pure function of the
/// input text and the vocabulary, so the same input always produces the
/// same report, and one instance can serve concurrent calls.
pub struct SpellChecker {
    tokenizer: WhitespaceTokenizer,
    engine: SuggestionEngine,
    formatter: ReportFormatter,
    max_input_chars: usize,
}

impl SpellChecker {
    /// Create a checker over the built-in French vocabulary.
    pub fn new() -> Self {
        Self::with_vocabulary(BuiltinVocabulary::french())
    }

    /// Create a checker over a custom vocabulary.
    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        Self::with_config(vocabulary, CheckerConfig::default())
    }

    /// Create a checker with a custom configuration.
    pub fn with_config(vocabulary: Vocabulary, config: CheckerConfig) -> Self {
        SpellChecker {
            tokenizer: WhitespaceTokenizer::new(),
            engine: SuggestionEngine::with_threshold(vocabulary, config.threshold),
            formatter: ReportFormatter::new(config.style),
            max_input_chars: config.max_input_chars,
        }
    }

    /// Get the vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        self.engine.vocabulary()
    }

    /// Check one input text and produce a correction report.
    ///
    /// Fails with [`OrthoError::EmptyInput`] on blank input (the caller's
    /// "invalid input" signal) and with [`OrthoError::InputTooLarge`] when
    /// the input exceeds the configured cap. Neither failure is retriable:
    /// an identical call produces an identical failure.
    pub fn check(&self, text: &str) -> Result<CorrectionReport> {
        let len = text.chars().count();
        if len > self.max_input_chars {
            return Err(OrthoError::input_too_large(len, self.max_input_chars));
        }

        let tokens = self.tokenizer.tokenize(text)?;

        let mut corrections = Vec::new();
        for token in &tokens {
            if self.engine.is_correct(&token.normalized) {
                continue;
            }
            if let Some(suggestion) = self.engine.suggest(&token.normalized) {
                corrections.push(Correction {
                    original: token.surface.clone(),
                    suggestion: suggestion.word,
                    distance: suggestion.distance,
                });
            }
        }

        let rendered = self.formatter.format(text, &corrections);
        Ok(CorrectionReport {
            original: text.to_string(),
            corrections,
            text: rendered,
        })
    }
}

impl Default for SpellChecker {
    fn default() -> Self {
        Self::new()
    }
}
