//! Whitespace tokenizer implementation.

use crate::analysis::token::Token;
use crate::error::{OrthoError, Result};

/// A tokenizer that splits text on whitespace.
///
/// Runs of any Unicode whitespace delimit tokens, so leading or trailing
/// whitespace never produces empty tokens. Tokenizing the same string twice
/// yields identical results.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }

    /// Tokenize the given text into an ordered token sequence.
    ///
    /// Returns [`OrthoError::EmptyInput`] when the text is empty or contains
    /// only whitespace; a blank input is a user error, not a valid
    /// "no corrections" result, and is never turned into an empty sequence.
    pub fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        if text.trim().is_empty() {
            return Err(OrthoError::EmptyInput);
        }

        Ok(text
            .split_whitespace()
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens = tokenizer.tokenize("hello  world\ttest").unwrap();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].surface, "hello");
        assert_eq!(tokens[1].surface, "world");
        assert_eq!(tokens[2].surface, "test");
        assert_eq!(tokens[2].position, 2);
    }

    #[test]
    fn test_surrounding_whitespace_discarded() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens = tokenizer.tokenize("  hello   world  ").unwrap();

        let words: Vec<&str> = tokens.iter().map(|t| t.surface.as_str()).collect();
        assert_eq!(words, vec!["hello", "world"]);
    }

    #[test]
    fn test_blank_input_is_an_error() {
        let tokenizer = WhitespaceTokenizer::new();

        assert!(matches!(
            tokenizer.tokenize(""),
            Err(OrthoError::EmptyInput)
        ));
        assert!(matches!(
            tokenizer.tokenize("   \t\n"),
            Err(OrthoError::EmptyInput)
        ));
    }

    #[test]
    fn test_tokens_are_normalized() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens = tokenizer.tokenize("Bonjou, COMMENT alez").unwrap();

        assert_eq!(tokens[0].surface, "Bonjou,");
        assert_eq!(tokens[0].normalized, "bonjou,");
        assert_eq!(tokens[1].normalized, "comment");
        assert_eq!(tokens[2].normalized, "alez");
    }

    #[test]
    fn test_tokenization_is_restartable() {
        let tokenizer = WhitespaceTokenizer::new();
        let text = "une deux trois";

        let first = tokenizer.tokenize(text).unwrap();
        let second = tokenizer.tokenize(text).unwrap();
        assert_eq!(first, second);
    }
}
