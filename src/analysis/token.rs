//! Token types for text analysis.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single whitespace-delimited unit of input text.
///
/// A token keeps its verbatim surface form for reporting and a lower-cased
/// normalized form for vocabulary comparison.
///
/// # Examples
///
/// ```
/// use ortho::analysis::token::Token;
///
/// let token = Token::new("Bonjour,", 0);
/// assert_eq!(token.surface, "Bonjour,");
/// assert_eq!(token.normalized, "bonjour,");
/// assert_eq!(token.position, 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text of the token exactly as it appeared in the input.
    pub surface: String,

    /// The lower-cased form used for comparison.
    ///
    /// Lower-casing uses the locale-independent Unicode mapping, so the
    /// same input produces the same tokens on every platform.
    pub normalized: String,

    /// The position of the token in the token sequence (0-based).
    pub position: usize,
}

impl Token {
    /// Create a new token from its surface form and position.
    pub fn new<S: Into<String>>(surface: S, position: usize) -> Self {
        let surface = surface.into();
        let normalized = surface.to_lowercase();
        Token {
            surface,
            normalized,
            position,
        }
    }

    /// Get the byte length of the surface form.
    pub fn len(&self) -> usize {
        self.surface.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.surface.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 0);
        assert_eq!(token.surface, "hello");
        assert_eq!(token.normalized, "hello");
        assert_eq!(token.position, 0);
    }

    #[test]
    fn test_token_normalization() {
        let token = Token::new("MERCI", 3);
        assert_eq!(token.surface, "MERCI");
        assert_eq!(token.normalized, "merci");

        // Accented characters survive case folding with their length intact.
        let token = Token::new("Été", 0);
        assert_eq!(token.normalized, "été");
        assert_eq!(token.normalized.chars().count(), 3);
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("Bonjour,", 0);
        assert_eq!(format!("{token}"), "Bonjour,");
    }
}
