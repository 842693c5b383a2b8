//! Correction report formatting.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

/// A correction applied to one token of the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    /// The token as it appeared in the input.
    pub original: String,
    /// The vocabulary entry proposed as the correction.
    pub suggestion: String,
    /// Edit distance between the normalized token and the suggestion.
    pub distance: usize,
}

/// Marker strings for the rendered report.
///
/// The report structure is fixed (header, correction lines, fallback line,
/// echoed original, footer); only the marker text is localizable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStyle {
    /// Opening line of the report.
    pub header: String,
    /// Marker placed before the misspelled token.
    pub typo_label: String,
    /// Marker placed before the corrected form.
    pub correction_label: String,
    /// Line emitted when no correction was produced.
    pub clean_line: String,
    /// Label prefixing the echoed original text.
    pub original_label: String,
    /// Closing marker of the report.
    pub footer: String,
}

impl ReportStyle {
    /// The default French markers.
    pub fn french() -> Self {
        ReportStyle {
            header: "|| CORRECTEUR ORTHOGRAPHIQUE".to_string(),
            typo_label: "FAUTE_DE_TAPE".to_string(),
            correction_label: "CORRECTION".to_string(),
            clean_line: "✓ Pas d'erreur détectée !".to_string(),
            original_label: "Texte original :".to_string(),
            footer: "||".to_string(),
        }
    }

    /// English markers.
    pub fn english() -> Self {
        ReportStyle {
            header: "|| SPELL CHECKER".to_string(),
            typo_label: "TYPO".to_string(),
            correction_label: "CORRECTION".to_string(),
            clean_line: "✓ No errors detected!".to_string(),
            original_label: "Original text:".to_string(),
            footer: "||".to_string(),
        }
    }
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self::french()
    }
}

/// Renders correction reports.
#[derive(Debug, Clone, Default)]
pub struct ReportFormatter {
    style: ReportStyle,
}

impl ReportFormatter {
    /// Create a new formatter with the given style.
    pub fn new(style: ReportStyle) -> Self {
        ReportFormatter { style }
    }

    /// Get the style.
    pub fn style(&self) -> &ReportStyle {
        &self.style
    }

    /// Assemble the report for one input.
    ///
    /// Emits one line per correction whose suggestion differs from the
    /// token's surface form, in token order, or the clean line when none
    /// differ, then echoes the verbatim original text.
    pub fn format(&self, original: &str, corrections: &[Correction]) -> String {
        let mut out = String::new();
        out.push_str(&self.style.header);
        out.push('\n');

        let mut emitted = 0;
        for correction in corrections {
            if correction.suggestion == correction.original {
                continue;
            }
            let _ = writeln!(
                out,
                "{} \"{}\" → {} \"{}\"",
                self.style.typo_label,
                correction.original,
                self.style.correction_label,
                correction.suggestion
            );
            emitted += 1;
        }

        if emitted == 0 {
            out.push_str(&self.style.clean_line);
            out.push('\n');
        }

        let _ = write!(
            out,
            "{} {}\n{}",
            self.style.original_label, original, self.style.footer
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn correction(original: &str, suggestion: &str, distance: usize) -> Correction {
        Correction {
            original: original.to_string(),
            suggestion: suggestion.to_string(),
            distance,
        }
    }

    #[test]
    fn test_format_with_corrections() {
        let formatter = ReportFormatter::new(ReportStyle::french());
        let corrections = vec![correction("bonjou", "bonjour", 1)];

        let report = formatter.format("bonjou tout le monde", &corrections);

        assert!(report.starts_with("|| CORRECTEUR ORTHOGRAPHIQUE\n"));
        assert!(report.contains("FAUTE_DE_TAPE \"bonjou\" → CORRECTION \"bonjour\"\n"));
        assert!(!report.contains("Pas d'erreur"));
        assert!(report.contains("Texte original : bonjou tout le monde\n"));
        assert!(report.ends_with("||"));
    }

    #[test]
    fn test_format_without_corrections() {
        let formatter = ReportFormatter::new(ReportStyle::french());

        let report = formatter.format("bonjour merci", &[]);

        assert!(report.contains("✓ Pas d'erreur détectée !\n"));
        assert!(!report.contains("FAUTE_DE_TAPE"));
        assert!(report.contains("Texte original : bonjour merci\n"));
    }

    #[test]
    fn test_correction_lines_keep_token_order() {
        let formatter = ReportFormatter::new(ReportStyle::french());
        let corrections = vec![
            correction("bonjou", "bonjour", 1),
            correction("merc", "merci", 1),
        ];

        let report = formatter.format("bonjou merc", &corrections);

        let first = report.find("\"bonjou\"").unwrap();
        let second = report.find("\"merc\"").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_identical_suggestion_is_not_reported() {
        let formatter = ReportFormatter::new(ReportStyle::french());
        let corrections = vec![correction("bonjour", "bonjour", 0)];

        let report = formatter.format("bonjour", &corrections);

        assert!(!report.contains("FAUTE_DE_TAPE"));
        assert!(report.contains("✓ Pas d'erreur détectée !"));
    }

    #[test]
    fn test_english_style() {
        let formatter = ReportFormatter::new(ReportStyle::english());
        let corrections = vec![correction("helo", "hello", 1)];

        let report = formatter.format("helo world", &corrections);

        assert!(report.starts_with("|| SPELL CHECKER\n"));
        assert!(report.contains("TYPO \"helo\" → CORRECTION \"hello\"\n"));
        assert!(report.contains("Original text: helo world\n"));
    }
}
