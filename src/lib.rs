//! # Ortho
//!
//! A dictionary-backed typo detection and correction suggestion library
//! for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Whitespace tokenization with locale-stable case folding
//! - Unit-cost Levenshtein distance engine
//! - Closest-entry suggestion selection with a configurable threshold
//! - Localizable correction reports
//! - Caller-owned conversation transcripts and role presets
//!
//! ## Example
//!
//! ```
//! use ortho::spelling::SpellChecker;
//!
//! let checker = SpellChecker::new();
//! let report = checker.check("Bonjou, comment alez vous").unwrap();
//! assert!(report.has_corrections());
//! assert_eq!(report.corrections[0].suggestion, "bonjour");
//! ```

pub mod analysis;
pub mod error;
pub mod session;
pub mod spelling;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
