//! Vocabulary management for spelling correction.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashSet;

use crate::error::Result;

/// The fixed reference set of correctly spelled words and phrases.
///
/// Entries are case-normalized on insertion and kept in insertion order.
/// The suggestion selector resolves distance ties in favor of the earliest
/// entry, so the order is part of the observable behavior. Duplicates are
/// accepted; they are harmless but wasteful.
///
/// A vocabulary is built once and never mutated while suggestions run, so
/// sharing one instance across threads needs no locking.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Entries in insertion order.
    entries: Vec<String>,
    /// Membership index for exact lookups.
    index: AHashSet<String>,
}

impl Vocabulary {
    /// Create a new empty vocabulary.
    pub fn new() -> Self {
        Vocabulary {
            entries: Vec::new(),
            index: AHashSet::new(),
        }
    }

    /// Build a vocabulary from an ordered list of entries.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocabulary = Vocabulary::new();
        for entry in entries {
            vocabulary.add_entry(entry.as_ref());
        }
        vocabulary
    }

    /// Append an entry, normalizing its case.
    pub fn add_entry(&mut self, entry: &str) {
        let normalized = entry.to_lowercase();
        self.index.insert(normalized.clone());
        self.entries.push(normalized);
    }

    /// Check if a word is an entry (case-insensitive).
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.to_lowercase())
    }

    /// Get the entries in insertion order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Iterate over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Get the number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a vocabulary from a text file with one entry per line.
    ///
    /// Entries may contain internal whitespace (multi-word phrases); blank
    /// lines are skipped. Line order becomes insertion order.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut vocabulary = Vocabulary::new();
        for line in reader.lines() {
            let line = line?;
            let entry = line.trim();
            if !entry.is_empty() {
                vocabulary.add_entry(entry);
            }
        }

        Ok(vocabulary)
    }
}

/// Built-in reference vocabularies.
pub struct BuiltinVocabulary;

impl BuiltinVocabulary {
    /// The default French conversational vocabulary.
    pub fn french() -> Vocabulary {
        Vocabulary::from_entries([
            "bonjour",
            "bonsoir",
            "comment",
            "excusez",
            "merci",
            "please",
            "hello",
            "salut",
            "revoir",
            "comment allez vous",
            "pouvez",
            "pouvez vous",
            "merci beaucoup",
            "s'il vous plaît",
            "s'il te plaît",
            "oui",
            "non",
            "peut être",
            "cela",
            "ceci",
        ])
    }

    /// A small English vocabulary for tests.
    pub fn minimal() -> Vocabulary {
        Vocabulary::from_entries([
            "hello",
            "world",
            "spell",
            "correct",
            "suggestion",
            "dictionary",
            "word",
            "text",
        ])
    }
}
