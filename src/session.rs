//! Caller-owned conversation state.
//!
//! The spell checker itself is stateless; each call returns one report.
//! Callers that represent a user session own the growing transcript and
//! append each exchange to it through [`Conversation`]. Role presets are
//! plain data, swappable via JSON files rather than hardcoded in callers.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{OrthoError, Result};
use crate::spelling::checker::{CorrectionReport, SpellChecker};

/// A predefined system role for a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePreset {
    /// Display label.
    pub label: String,
    /// The system prompt text of the role.
    pub prompt: String,
}

/// The built-in role presets.
pub fn builtin_roles() -> Vec<RolePreset> {
    vec![
        RolePreset {
            label: "Assistant".to_string(),
            prompt: "You are a helpful assistant. You help the user to find the information \
                     they need.\nIf the user type a question, you answer it.\n"
                .to_string(),
        },
        RolePreset {
            label: "Traducteur Anglais-Français".to_string(),
            prompt: "You are an interpreter. You translate from English to French and from \
                     French to English.\nIf the user type a French text, you translate it into \
                     English.\nIf the user type an English text, you translate it into French.\n"
                .to_string(),
        },
        RolePreset {
            label: "Guide touristique".to_string(),
            prompt: "You are a travel guide. If the user type the name of a country or of a \
                     town,\nyou tell them what are the main places to visit.\n"
                .to_string(),
        },
    ]
}

/// Load role presets from a JSON file.
pub fn load_roles_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<RolePreset>> {
    let file = File::open(path)?;
    let roles = serde_json::from_reader(BufReader::new(file))?;
    Ok(roles)
}

/// One user session's accumulated exchange log.
///
/// Each successful [`submit`](Conversation::submit) appends a user/server
/// block to the transcript; a failed check leaves the transcript untouched.
/// The role can be chosen freely until the first exchange, then stays fixed
/// for the rest of the session.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    transcript: String,
    role: Option<String>,
    role_locked: bool,
}

impl Conversation {
    /// Create a new empty conversation.
    pub fn new() -> Self {
        Conversation::default()
    }

    /// Select the system role.
    ///
    /// Fails with [`OrthoError::InvalidOperation`] once the first exchange
    /// has happened.
    pub fn set_role<S: Into<String>>(&mut self, role: S) -> Result<()> {
        if self.role_locked {
            return Err(OrthoError::invalid_operation(
                "the role cannot change after the first exchange",
            ));
        }
        self.role = Some(role.into());
        Ok(())
    }

    /// Get the selected role, if any.
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    /// Check if the role can still be changed.
    pub fn can_change_role(&self) -> bool {
        !self.role_locked
    }

    /// Get the accumulated transcript.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Check if no exchange has happened yet.
    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }

    /// Run one exchange: check the question, append it and the resulting
    /// report to the transcript, and return the per-call report.
    ///
    /// On a failed check (blank or oversized input) the transcript is left
    /// untouched and the role stays changeable.
    pub fn submit(&mut self, checker: &SpellChecker, question: &str) -> Result<CorrectionReport> {
        let report = checker.check(question)?;

        self.transcript.push_str("== User:\n");
        self.transcript.push_str(question);
        self.transcript.push_str("\n== Serveur:\n");
        self.transcript.push_str(&report.text);
        self.transcript.push_str("\n\n");
        self.role_locked = true;

        Ok(report)
    }
}
