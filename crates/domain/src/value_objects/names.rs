//! Validated character name
//!
//! Every character carries two display strings: the name in its native
//! script (usually Devanagari) and an English transliteration. Both are
//! free-text search targets.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for either name
const MAX_NAME_LENGTH: usize = 200;

/// A validated character name (English non-empty, both <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CharacterNameWire", into = "CharacterNameWire")]
pub struct CharacterName {
    native: String,
    english: String,
}

impl CharacterName {
    /// Create a new validated character name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The English name is empty after trimming
    /// - Either name exceeds 200 characters after trimming
    pub fn new(native: impl Into<String>, english: impl Into<String>) -> Result<Self, DomainError> {
        let native = native.into();
        let english = english.into();
        let native = native.trim();
        let english = english.trim();

        if english.is_empty() {
            return Err(DomainError::validation("English name cannot be empty"));
        }
        if english.chars().count() > MAX_NAME_LENGTH || native.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Character name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }

        Ok(Self {
            native: native.to_string(),
            english: english.to_string(),
        })
    }

    /// Name in native script. May be empty when the catalog has none.
    pub fn native(&self) -> &str {
        &self.native
    }

    pub fn english(&self) -> &str {
        &self.english
    }

    /// Returns true if either name equals `candidate`, ignoring case.
    pub fn matches(&self, candidate: &str) -> bool {
        let candidate = candidate.trim().to_lowercase();
        self.english.to_lowercase() == candidate
            || (!self.native.is_empty() && self.native.to_lowercase() == candidate)
    }
}

impl fmt::Display for CharacterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.native.is_empty() {
            write!(f, "{}", self.english)
        } else {
            write!(f, "{} ({})", self.english, self.native)
        }
    }
}

#[derive(Serialize, Deserialize)]
struct CharacterNameWire {
    #[serde(default, alias = "sanskrit")]
    native: String,
    english: String,
}

impl TryFrom<CharacterNameWire> for CharacterName {
    type Error = DomainError;

    fn try_from(wire: CharacterNameWire) -> Result<Self, Self::Error> {
        Self::new(wire.native, wire.english)
    }
}

impl From<CharacterName> for CharacterNameWire {
    fn from(name: CharacterName) -> Self {
        Self {
            native: name.native,
            english: name.english,
        }
    }
}
