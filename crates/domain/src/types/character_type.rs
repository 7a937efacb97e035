//! Character classification used by the `type` facet.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a character in the archive.
///
/// Serialized as its display label (`"Celestial Being"`). Labels that do not
/// match a known category load as [`CharacterType::Unknown`] so that a catalog
/// written by a newer editor never fails to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CharacterType {
    // Divine
    Trimurti,
    Tridevi,
    Deva,
    Devi,
    Avatar,
    Demigod,
    CelestialBeing,
    DivineAnimal,
    // Adversaries
    Asura,
    Daitya,
    Danava,
    Rakshasa,
    // Semi-divine races
    Naga,
    Gandharva,
    Apsara,
    Yaksha,
    Kinnara,
    Vanara,
    // Sages
    Rishi,
    Maharishi,
    Brahmarishi,
    Rajarishi,
    Saptarishi,
    // Mortals
    King,
    Queen,
    Warrior,
    Hero,
    Mortal,
    /// Unknown category (for forward compatibility)
    Unknown,
}

impl CharacterType {
    /// All known categories in display order (excludes Unknown)
    pub fn all() -> &'static [CharacterType] {
        &[
            CharacterType::Trimurti,
            CharacterType::Tridevi,
            CharacterType::Deva,
            CharacterType::Devi,
            CharacterType::Avatar,
            CharacterType::Demigod,
            CharacterType::CelestialBeing,
            CharacterType::DivineAnimal,
            CharacterType::Asura,
            CharacterType::Daitya,
            CharacterType::Danava,
            CharacterType::Rakshasa,
            CharacterType::Naga,
            CharacterType::Gandharva,
            CharacterType::Apsara,
            CharacterType::Yaksha,
            CharacterType::Kinnara,
            CharacterType::Vanara,
            CharacterType::Rishi,
            CharacterType::Maharishi,
            CharacterType::Brahmarishi,
            CharacterType::Rajarishi,
            CharacterType::Saptarishi,
            CharacterType::King,
            CharacterType::Queen,
            CharacterType::Warrior,
            CharacterType::Hero,
            CharacterType::Mortal,
        ]
    }

    /// Display label, also the wire value
    pub fn label(&self) -> &'static str {
        match self {
            CharacterType::Trimurti => "Trimurti",
            CharacterType::Tridevi => "Tridevi",
            CharacterType::Deva => "Deva",
            CharacterType::Devi => "Devi",
            CharacterType::Avatar => "Avatar",
            CharacterType::Demigod => "Demigod",
            CharacterType::CelestialBeing => "Celestial Being",
            CharacterType::DivineAnimal => "Divine Animal",
            CharacterType::Asura => "Asura",
            CharacterType::Daitya => "Daitya",
            CharacterType::Danava => "Danava",
            CharacterType::Rakshasa => "Rakshasa",
            CharacterType::Naga => "Naga",
            CharacterType::Gandharva => "Gandharva",
            CharacterType::Apsara => "Apsara",
            CharacterType::Yaksha => "Yaksha",
            CharacterType::Kinnara => "Kinnara",
            CharacterType::Vanara => "Vanara",
            CharacterType::Rishi => "Rishi",
            CharacterType::Maharishi => "Maharishi",
            CharacterType::Brahmarishi => "Brahmarishi",
            CharacterType::Rajarishi => "Rajarishi",
            CharacterType::Saptarishi => "Saptarishi",
            CharacterType::King => "King",
            CharacterType::Queen => "Queen",
            CharacterType::Warrior => "Warrior",
            CharacterType::Hero => "Hero",
            CharacterType::Mortal => "Mortal",
            CharacterType::Unknown => "Unknown",
        }
    }

    /// Icon name for card badges. Categories without a dedicated icon share
    /// the default.
    pub fn icon(&self) -> &'static str {
        match self {
            CharacterType::Trimurti | CharacterType::Tridevi => "sun",
            CharacterType::Deva | CharacterType::Devi => "sparkles",
            CharacterType::Avatar => "flame",
            CharacterType::Asura
            | CharacterType::Daitya
            | CharacterType::Danava
            | CharacterType::Rakshasa => "skull",
            CharacterType::Naga => "waves",
            CharacterType::Gandharva | CharacterType::Apsara | CharacterType::Kinnara => "music",
            CharacterType::Vanara | CharacterType::DivineAnimal => "paw-print",
            CharacterType::Rishi
            | CharacterType::Maharishi
            | CharacterType::Brahmarishi
            | CharacterType::Rajarishi
            | CharacterType::Saptarishi => "book-open",
            CharacterType::King | CharacterType::Queen => "crown",
            CharacterType::Warrior | CharacterType::Hero => "swords",
            _ => Self::DEFAULT_ICON,
        }
    }

    pub const DEFAULT_ICON: &'static str = "user";

    /// Parse a known category, case-insensitively. Returns `None` for anything
    /// else, including the literal `"Unknown"`.
    pub fn parse_known(s: &str) -> Option<Self> {
        let needle = normalize_label(s);
        Self::all()
            .iter()
            .copied()
            .find(|t| normalize_label(t.label()) == needle)
    }
}

fn normalize_label(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Display for CharacterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for CharacterType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_known(s).unwrap_or(CharacterType::Unknown))
    }
}

impl From<String> for CharacterType {
    fn from(s: String) -> Self {
        Self::parse_known(&s).unwrap_or(CharacterType::Unknown)
    }
}

impl From<CharacterType> for String {
    fn from(t: CharacterType) -> String {
        t.label().to_string()
    }
}
