//! The four cosmic eras plus the timeless marker.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A cosmic era ("Yuga") placing a character in mythological chronology.
///
/// `Timeless` is the "All Yugas" marker. Characters with no era at all are
/// normalized to `Timeless` when loaded (see [`YugaSource`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Yuga {
    Satya,
    Treta,
    Dvapara,
    Kali,
    Timeless,
}

impl Yuga {
    /// Canonical chronological order, timeless last.
    pub const CANONICAL: [Yuga; 5] = [
        Yuga::Satya,
        Yuga::Treta,
        Yuga::Dvapara,
        Yuga::Kali,
        Yuga::Timeless,
    ];

    /// Display label, also the wire value
    pub fn label(&self) -> &'static str {
        match self {
            Yuga::Satya => "Satya Yuga",
            Yuga::Treta => "Treta Yuga",
            Yuga::Dvapara => "Dvapara Yuga",
            Yuga::Kali => "Kali Yuga",
            Yuga::Timeless => "All Yugas",
        }
    }

    /// Position in [`Yuga::CANONICAL`]
    pub fn index(&self) -> usize {
        match self {
            Yuga::Satya => 0,
            Yuga::Treta => 1,
            Yuga::Dvapara => 2,
            Yuga::Kali => 3,
            Yuga::Timeless => 4,
        }
    }
}

impl fmt::Display for Yuga {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Yuga {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let key = lower.strip_suffix(" yuga").unwrap_or(&lower);
        match key {
            "satya" | "krita" | "krta" => Ok(Yuga::Satya),
            "treta" => Ok(Yuga::Treta),
            "dvapara" | "dwapara" => Ok(Yuga::Dvapara),
            "kali" => Ok(Yuga::Kali),
            "all yugas" | "all" | "timeless" => Ok(Yuga::Timeless),
            _ => Err(DomainError::parse(format!("Unknown yuga: {}", s))),
        }
    }
}

impl TryFrom<String> for Yuga {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Yuga> for String {
    fn from(y: Yuga) -> String {
        y.label().to_string()
    }
}

/// Whether a character's era came from the catalog or was filled in because
/// the catalog had none.
///
/// The timeline treats both the same; the `yuga` facet only matches
/// `Declared` eras.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YugaSource {
    #[default]
    Declared,
    Inferred,
}
