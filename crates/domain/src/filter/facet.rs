//! Facet names.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// One independently selectable filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Facet {
    Type,
    Yuga,
    TextSource,
    Region,
    Gender,
    Nature,
    Role,
}

impl Facet {
    pub const ALL: [Facet; 7] = [
        Facet::Type,
        Facet::Yuga,
        Facet::TextSource,
        Facet::Region,
        Facet::Gender,
        Facet::Nature,
        Facet::Role,
    ];

    /// Query-parameter / JSON key
    pub fn key(&self) -> &'static str {
        match self {
            Facet::Type => "type",
            Facet::Yuga => "yuga",
            Facet::TextSource => "textSource",
            Facet::Region => "region",
            Facet::Gender => "gender",
            Facet::Nature => "nature",
            Facet::Role => "role",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Facet::Type => "Type",
            Facet::Yuga => "Yuga",
            Facet::TextSource => "Text Source",
            Facet::Region => "Region",
            Facet::Gender => "Gender",
            Facet::Nature => "Nature",
            Facet::Role => "Role",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Facet {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['_', '-'], "").as_str() {
            "type" => Ok(Facet::Type),
            "yuga" | "era" => Ok(Facet::Yuga),
            "textsource" | "text" | "source" => Ok(Facet::TextSource),
            "region" => Ok(Facet::Region),
            "gender" => Ok(Facet::Gender),
            "nature" => Ok(Facet::Nature),
            "role" => Ok(Facet::Role),
            _ => Err(DomainError::parse(format!("Unknown facet: {}", s))),
        }
    }
}
