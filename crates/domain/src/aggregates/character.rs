//! Character aggregate - one entry in the archive
//!
//! Characters are loaded once from the catalog and never mutated at runtime.
//! Loading normalizes the two fields whose shape varies in the source data:
//!
//! - `yuga`: absent becomes [`Yuga::Timeless`] with [`YugaSource::Inferred`]
//! - `role`: a single string or an array becomes [`Roles`]
//!
//! so nothing downstream has to branch on missing or heterogeneous values.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ids::CharacterId;
use crate::types::{CharacterType, Yuga, YugaSource};
use crate::value_objects::{CharacterName, Roles};

/// A character in the archive
///
/// # Invariants
///
/// - `id` is a non-empty slug (enforced by `CharacterId`)
/// - `name.english` is non-empty (enforced by `CharacterName`)
/// - `yuga` is always one of the five canonical tags
/// - optional tags (`region`, `gender`, `nature`) are never blank strings
///
/// # Example
///
/// ```
/// use deva_domain::{Character, CharacterId, CharacterName, CharacterType, Yuga};
///
/// let indra = Character::new(
///     CharacterId::new("indra").unwrap(),
///     CharacterName::new("इन्द्र", "Indra").unwrap(),
///     CharacterType::Deva,
/// )
/// .with_yuga(Yuga::Satya);
///
/// assert_eq!(indra.name().english(), "Indra");
/// assert!(indra.yuga_declared());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    // Identity
    id: CharacterId,
    name: CharacterName,
    character_type: CharacterType,

    // Description
    significance: String,
    associated_texts: Vec<String>,

    // Chronology
    yuga: Yuga,
    yuga_source: YugaSource,

    // Facet tags
    region: Option<String>,
    gender: Option<String>,
    nature: Option<String>,
    roles: Roles,
}

impl Character {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a character with no era information (timeless, inferred) and
    /// no optional tags.
    pub fn new(id: CharacterId, name: CharacterName, character_type: CharacterType) -> Self {
        Self {
            id,
            name,
            character_type,
            significance: String::new(),
            associated_texts: Vec::new(),
            yuga: Yuga::Timeless,
            yuga_source: YugaSource::Inferred,
            region: None,
            gender: None,
            nature: None,
            roles: Roles::default(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> &CharacterId {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &CharacterName {
        &self.name
    }

    #[inline]
    pub fn character_type(&self) -> CharacterType {
        self.character_type
    }

    #[inline]
    pub fn significance(&self) -> &str {
        &self.significance
    }

    #[inline]
    pub fn associated_texts(&self) -> &[String] {
        &self.associated_texts
    }

    /// Normalized era. Timeless when the catalog gave none.
    #[inline]
    pub fn yuga(&self) -> Yuga {
        self.yuga
    }

    #[inline]
    pub fn yuga_source(&self) -> YugaSource {
        self.yuga_source
    }

    /// The era as written in the catalog, `None` if it was absent.
    #[inline]
    pub fn declared_yuga(&self) -> Option<Yuga> {
        match self.yuga_source {
            YugaSource::Declared => Some(self.yuga),
            YugaSource::Inferred => None,
        }
    }

    #[inline]
    pub fn yuga_declared(&self) -> bool {
        self.yuga_source == YugaSource::Declared
    }

    #[inline]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    #[inline]
    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref()
    }

    #[inline]
    pub fn nature(&self) -> Option<&str> {
        self.nature.as_deref()
    }

    #[inline]
    pub fn roles(&self) -> &Roles {
        &self.roles
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    pub fn with_significance(mut self, significance: impl Into<String>) -> Self {
        self.significance = significance.into().trim().to_string();
        self
    }

    pub fn with_associated_texts<I, S>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.associated_texts = texts
            .into_iter()
            .map(Into::into)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        self
    }

    /// Set a declared era (including an explicit "All Yugas").
    pub fn with_yuga(mut self, yuga: Yuga) -> Self {
        self.yuga = yuga;
        self.yuga_source = YugaSource::Declared;
        self
    }

    /// Set or clear the era; `None` normalizes to timeless/inferred.
    pub fn with_optional_yuga(self, yuga: Option<Yuga>) -> Self {
        match yuga {
            Some(yuga) => self.with_yuga(yuga),
            None => Self {
                yuga: Yuga::Timeless,
                yuga_source: YugaSource::Inferred,
                ..self
            },
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = non_blank(Some(region.into()));
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = non_blank(Some(gender.into()));
        self
    }

    pub fn with_nature(mut self, nature: impl Into<String>) -> Self {
        self.nature = non_blank(Some(nature.into()));
        self
    }

    pub fn with_roles(mut self, roles: Roles) -> Self {
        self.roles = roles;
        self
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// =============================================================================
// Serde: catalog wire format
// =============================================================================

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CharacterWire {
    id: CharacterId,
    name: CharacterName,
    #[serde(rename = "type")]
    character_type: CharacterType,
    #[serde(default)]
    significance: String,
    #[serde(default)]
    associated_texts: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    yuga: Option<Yuga>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    nature: Option<String>,
    #[serde(default, skip_serializing_if = "Roles::is_empty")]
    role: Roles,
}

impl Serialize for Character {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        CharacterWire {
            id: self.id.clone(),
            name: self.name.clone(),
            character_type: self.character_type,
            significance: self.significance.clone(),
            associated_texts: Some(self.associated_texts.clone()),
            yuga: self.declared_yuga(),
            region: self.region.clone(),
            gender: self.gender.clone(),
            nature: self.nature.clone(),
            role: self.roles.clone(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Character {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = CharacterWire::deserialize(deserializer)?;

        let mut character = Character::new(wire.id, wire.name, wire.character_type)
            .with_significance(wire.significance)
            .with_associated_texts(wire.associated_texts.unwrap_or_default())
            .with_optional_yuga(wire.yuga)
            .with_roles(wire.role);
        if let Some(region) = wire.region {
            character = character.with_region(region);
        }
        if let Some(gender) = wire.gender {
            character = character.with_gender(gender);
        }
        if let Some(nature) = wire.nature {
            character = character.with_nature(nature);
        }

        Ok(character)
    }
}
