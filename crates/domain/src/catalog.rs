//! The character catalog: validated, id-indexed, immutable after load.

use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::aggregates::Character;
use crate::error::DomainError;
use crate::ids::CharacterId;
use crate::types::{CharacterType, Yuga};

/// All characters known to the archive, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct CharacterCatalog {
    characters: Vec<Character>,
    by_id: HashMap<CharacterId, usize>,
}

impl CharacterCatalog {
    /// Build a catalog.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Duplicate` if two characters share an id.
    pub fn new(characters: Vec<Character>) -> Result<Self, DomainError> {
        let mut by_id = HashMap::with_capacity(characters.len());
        for (index, character) in characters.iter().enumerate() {
            if by_id.insert(character.id().clone(), index).is_some() {
                return Err(DomainError::duplicate("Character", character.id().as_str()));
            }
        }
        Ok(Self { characters, by_id })
    }

    #[inline]
    pub fn all(&self) -> &[Character] {
        &self.characters
    }

    pub fn get(&self, id: &CharacterId) -> Option<&Character> {
        self.by_id.get(id).map(|&i| &self.characters[i])
    }

    /// First character whose English or native name equals `name`, ignoring
    /// case.
    pub fn find_by_name(&self, name: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.name().matches(name))
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn facet_options(&self) -> FacetOptions {
        FacetOptions::collect(&self.characters)
    }
}

/// Selectable values per facet, as found in the catalog.
///
/// Types and yugas follow their canonical order; every other facet lists
/// distinct values in first-seen order (case-insensitive distinctness).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetOptions {
    #[serde(rename = "type")]
    pub types: Vec<CharacterType>,
    pub yuga: Vec<Yuga>,
    pub text_source: Vec<String>,
    pub region: Vec<String>,
    pub gender: Vec<String>,
    pub nature: Vec<String>,
    pub role: Vec<String>,
}

impl FacetOptions {
    pub fn collect(all: &[Character]) -> Self {
        let present_types: HashSet<CharacterType> =
            all.iter().map(Character::character_type).collect();
        let mut types: Vec<CharacterType> = CharacterType::all()
            .iter()
            .copied()
            .filter(|t| present_types.contains(t))
            .collect();
        if present_types.contains(&CharacterType::Unknown) {
            types.push(CharacterType::Unknown);
        }

        // Only declared eras can be selected.
        let declared: HashSet<Yuga> = all.iter().filter_map(Character::declared_yuga).collect();
        let yuga = Yuga::CANONICAL
            .into_iter()
            .filter(|y| declared.contains(y))
            .collect();

        Self {
            types,
            yuga,
            text_source: distinct(all.iter().flat_map(|c| c.associated_texts().iter())),
            region: distinct(all.iter().filter_map(Character::region)),
            gender: distinct(all.iter().filter_map(Character::gender)),
            nature: distinct(all.iter().filter_map(Character::nature)),
            role: distinct(all.iter().flat_map(|c| c.roles().iter())),
        }
    }
}

fn distinct<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(v.as_ref().to_lowercase()))
        .map(|v| v.as_ref().to_string())
        .collect()
}
