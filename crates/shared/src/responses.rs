//! Response bodies for the engine HTTP API.
//!
//! Characters go over the wire as [`CharacterDto`], which adds the values a
//! card needs (type label, icon, normalized era) to the catalog fields.

use serde::{Deserialize, Serialize};

use deva_domain::{
    Character, EraGroup, ExploreState, Filters, SpotlightView, Yuga, YugaPartition,
};

// =============================================================================
// Characters
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterNameDto {
    pub native: String,
    pub english: String,
}

/// One character as rendered on a card or detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDto {
    pub id: String,
    pub name: CharacterNameDto,
    #[serde(rename = "type")]
    pub character_type: String,
    pub icon: String,
    pub significance: String,
    pub associated_texts: Vec<String>,
    /// Normalized era label ("All Yugas" when the catalog gave none)
    pub yuga: String,
    pub yuga_declared: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nature: Option<String>,
    pub roles: Vec<String>,
}

impl From<&Character> for CharacterDto {
    fn from(c: &Character) -> Self {
        Self {
            id: c.id().to_string(),
            name: CharacterNameDto {
                native: c.name().native().to_string(),
                english: c.name().english().to_string(),
            },
            character_type: c.character_type().label().to_string(),
            icon: c.character_type().icon().to_string(),
            significance: c.significance().to_string(),
            associated_texts: c.associated_texts().to_vec(),
            yuga: c.yuga().label().to_string(),
            yuga_declared: c.yuga_declared(),
            region: c.region().map(str::to_string),
            gender: c.gender().map(str::to_string),
            nature: c.nature().map(str::to_string),
            roles: c.roles().as_slice().to_vec(),
        }
    }
}

fn dtos<'a>(characters: impl IntoIterator<Item = &'a Character>) -> Vec<CharacterDto> {
    characters.into_iter().map(CharacterDto::from).collect()
}

// =============================================================================
// Explore
// =============================================================================

/// Filter state plus the characters it selects
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploreResponse {
    pub query: String,
    pub filters: Filters,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_param: Option<String>,
    pub active_count: usize,
    /// Size of the whole collection, for "N of M" labels
    pub total: usize,
    pub characters: Vec<CharacterDto>,
}

impl ExploreResponse {
    pub fn new(state: &ExploreState, matches: &[&Character], total: usize) -> Self {
        Self {
            query: state.query().to_string(),
            filters: state.filters().clone(),
            type_param: state.type_param().map(str::to_string),
            active_count: state.active_count(),
            total,
            characters: dtos(matches.iter().copied()),
        }
    }
}

// =============================================================================
// Timeline
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EraListingDto {
    pub era: Yuga,
    pub index: usize,
    pub characters: Vec<CharacterDto>,
}

impl From<&EraGroup<'_>> for EraListingDto {
    fn from(group: &EraGroup<'_>) -> Self {
        Self {
            era: group.era,
            index: group.era.index(),
            characters: dtos(group.members.iter().copied()),
        }
    }
}

/// Non-empty eras in canonical order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineResponse {
    pub total: usize,
    pub eras: Vec<EraListingDto>,
}

impl From<&YugaPartition<'_>> for TimelineResponse {
    fn from(partition: &YugaPartition<'_>) -> Self {
        Self {
            total: partition.total(),
            eras: partition.listing().map(EraListingDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotlightResponse {
    pub era: Yuga,
    pub era_index: usize,
    pub character_index: usize,
    pub member_count: usize,
    pub featured: Option<CharacterDto>,
}

impl From<SpotlightView<'_>> for SpotlightResponse {
    fn from(view: SpotlightView<'_>) -> Self {
        Self {
            era: view.era,
            era_index: view.era_index,
            character_index: view.character_index,
            member_count: view.member_count,
            featured: view.featured.map(CharacterDto::from),
        }
    }
}

// =============================================================================
// Related characters
// =============================================================================

/// A suggested name, with the catalog id when the name is in the archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedCharacterDto {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedResponse {
    pub character_id: String,
    pub suggestions: Vec<RelatedCharacterDto>,
}
