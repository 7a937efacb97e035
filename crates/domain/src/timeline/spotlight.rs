//! Spotlight navigator: one featured character at a time, era by era.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::partition::YugaPartition;
use crate::aggregates::Character;
use crate::error::DomainError;
use crate::types::Yuga;

/// Navigation position within a [`YugaPartition`].
///
/// Era navigation cycles through all five slots, empty ones included, and
/// always starts the new era at its first member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotlightState {
    era_index: usize,
    character_index: usize,
}

impl SpotlightState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn era_index(&self) -> usize {
        self.era_index
    }

    #[inline]
    pub fn character_index(&self) -> usize {
        self.character_index
    }

    pub fn era(&self) -> Yuga {
        Yuga::CANONICAL[self.era_index % Yuga::CANONICAL.len()]
    }

    pub fn next_era(self) -> Self {
        Self {
            era_index: (self.era_index + 1) % Yuga::CANONICAL.len(),
            character_index: 0,
        }
    }

    pub fn prev_era(self) -> Self {
        let n = Yuga::CANONICAL.len();
        Self {
            era_index: (self.era_index + n - 1) % n,
            character_index: 0,
        }
    }

    pub fn next_character(self, partition: &YugaPartition<'_>) -> Self {
        let count = partition.members(self.era()).len();
        if count <= 1 {
            return self;
        }
        Self {
            character_index: (self.character_index + 1) % count,
            ..self
        }
    }

    pub fn prev_character(self, partition: &YugaPartition<'_>) -> Self {
        let count = partition.members(self.era()).len();
        if count <= 1 {
            return self;
        }
        Self {
            character_index: (self.character_index + count - 1) % count,
            ..self
        }
    }

    /// Pull `character_index` back into range after the era's membership
    /// shrank.
    pub fn reclamp(self, partition: &YugaPartition<'_>) -> Self {
        let count = partition.members(self.era()).len();
        if self.character_index < count {
            return self;
        }
        Self {
            character_index: count.saturating_sub(1),
            ..self
        }
    }

    pub fn featured<'a>(&self, partition: &YugaPartition<'a>) -> Option<&'a Character> {
        partition
            .members(self.era())
            .get(self.character_index)
            .copied()
    }

    pub fn apply(self, action: SpotlightAction, partition: &YugaPartition<'_>) -> Self {
        match action {
            SpotlightAction::PrevEra => self.prev_era(),
            SpotlightAction::NextEra => self.next_era(),
            SpotlightAction::PrevCharacter => self.prev_character(partition),
            SpotlightAction::NextCharacter => self.next_character(partition),
        }
    }

    /// Snapshot of what the spotlight currently shows.
    pub fn view<'a>(&self, partition: &YugaPartition<'a>) -> SpotlightView<'a> {
        let state = self.reclamp(partition);
        SpotlightView {
            era: state.era(),
            era_index: state.era_index,
            character_index: state.character_index,
            member_count: partition.members(state.era()).len(),
            featured: state.featured(partition),
        }
    }
}

/// User-facing navigation commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpotlightAction {
    PrevEra,
    NextEra,
    PrevCharacter,
    NextCharacter,
}

impl SpotlightAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpotlightAction::PrevEra => "prev-era",
            SpotlightAction::NextEra => "next-era",
            SpotlightAction::PrevCharacter => "prev-character",
            SpotlightAction::NextCharacter => "next-character",
        }
    }
}

impl fmt::Display for SpotlightAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SpotlightAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "prev-era" => Ok(SpotlightAction::PrevEra),
            "next-era" => Ok(SpotlightAction::NextEra),
            "prev-character" => Ok(SpotlightAction::PrevCharacter),
            "next-character" => Ok(SpotlightAction::NextCharacter),
            _ => Err(DomainError::parse(format!("Unknown spotlight action: {}", s))),
        }
    }
}

/// Rendered spotlight position.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotlightView<'a> {
    pub era: Yuga,
    pub era_index: usize,
    pub character_index: usize,
    pub member_count: usize,
    pub featured: Option<&'a Character>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::CharacterId;
    use crate::types::CharacterType;
    use crate::value_objects::CharacterName;

    fn character(id: &str, yuga: Yuga) -> Character {
        Character::new(
            CharacterId::new(id).unwrap(),
            CharacterName::new("", id).unwrap(),
            CharacterType::Deva,
        )
        .with_yuga(yuga)
    }

    fn three_in_satya() -> Vec<Character> {
        vec![
            character("indra", Yuga::Satya),
            character("agni", Yuga::Satya),
            character("vayu", Yuga::Satya),
            character("rama", Yuga::Treta),
        ]
    }

    #[test]
    fn character_navigation_wraps_both_ways() {
        let all = three_in_satya();
        let partition = YugaPartition::new(&all);
        let start = SpotlightState::new();

        let after_three = start
            .next_character(&partition)
            .next_character(&partition)
            .next_character(&partition);
        assert_eq!(after_three.character_index(), 0);

        assert_eq!(start.prev_character(&partition).character_index(), 2);
    }

    #[test]
    fn era_change_resets_character_index() {
        let all = three_in_satya();
        let partition = YugaPartition::new(&all);
        let state = SpotlightState::new()
            .next_character(&partition)
            .next_character(&partition);
        assert_eq!(state.character_index(), 2);

        let next = state.next_era();
        assert_eq!(next.era(), Yuga::Treta);
        assert_eq!(next.character_index(), 0);

        let back = next.next_character(&partition).prev_era();
        assert_eq!(back.era(), Yuga::Satya);
        assert_eq!(back.character_index(), 0);
    }

    #[test]
    fn era_navigation_wraps_over_five_slots() {
        let state = SpotlightState::new().prev_era();
        assert_eq!(state.era(), Yuga::Timeless);
        assert_eq!(state.next_era().era(), Yuga::Satya);

        let mut state = SpotlightState::new();
        for _ in 0..5 {
            state = state.next_era();
        }
        assert_eq!(state, SpotlightState::new());
    }

    #[test]
    fn single_or_empty_era_ignores_character_navigation() {
        let all = three_in_satya();
        let partition = YugaPartition::new(&all);
        let treta = SpotlightState::new().next_era();
        assert_eq!(treta.next_character(&partition), treta);
        assert_eq!(treta.prev_character(&partition), treta);

        let dvapara = treta.next_era();
        assert_eq!(dvapara.next_character(&partition), dvapara);
        assert!(dvapara.featured(&partition).is_none());
    }

    #[test]
    fn reclamp_pulls_index_into_range() {
        let all = three_in_satya();
        let partition = YugaPartition::new(&all);
        let state = SpotlightState::new().prev_character(&partition);
        assert_eq!(state.character_index(), 2);

        let smaller = vec![character("indra", Yuga::Satya)];
        let shrunk = YugaPartition::new(&smaller);
        assert_eq!(state.reclamp(&shrunk).character_index(), 0);

        let empty = YugaPartition::new(&[]);
        assert_eq!(state.reclamp(&empty).character_index(), 0);
    }

    #[test]
    fn featured_follows_navigation() {
        let all = three_in_satya();
        let partition = YugaPartition::new(&all);
        let state = SpotlightState::new().next_character(&partition);
        assert_eq!(state.featured(&partition).map(|c| c.id().as_str()), Some("agni"));

        let view = state.view(&partition);
        assert_eq!(view.era, Yuga::Satya);
        assert_eq!(view.member_count, 3);
    }

    #[test]
    fn actions_parse_from_path_segments() {
        assert_eq!(
            "next-character".parse::<SpotlightAction>().unwrap(),
            SpotlightAction::NextCharacter
        );
        assert_eq!(
            "prev_era".parse::<SpotlightAction>().unwrap(),
            SpotlightAction::PrevEra
        );
        assert!("jump".parse::<SpotlightAction>().is_err());
    }

    #[test]
    fn apply_dispatches_actions() {
        let all = three_in_satya();
        let partition = YugaPartition::new(&all);
        let state = SpotlightState::new()
            .apply(SpotlightAction::NextCharacter, &partition)
            .apply(SpotlightAction::NextEra, &partition);
        assert_eq!(state.era(), Yuga::Treta);
        assert_eq!(state.character_index(), 0);
    }
}
