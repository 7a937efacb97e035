//! Partition of the collection by era.

use serde::Serialize;

use crate::aggregates::Character;
use crate::types::Yuga;

/// One era and the characters placed in it.
#[derive(Debug, Clone, Serialize)]
pub struct EraGroup<'a> {
    pub era: Yuga,
    pub members: Vec<&'a Character>,
}

impl EraGroup<'_> {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// The collection split into the five canonical eras.
///
/// Every character lands in exactly one group, decided by its normalized
/// era, so a character with no era is in the "All Yugas" group. Members keep
/// collection order.
#[derive(Debug, Clone)]
pub struct YugaPartition<'a> {
    groups: [EraGroup<'a>; 5],
}

impl<'a> YugaPartition<'a> {
    pub fn new(all: &'a [Character]) -> Self {
        let mut groups = Yuga::CANONICAL.map(|era| EraGroup {
            era,
            members: Vec::new(),
        });
        for character in all {
            groups[character.yuga().index()].members.push(character);
        }
        Self { groups }
    }

    /// All five groups in canonical order, empty ones included.
    pub fn groups(&self) -> &[EraGroup<'a>] {
        &self.groups
    }

    pub fn members(&self, era: Yuga) -> &[&'a Character] {
        &self.groups[era.index()].members
    }

    /// Groups to render: canonical order, empty eras omitted. The timeless
    /// group is last when present.
    pub fn listing(&self) -> impl Iterator<Item = &EraGroup<'a>> {
        self.groups.iter().filter(|g| !g.is_empty())
    }

    pub fn total(&self) -> usize {
        self.groups.iter().map(EraGroup::len).sum()
    }
}
