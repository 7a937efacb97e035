//! Filter state: the selected values of every facet.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::facet::Facet;
use crate::types::CharacterType;

/// Selected values per facet.
///
/// An empty set means the facet is inactive. Values keep the case they were
/// selected with; matching is case-insensitive, and a value that differs
/// from an existing selection only by case is treated as already selected.
///
/// All operations return a new `Filters` and leave `self` untouched, so a
/// caller can compare before/after states directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    #[serde(default, rename = "type")]
    types: BTreeSet<String>,
    #[serde(default)]
    yuga: BTreeSet<String>,
    #[serde(default)]
    text_source: BTreeSet<String>,
    #[serde(default)]
    region: BTreeSet<String>,
    #[serde(default)]
    gender: BTreeSet<String>,
    #[serde(default)]
    nature: BTreeSet<String>,
    #[serde(default)]
    role: BTreeSet<String>,
}

impl Filters {
    /// All facets empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the `type` facet set, to exactly `character_type`.
    pub fn with_type(character_type: CharacterType) -> Self {
        Self::new().toggled(Facet::Type, character_type.label(), true)
    }

    /// Build filters from `(facet key, value)` pairs such as URL query
    /// parameters. Each pair selects one value verbatim; repeat a key to
    /// select several. Unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        pairs
            .into_iter()
            .fold(Self::new(), |filters, (key, value)| match key.as_ref().parse::<Facet>() {
                Ok(facet) => filters.toggled(facet, value.as_ref(), true),
                Err(_) => filters,
            })
    }

    pub fn selection(&self, facet: Facet) -> &BTreeSet<String> {
        match facet {
            Facet::Type => &self.types,
            Facet::Yuga => &self.yuga,
            Facet::TextSource => &self.text_source,
            Facet::Region => &self.region,
            Facet::Gender => &self.gender,
            Facet::Nature => &self.nature,
            Facet::Role => &self.role,
        }
    }

    fn selection_mut(&mut self, facet: Facet) -> &mut BTreeSet<String> {
        match facet {
            Facet::Type => &mut self.types,
            Facet::Yuga => &mut self.yuga,
            Facet::TextSource => &mut self.text_source,
            Facet::Region => &mut self.region,
            Facet::Gender => &mut self.gender,
            Facet::Nature => &mut self.nature,
            Facet::Role => &mut self.role,
        }
    }

    /// Returns true if `value` is selected in `facet`, ignoring case.
    pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
        let value = value.trim().to_lowercase();
        self.selection(facet)
            .iter()
            .any(|v| v.to_lowercase() == value)
    }

    /// Add (`is_selected == true`) or remove one value from one facet.
    ///
    /// Adding a value that is already selected and removing one that is not
    /// are both no-ops. Blank values are ignored.
    pub fn toggled(&self, facet: Facet, value: &str, is_selected: bool) -> Self {
        let value = value.trim();
        let mut next = self.clone();
        if value.is_empty() {
            return next;
        }

        let lowered = value.to_lowercase();
        let set = next.selection_mut(facet);
        if is_selected {
            if !set.iter().any(|v| v.to_lowercase() == lowered) {
                set.insert(value.to_string());
            }
        } else {
            set.retain(|v| v.to_lowercase() != lowered);
        }
        next
    }

    /// Every facet empty. Clearing a search query is up to the caller.
    pub fn reset(&self) -> Self {
        Self::new()
    }

    pub fn is_empty(&self) -> bool {
        Facet::ALL.iter().all(|f| self.selection(*f).is_empty())
    }

    /// Total number of selected values across all facets
    pub fn active_count(&self) -> usize {
        Facet::ALL.iter().map(|f| self.selection(*f).len()).sum()
    }
}
