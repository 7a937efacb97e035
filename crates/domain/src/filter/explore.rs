//! Explore view state: search query, filters and the last seen `type`
//! parameter.

use serde::{Deserialize, Serialize};

use super::engine::filter_characters;
use super::facet::Facet;
use super::filters::Filters;
use crate::aggregates::Character;
use crate::types::CharacterType;

/// State owned by one explore session.
///
/// The `type` parameter comes from outside (a URL) and seeds the `type`
/// facet. Toggling facets inside the view never writes it back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploreState {
    query: String,
    filters: Filters,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    type_param: Option<String>,
}

impl ExploreState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state for a view opened with an optional `type` parameter.
    pub fn from_type_param(param: Option<&str>) -> Self {
        Self::new().synced(param)
    }

    #[inline]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[inline]
    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    #[inline]
    pub fn type_param(&self) -> Option<&str> {
        self.type_param.as_deref()
    }

    /// Follow an external `type` parameter, last writer wins.
    ///
    /// Only a change of the parameter to a known type has an effect: the
    /// filters are replaced by exactly that type and the query is cleared,
    /// unless the `type` facet already holds exactly that value. Unknown and
    /// absent parameters leave the state as it is.
    pub fn synced(self, param: Option<&str>) -> Self {
        let Some(raw) = param.map(str::trim).filter(|p| !p.is_empty()) else {
            return self;
        };
        if self.type_param.as_deref() == Some(raw) {
            return self;
        }
        let Some(character_type) = CharacterType::parse_known(raw) else {
            return self;
        };

        let type_param = Some(raw.to_string());
        if self.has_exactly_type(character_type) {
            return Self { type_param, ..self };
        }
        Self {
            query: String::new(),
            filters: Filters::with_type(character_type),
            type_param,
        }
    }

    pub fn sync_type_param(&mut self, param: Option<&str>) {
        *self = std::mem::take(self).synced(param);
    }

    fn has_exactly_type(&self, character_type: CharacterType) -> bool {
        let types = self.filters.selection(Facet::Type);
        types.len() == 1 && self.filters.is_selected(Facet::Type, character_type.label())
    }

    pub fn with_query(self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self
        }
    }

    pub fn with_filters(self, filters: Filters) -> Self {
        Self { filters, ..self }
    }

    pub fn with_toggle(self, facet: Facet, value: &str, is_selected: bool) -> Self {
        Self {
            filters: self.filters.toggled(facet, value, is_selected),
            ..self
        }
    }

    /// Clears every facet and the query. The `type` parameter is kept so the
    /// same URL does not re-seed the filters.
    pub fn reset(self) -> Self {
        Self {
            query: String::new(),
            filters: self.filters.reset(),
            ..self
        }
    }

    /// Selected facet values, plus one for a non-empty query.
    pub fn active_count(&self) -> usize {
        self.filters.active_count() + usize::from(!self.query.is_empty())
    }

    pub fn apply<'a>(&self, all: &'a [Character]) -> Vec<&'a Character> {
        filter_characters(all, &self.query, &self.filters)
    }
}
