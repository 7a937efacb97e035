//! Explore use cases.
//!
//! Two ways to search the archive:
//! - `BrowseCharacters`: stateless lookups driven entirely by the request
//! - `ExploreSession`: the explore view, whose query and filters live in the
//!   session and are changed one step at a time

use std::sync::Arc;

use deva_domain::{CharacterId, ExploreState, Facet, FacetOptions, Filters, SessionId};
use deva_shared::{CharacterDto, ExploreResponse};

use crate::infrastructure::ports::CharacterSource;
use crate::stores::SessionStore;

/// Container for explore use cases.
pub struct ExploreUseCases {
    pub browse: Arc<BrowseCharacters>,
    pub session: Arc<ExploreSession>,
}

impl ExploreUseCases {
    pub fn new(browse: Arc<BrowseCharacters>, session: Arc<ExploreSession>) -> Self {
        Self { browse, session }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExploreError {
    #[error("Character not found: {0}")]
    CharacterNotFound(String),
}

// =============================================================================
// Stateless browsing
// =============================================================================

pub struct BrowseCharacters {
    characters: Arc<dyn CharacterSource>,
}

impl BrowseCharacters {
    pub fn new(characters: Arc<dyn CharacterSource>) -> Self {
        Self { characters }
    }

    /// Characters matching `query` and `filters`, in catalog order.
    pub fn search(&self, query: &str, filters: Filters) -> ExploreResponse {
        let catalog = self.characters.catalog();
        let state = ExploreState::new().with_query(query).with_filters(filters);
        let matches = state.apply(catalog.all());
        tracing::debug!(
            query = %state.query(),
            active = state.active_count(),
            matched = matches.len(),
            "Character search"
        );
        ExploreResponse::new(&state, &matches, catalog.len())
    }

    pub fn get(&self, id: &str) -> Result<CharacterDto, ExploreError> {
        let catalog = self.characters.catalog();
        CharacterId::new(id)
            .ok()
            .and_then(|id| catalog.get(&id).map(CharacterDto::from))
            .ok_or_else(|| ExploreError::CharacterNotFound(id.to_string()))
    }

    pub fn facets(&self) -> FacetOptions {
        self.characters.catalog().facet_options()
    }
}

// =============================================================================
// Session explore view
// =============================================================================

pub struct ExploreSession {
    characters: Arc<dyn CharacterSource>,
    sessions: Arc<SessionStore>,
}

impl ExploreSession {
    pub fn new(characters: Arc<dyn CharacterSource>, sessions: Arc<SessionStore>) -> Self {
        Self {
            characters,
            sessions,
        }
    }

    /// Current view, after following the `type` parameter if it changed.
    pub async fn current(&self, session: SessionId, type_param: Option<&str>) -> ExploreResponse {
        self.change(session, |explore| explore.synced(type_param))
            .await
    }

    pub async fn set_query(&self, session: SessionId, query: String) -> ExploreResponse {
        self.change(session, |explore| explore.with_query(query)).await
    }

    pub async fn toggle(
        &self,
        session: SessionId,
        facet: Facet,
        value: &str,
        selected: bool,
    ) -> ExploreResponse {
        self.change(session, |explore| explore.with_toggle(facet, value, selected))
            .await
    }

    /// Clear filters and query.
    pub async fn reset(&self, session: SessionId) -> ExploreResponse {
        self.change(session, ExploreState::reset).await
    }

    async fn change<F>(&self, session: SessionId, f: F) -> ExploreResponse
    where
        F: FnOnce(ExploreState) -> ExploreState,
    {
        let state = self
            .sessions
            .update(session, |mut s| {
                s.explore = f(s.explore);
                s
            })
            .await;

        let catalog = self.characters.catalog();
        let matches = state.explore.apply(catalog.all());
        ExploreResponse::new(&state.explore, &matches, catalog.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockCharacterSource;
    use deva_domain::{
        Character, CharacterCatalog, CharacterName, CharacterType, Roles, Yuga,
    };

    fn character(id: &str, name: &str, t: CharacterType) -> Character {
        Character::new(
            CharacterId::new(id).unwrap(),
            CharacterName::new("", name).unwrap(),
            t,
        )
    }

    fn source() -> Arc<dyn CharacterSource> {
        let catalog = Arc::new(
            CharacterCatalog::new(vec![
                character("indra", "Indra", CharacterType::Deva)
                    .with_yuga(Yuga::Satya)
                    .with_region("Svarga")
                    .with_roles(Roles::new(["King", "Warrior"])),
                character("ravana", "Ravana", CharacterType::Rakshasa)
                    .with_yuga(Yuga::Treta)
                    .with_region("Lanka")
                    .with_roles(Roles::single("King")),
                character("vasishtha", "Vasishtha", CharacterType::Rishi)
                    .with_yuga(Yuga::Treta),
            ])
            .unwrap(),
        );
        let mut source = MockCharacterSource::new();
        source
            .expect_catalog()
            .returning(move || Arc::clone(&catalog));
        Arc::new(source)
    }

    fn ids(response: &ExploreResponse) -> Vec<&str> {
        response.characters.iter().map(|c| c.id.as_str()).collect()
    }

    mod browse {
        use super::*;

        #[test]
        fn search_combines_query_and_filters() {
            let browse = BrowseCharacters::new(source());
            let filters = Filters::from_pairs([("role", "King")]);

            let response = browse.search("ra", filters);

            assert_eq!(ids(&response), ["indra", "ravana"]);
            assert_eq!(response.total, 3);
            assert_eq!(response.active_count, 2);
        }

        #[test]
        fn empty_search_returns_everything() {
            let browse = BrowseCharacters::new(source());
            let response = browse.search("", Filters::new());
            assert_eq!(response.characters.len(), 3);
            assert_eq!(response.active_count, 0);
        }

        #[test]
        fn get_unknown_or_malformed_id_is_not_found() {
            let browse = BrowseCharacters::new(source());
            assert_eq!(browse.get("ravana").unwrap().name.english, "Ravana");
            assert!(matches!(
                browse.get("kali"),
                Err(ExploreError::CharacterNotFound(_))
            ));
            assert!(browse.get("not an id").is_err());
        }

        #[test]
        fn facets_come_from_the_catalog() {
            let browse = BrowseCharacters::new(source());
            let facets = browse.facets();
            assert_eq!(facets.region, ["Svarga", "Lanka"]);
            assert_eq!(facets.yuga, [Yuga::Satya, Yuga::Treta]);
        }
    }

    mod session {
        use super::*;

        fn explore() -> ExploreSession {
            ExploreSession::new(source(), Arc::new(SessionStore::default()))
        }

        #[tokio::test]
        async fn type_param_seeds_filters_once() {
            let explore = explore();
            let session = SessionId::new();

            let first = explore.current(session, Some("Rishi")).await;
            assert_eq!(ids(&first), ["vasishtha"]);

            // Widening the filters inside the view survives a repeat visit
            // with the same parameter.
            explore.toggle(session, Facet::Type, "Deva", true).await;
            let again = explore.current(session, Some("Rishi")).await;
            assert_eq!(ids(&again), ["indra", "vasishtha"]);

            // A different parameter takes over.
            let changed = explore.current(session, Some("Rakshasa")).await;
            assert_eq!(ids(&changed), ["ravana"]);
            assert_eq!(changed.type_param.as_deref(), Some("Rakshasa"));
        }

        #[tokio::test]
        async fn query_and_toggles_accumulate_then_reset() {
            let explore = explore();
            let session = SessionId::new();

            explore.set_query(session, "v".into()).await;
            let narrowed = explore
                .toggle(session, Facet::Yuga, "Treta Yuga", true)
                .await;
            assert_eq!(ids(&narrowed), ["ravana", "vasishtha"]);
            assert_eq!(narrowed.active_count, 2);

            let reset = explore.reset(session).await;
            assert_eq!(reset.characters.len(), 3);
            assert_eq!(reset.query, "");
            assert_eq!(reset.active_count, 0);
        }

        #[tokio::test]
        async fn type_param_matching_selection_keeps_query_and_other_facets() {
            let explore = explore();
            let session = SessionId::new();

            explore.toggle(session, Facet::Type, "Rakshasa", true).await;
            explore.toggle(session, Facet::Region, "Lanka", true).await;
            explore.set_query(session, "ra".into()).await;

            let view = explore.current(session, Some("Rakshasa")).await;

            assert_eq!(view.query, "ra");
            assert_eq!(view.active_count, 3);
            assert_eq!(ids(&view), ["ravana"]);
        }

        #[tokio::test]
        async fn sessions_do_not_share_filters() {
            let explore = explore();
            let a = SessionId::new();
            let b = SessionId::new();

            explore.toggle(a, Facet::Region, "Lanka", true).await;

            assert_eq!(ids(&explore.current(a, None).await), ["ravana"]);
            assert_eq!(explore.current(b, None).await.characters.len(), 3);
        }
    }
}
