//! Timeline use cases: the era listing and the per-session spotlight.

use std::sync::Arc;

use deva_domain::{SessionId, SpotlightAction, YugaPartition};
use deva_shared::{SpotlightResponse, TimelineResponse};

use crate::infrastructure::ports::CharacterSource;
use crate::stores::SessionStore;

pub struct TimelineUseCases {
    characters: Arc<dyn CharacterSource>,
    sessions: Arc<SessionStore>,
}

impl TimelineUseCases {
    pub fn new(characters: Arc<dyn CharacterSource>, sessions: Arc<SessionStore>) -> Self {
        Self {
            characters,
            sessions,
        }
    }

    /// Every character grouped by era, empty eras omitted.
    pub fn listing(&self) -> TimelineResponse {
        let catalog = self.characters.catalog();
        TimelineResponse::from(&YugaPartition::new(catalog.all()))
    }

    /// The session's spotlight, clamped to the current partition.
    pub async fn spotlight(&self, session: SessionId) -> SpotlightResponse {
        let catalog = self.characters.catalog();
        let partition = YugaPartition::new(catalog.all());
        let state = self
            .sessions
            .update(session, |mut s| {
                s.spotlight = s.spotlight.reclamp(&partition);
                s
            })
            .await;
        SpotlightResponse::from(state.spotlight.view(&partition))
    }

    pub async fn navigate(&self, session: SessionId, action: SpotlightAction) -> SpotlightResponse {
        let catalog = self.characters.catalog();
        let partition = YugaPartition::new(catalog.all());
        let state = self
            .sessions
            .update(session, |mut s| {
                s.spotlight = s.spotlight.apply(action, &partition);
                s
            })
            .await;
        tracing::debug!(
            session = %session,
            action = %action,
            era = %state.spotlight.era(),
            index = state.spotlight.character_index(),
            "Spotlight moved"
        );
        SpotlightResponse::from(state.spotlight.view(&partition))
    }
}
