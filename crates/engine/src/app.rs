//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{CharacterSource, LlmPort, SettingsRepo};
use crate::stores::SessionStore;
use crate::use_cases;

/// Main application state.
///
/// Holds all use cases and the shared session store.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
    pub sessions: Arc<SessionStore>,
    pub characters: Arc<dyn CharacterSource>,
}

/// Container for all use cases.
pub struct UseCases {
    pub explore: use_cases::ExploreUseCases,
    pub timeline: Arc<use_cases::TimelineUseCases>,
    pub related: Arc<use_cases::SuggestRelated>,
    pub settings: Arc<use_cases::SettingsOps>,
    pub profile: Arc<use_cases::ProfileOps>,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        characters: Arc<dyn CharacterSource>,
        llm: Arc<dyn LlmPort>,
        settings_repo: Arc<dyn SettingsRepo>,
        sessions: Arc<SessionStore>,
    ) -> Self {
        let explore = use_cases::ExploreUseCases::new(
            Arc::new(use_cases::BrowseCharacters::new(characters.clone())),
            Arc::new(use_cases::ExploreSession::new(
                characters.clone(),
                sessions.clone(),
            )),
        );
        let timeline = Arc::new(use_cases::TimelineUseCases::new(
            characters.clone(),
            sessions.clone(),
        ));
        let related = Arc::new(use_cases::SuggestRelated::new(llm, characters.clone()));
        let settings = Arc::new(use_cases::SettingsOps::new(settings_repo));
        let profile = Arc::new(use_cases::ProfileOps::new(
            characters.clone(),
            sessions.clone(),
        ));

        Self {
            use_cases: UseCases {
                explore,
                timeline,
                related,
                settings,
                profile,
            },
            sessions,
            characters,
        }
    }
}
