//! Per-session view state.
//!
//! Each `X-Session-Id` owns one [`SessionState`]. A session that has not
//! been seen for the idle period is forgotten and the next request starts
//! over from the defaults (empty filters, first era, mock profile).

use std::time::Duration;

use deva_domain::{ExploreState, SessionId, SpotlightState, UserProfile};

use crate::infrastructure::cache::SessionCache;

/// Default idle period before a session is dropped.
pub const DEFAULT_SESSION_IDLE: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub explore: ExploreState,
    pub spotlight: SpotlightState,
    pub profile: UserProfile,
}

/// Session state keyed by session id, with idle expiry.
pub struct SessionStore {
    sessions: SessionCache<SessionId, SessionState>,
}

impl SessionStore {
    pub fn new(idle: Duration) -> Self {
        Self {
            sessions: SessionCache::new(idle),
        }
    }

    /// Current state for `id`. An unknown session reads as the defaults
    /// without being stored.
    pub async fn get(&self, id: SessionId) -> SessionState {
        self.sessions.get(&id).await.unwrap_or_default()
    }

    /// Apply `f` to the session's state and return the result.
    pub async fn update<F>(&self, id: SessionId, f: F) -> SessionState
    where
        F: FnOnce(SessionState) -> SessionState,
    {
        self.sessions.update(id, SessionState::default, f).await
    }

    /// Like [`update`](Self::update), but leaves the state untouched when
    /// `f` fails.
    pub async fn try_update<F, E>(&self, id: SessionId, f: F) -> Result<SessionState, E>
    where
        F: FnOnce(SessionState) -> Result<SessionState, E>,
    {
        self.sessions.try_update(id, SessionState::default, f).await
    }

    /// Drop sessions that have been idle too long. Returns how many were removed.
    pub async fn cleanup_expired(&self) -> usize {
        self.sessions.cleanup_expired().await
    }

    /// Sessions held, including idle ones not yet cleaned up.
    pub async fn len(&self) -> usize {
        self.sessions.len().await
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_IDLE)
    }
}
