//! Mock user profile use cases.
//!
//! The profile lives in the session: edits last as long as the session does.

use std::sync::Arc;

use deva_domain::{CharacterId, DomainError, ProfileDetails, SessionId, UserProfile};

use crate::infrastructure::ports::CharacterSource;
use crate::stores::SessionStore;

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Character not found: {0}")]
    CharacterNotFound(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub struct ProfileOps {
    characters: Arc<dyn CharacterSource>,
    sessions: Arc<SessionStore>,
}

impl ProfileOps {
    pub fn new(characters: Arc<dyn CharacterSource>, sessions: Arc<SessionStore>) -> Self {
        Self {
            characters,
            sessions,
        }
    }

    pub async fn get(&self, session: SessionId) -> UserProfile {
        self.sessions.get(session).await.profile
    }

    /// Update name, email and bio. Nothing changes if any field is invalid.
    pub async fn update(
        &self,
        session: SessionId,
        details: ProfileDetails,
    ) -> Result<UserProfile, ProfileError> {
        let state = self
            .sessions
            .try_update(session, |mut s| {
                s.profile = s.profile.with_details(details)?;
                Ok::<_, DomainError>(s)
            })
            .await?;
        Ok(state.profile)
    }

    /// Add or remove a favorite. Only catalog characters can be favorites.
    pub async fn toggle_favorite(
        &self,
        session: SessionId,
        id: &str,
    ) -> Result<UserProfile, ProfileError> {
        let id = self.resolve(id)?;
        let state = self
            .sessions
            .update(session, |mut s| {
                s.profile = s.profile.with_favorite_toggled(id);
                s
            })
            .await;
        Ok(state.profile)
    }

    pub async fn record_view(&self, session: SessionId, id: CharacterId) -> UserProfile {
        self.sessions
            .update(session, |mut s| {
                s.profile = s.profile.with_viewed(id);
                s
            })
            .await
            .profile
    }

    fn resolve(&self, id: &str) -> Result<CharacterId, ProfileError> {
        let catalog = self.characters.catalog();
        CharacterId::new(id)
            .ok()
            .filter(|id| catalog.get(id).is_some())
            .ok_or_else(|| ProfileError::CharacterNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockCharacterSource;
    use deva_domain::{Character, CharacterCatalog, CharacterName, CharacterType};

    fn ops() -> ProfileOps {
        let catalog = Arc::new(
            CharacterCatalog::new(vec![Character::new(
                CharacterId::new("shiva").unwrap(),
                CharacterName::new("शिव", "Shiva").unwrap(),
                CharacterType::Trimurti,
            )])
            .unwrap(),
        );
        let mut source = MockCharacterSource::new();
        source
            .expect_catalog()
            .returning(move || Arc::clone(&catalog));
        ProfileOps::new(Arc::new(source), Arc::new(SessionStore::default()))
    }

    #[tokio::test]
    async fn new_session_gets_mock_profile() {
        assert_eq!(ops().get(SessionId::new()).await, UserProfile::mock());
    }

    #[tokio::test]
    async fn invalid_details_leave_profile_unchanged() {
        let ops = ops();
        let session = SessionId::new();

        let result = ops
            .update(
                session,
                ProfileDetails {
                    display_name: Some("Arjuna".into()),
                    email: Some("no-at-sign".into()),
                    bio: None,
                },
            )
            .await;

        assert!(matches!(result, Err(ProfileError::Domain(DomainError::Validation(_)))));
        assert_eq!(ops.get(session).await.display_name(), "Seeker");
    }

    #[tokio::test]
    async fn valid_details_are_saved() {
        let ops = ops();
        let session = SessionId::new();
        let details = ProfileDetails {
            display_name: Some("Arjuna".into()),
            ..Default::default()
        };

        let profile = ops.update(session, details).await.unwrap();

        assert_eq!(profile.display_name(), "Arjuna");
        assert_eq!(ops.get(session).await.display_name(), "Arjuna");
    }

    #[tokio::test]
    async fn favorites_toggle_and_reject_unknown_ids() {
        let ops = ops();
        let session = SessionId::new();
        let shiva = CharacterId::new("shiva").unwrap();

        let on = ops.toggle_favorite(session, "shiva").await.unwrap();
        assert!(on.is_favorite(&shiva));
        let off = ops.toggle_favorite(session, "shiva").await.unwrap();
        assert!(!off.is_favorite(&shiva));

        assert!(matches!(
            ops.toggle_favorite(session, "kama").await,
            Err(ProfileError::CharacterNotFound(_))
        ));
    }

    #[tokio::test]
    async fn views_are_recorded_most_recent_first() {
        let ops = ops();
        let session = SessionId::new();
        ops.record_view(session, CharacterId::new("shiva").unwrap())
            .await;
        let profile = ops
            .record_view(session, CharacterId::new("parvati").unwrap())
            .await;
        let viewed: Vec<&str> = profile
            .recently_viewed()
            .iter()
            .map(CharacterId::as_str)
            .collect();
        assert_eq!(viewed, ["parvati", "shiva"]);
    }
}
