//! Display settings management use cases.
//!
//! Settings are stored per session scope, one entry per `SettingKey`.
//! Missing or unrecognized stored values read back as defaults.

use std::sync::Arc;
use std::time::Duration;

use deva_domain::{DisplaySettings, SessionId, SettingKey};
use deva_shared::settings::{settings_metadata, SettingsFieldMetadata};
use deva_shared::UpdateSettingsRequest;

use crate::infrastructure::ports::SettingsRepo;

/// Settings operations use case.
///
/// Encapsulates all settings-related queries and mutations, providing:
/// - Per-session display settings with defaults
/// - Partial updates
/// - Settings metadata for UI/configuration
pub struct SettingsOps {
    repo: Arc<dyn SettingsRepo>,
}

impl SettingsOps {
    pub fn new(repo: Arc<dyn SettingsRepo>) -> Self {
        Self { repo }
    }

    /// Get the session's display settings.
    ///
    /// Returns default settings for anything that has not been saved.
    pub async fn get(&self, session: SessionId) -> Result<DisplaySettings, SettingsError> {
        let scope = scope(session);
        let mut stored = Vec::with_capacity(SettingKey::ALL.len());
        for key in SettingKey::ALL {
            if let Some(value) = self.repo.get(&scope, key.as_str()).await? {
                stored.push((key, value));
            }
        }
        Ok(DisplaySettings::from_entries(
            stored.iter().map(|(key, value)| (*key, value.as_str())),
        ))
    }

    /// Apply a partial update and persist every key.
    pub async fn update(
        &self,
        session: SessionId,
        request: UpdateSettingsRequest,
    ) -> Result<DisplaySettings, SettingsError> {
        let settings = request.apply_to(self.get(session).await?);
        let scope = scope(session);
        for (key, value) in settings.entries() {
            self.repo.set(&scope, key.as_str(), value).await?;
        }
        tracing::debug!(
            session = %session,
            palette = settings.palette.id(),
            font_family = settings.font_family.id(),
            font_size = settings.font_size.id(),
            "Display settings updated"
        );
        Ok(settings)
    }

    /// Drop the session's stored settings.
    pub async fn reset(&self, session: SessionId) -> Result<DisplaySettings, SettingsError> {
        self.repo.clear(&scope(session)).await?;
        Ok(DisplaySettings::default())
    }

    /// Forget settings of sessions that have not saved anything for
    /// `max_age`. Returns the number of entries removed.
    pub async fn prune_stale(&self, max_age: Duration) -> Result<u64, SettingsError> {
        let removed = self.repo.prune_older_than(max_age).await?;
        if removed > 0 {
            tracing::info!(removed, max_age_secs = max_age.as_secs(), "Pruned stale display settings");
        }
        Ok(removed)
    }

    /// Get metadata about available settings fields.
    ///
    /// Used by UI to render settings forms with descriptions, types, and defaults.
    pub fn metadata(&self) -> Vec<SettingsFieldMetadata> {
        settings_metadata()
    }
}

fn scope(session: SessionId) -> String {
    session.to_string()
}

/// Errors that can occur during settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Repository error: {0}")]
    Repo(#[from] crate::infrastructure::ports::RepoError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockSettingsRepo, RepoError};
    use deva_domain::{FontFamily, FontSize, Palette};
    use mockall::predicate::*;

    #[tokio::test]
    async fn unsaved_settings_are_defaults() {
        let mut repo = MockSettingsRepo::new();
        repo.expect_get().times(3).returning(|_, _| Ok(None));

        let settings = SettingsOps::new(Arc::new(repo))
            .get(SessionId::new())
            .await
            .unwrap();

        assert_eq!(settings, DisplaySettings::default());
    }

    #[tokio::test]
    async fn stored_values_are_read_and_unknown_ones_ignored() {
        let mut repo = MockSettingsRepo::new();
        repo.expect_get()
            .with(always(), eq("palette"))
            .returning(|_, _| Ok(Some("midnight".into())));
        repo.expect_get()
            .with(always(), eq("font_family"))
            .returning(|_, _| Ok(Some("comic-sans".into())));
        repo.expect_get()
            .with(always(), eq("font_size"))
            .returning(|_, _| Ok(None));

        let settings = SettingsOps::new(Arc::new(repo))
            .get(SessionId::new())
            .await
            .unwrap();

        assert_eq!(settings.palette, Palette::Midnight);
        assert_eq!(settings.font_family, FontFamily::default());
        assert_eq!(settings.font_size, FontSize::default());
    }

    #[tokio::test]
    async fn update_keeps_unspecified_fields() {
        let session = SessionId::new();
        let scope = session.to_string();

        let mut repo = MockSettingsRepo::new();
        repo.expect_get()
            .with(eq(scope.clone()), eq("palette"))
            .returning(|_, _| Ok(Some("midnight".into())));
        repo.expect_get()
            .with(eq(scope.clone()), eq("font_family"))
            .returning(|_, _| Ok(None));
        repo.expect_get()
            .with(eq(scope.clone()), eq("font_size"))
            .returning(|_, _| Ok(None));
        repo.expect_set()
            .with(eq(scope.clone()), eq("palette"), eq("midnight"))
            .times(1)
            .returning(|_, _, _| Ok(()));
        repo.expect_set()
            .with(eq(scope.clone()), eq("font_size"), eq(FontSize::Large.id()))
            .times(1)
            .returning(|_, _, _| Ok(()));
        repo.expect_set()
            .with(eq(scope), eq("font_family"), always())
            .times(1)
            .returning(|_, _, _| Ok(()));

        let request = UpdateSettingsRequest {
            font_size: Some(FontSize::Large),
            ..Default::default()
        };
        let settings = SettingsOps::new(Arc::new(repo))
            .update(session, request)
            .await
            .unwrap();

        assert_eq!(settings.palette, Palette::Midnight);
        assert_eq!(settings.font_size, FontSize::Large);
    }

    #[tokio::test]
    async fn reset_clears_scope() {
        let session = SessionId::new();
        let mut repo = MockSettingsRepo::new();
        repo.expect_clear()
            .with(eq(session.to_string()))
            .times(1)
            .returning(|_| Ok(()));

        let settings = SettingsOps::new(Arc::new(repo))
            .reset(session)
            .await
            .unwrap();
        assert_eq!(settings, DisplaySettings::default());
    }

    #[tokio::test]
    async fn repository_errors_propagate() {
        let mut repo = MockSettingsRepo::new();
        repo.expect_get()
            .returning(|_, _| Err(RepoError::database("settings.get", "disk full")));

        let result = SettingsOps::new(Arc::new(repo)).get(SessionId::new()).await;
        assert!(matches!(result, Err(SettingsError::Repo(_))));
    }

    #[tokio::test]
    async fn prune_passes_max_age_to_repository() {
        let max_age = Duration::from_secs(7 * 24 * 60 * 60);
        let mut repo = MockSettingsRepo::new();
        repo.expect_prune_older_than()
            .with(eq(max_age))
            .times(1)
            .returning(|_| Ok(6));

        let removed = SettingsOps::new(Arc::new(repo))
            .prune_stale(max_age)
            .await
            .unwrap();
        assert_eq!(removed, 6);
    }

    #[test]
    fn metadata_lists_every_key() {
        let ops = SettingsOps::new(Arc::new(MockSettingsRepo::new()));
        let keys: Vec<String> = ops.metadata().into_iter().map(|m| m.key).collect();
        assert_eq!(keys, ["palette", "font_family", "font_size"]);
    }
}
