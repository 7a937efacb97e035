//! Data access ports.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use deva_domain::CharacterCatalog;

use super::error::RepoError;

/// Read access to the character catalog.
///
/// The catalog is loaded once and never changes for the life of the process,
/// so the accessor is synchronous and hands out a shared reference.
#[cfg_attr(test, mockall::automock)]
pub trait CharacterSource: Send + Sync {
    fn catalog(&self) -> Arc<CharacterCatalog>;
}

/// Key-value store for display settings.
///
/// `scope` groups the entries of one owner (a session id); `key` is a
/// `SettingKey` string and `value` the selected option id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsRepo: Send + Sync {
    async fn get(&self, scope: &str, key: &str) -> Result<Option<String>, RepoError>;
    async fn set(&self, scope: &str, key: &str, value: &str) -> Result<(), RepoError>;
    /// Remove every entry stored under `scope`.
    async fn clear(&self, scope: &str) -> Result<(), RepoError>;
    /// Remove entries not written for longer than `max_age`. Returns the
    /// number of entries removed.
    async fn prune_older_than(&self, max_age: Duration) -> Result<u64, RepoError>;
}
