//! SQLite-backed settings storage.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::{Row, SqlitePool};
use std::sync::Arc;
use std::time::Duration;

use crate::infrastructure::ports::{ClockPort, RepoError, SettingsRepo};

/// SQLite implementation of the display settings key-value store.
pub struct SqliteSettingsRepo {
    pool: SqlitePool,
    clock: Arc<dyn ClockPort>,
}

impl SqliteSettingsRepo {
    pub async fn new(db_path: &str, clock: Arc<dyn ClockPort>) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("settings", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS display_settings (
                scope TEXT NOT NULL,
                key TEXT NOT NULL,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                PRIMARY KEY (scope, key)
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("settings", e))?;

        Ok(Self { pool, clock })
    }
}

// Fixed-width UTC timestamps so `updated_at` compares correctly as text.
fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[async_trait]
impl SettingsRepo for SqliteSettingsRepo {
    async fn get(&self, scope: &str, key: &str) -> Result<Option<String>, RepoError> {
        let row = sqlx::query("SELECT value FROM display_settings WHERE scope = ? AND key = ?")
            .bind(scope)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("settings.get", e))?;

        Ok(row.map(|row| row.get("value")))
    }

    async fn set(&self, scope: &str, key: &str, value: &str) -> Result<(), RepoError> {
        let now = timestamp(self.clock.now());

        sqlx::query(
            r#"
            INSERT INTO display_settings (scope, key, value, updated_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(scope, key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(scope)
        .bind(key)
        .bind(value)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("settings.set", e))?;

        Ok(())
    }

    async fn clear(&self, scope: &str) -> Result<(), RepoError> {
        sqlx::query("DELETE FROM display_settings WHERE scope = ?")
            .bind(scope)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("settings.clear", e))?;
        Ok(())
    }

    async fn prune_older_than(&self, max_age: Duration) -> Result<u64, RepoError> {
        let cutoff = chrono::Duration::from_std(max_age)
            .ok()
            .and_then(|age| self.clock.now().checked_sub_signed(age));
        let Some(cutoff) = cutoff else {
            return Ok(0);
        };

        let result = sqlx::query("DELETE FROM display_settings WHERE updated_at < ?")
            .bind(timestamp(cutoff))
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("settings.prune", e))?;
        Ok(result.rows_affected())
    }
}
