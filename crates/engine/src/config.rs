//! Engine configuration from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use crate::infrastructure::ollama::{DEFAULT_OLLAMA_BASE_URL, DEFAULT_OLLAMA_MODEL};
use crate::stores::session::DEFAULT_SESSION_IDLE;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SETTINGS_DB: &str = "settings.db";
/// Stored display settings not updated for this long are pruned.
pub const DEFAULT_SETTINGS_RETENTION: Duration = Duration::from_secs(30 * 24 * 60 * 60);

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub server_host: String,
    pub server_port: u16,
    /// Catalog file; `None` uses the bundled dataset.
    pub characters_path: Option<PathBuf>,
    pub settings_db: String,
    pub ollama_url: String,
    pub ollama_model: String,
    /// Raw `CORS_ALLOWED_ORIGINS` value; see `build_cors_layer` in `main`.
    pub cors_allowed_origins: Option<String>,
    pub session_idle: Duration,
    pub settings_retention: Duration,
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let server_port = match var("SERVER_PORT").or_else(|| var("PORT")) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Invalid server port, using {}", DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let session_idle = match var("DEVA_SESSION_IDLE_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(value = %raw, "Invalid DEVA_SESSION_IDLE_SECS, using default");
                    DEFAULT_SESSION_IDLE
                }
            },
            None => DEFAULT_SESSION_IDLE,
        };

        let settings_retention = match var("DEVA_SETTINGS_RETENTION_DAYS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(days) if days > 0 => Duration::from_secs(days.saturating_mul(24 * 60 * 60)),
                _ => {
                    tracing::warn!(
                        value = %raw,
                        "Invalid DEVA_SETTINGS_RETENTION_DAYS, using default"
                    );
                    DEFAULT_SETTINGS_RETENTION
                }
            },
            None => DEFAULT_SETTINGS_RETENTION,
        };

        Self {
            server_host: var("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.into()),
            server_port,
            characters_path: var("DEVA_CHARACTERS_PATH").map(PathBuf::from),
            settings_db: var("SETTINGS_DB").unwrap_or_else(|| DEFAULT_SETTINGS_DB.into()),
            ollama_url: var("OLLAMA_URL")
                .or_else(|| var("OLLAMA_BASE_URL"))
                .unwrap_or_else(|| DEFAULT_OLLAMA_BASE_URL.into()),
            ollama_model: var("OLLAMA_MODEL").unwrap_or_else(|| DEFAULT_OLLAMA_MODEL.into()),
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS"),
            session_idle,
            settings_retention,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
