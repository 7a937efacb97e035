//! Character catalog loading.
//!
//! The catalog is read once at startup, either from a JSON file named by
//! `DEVA_CHARACTERS_PATH` or from the dataset compiled into the binary, and
//! then shared read-only for the life of the process.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tokio::fs;

use deva_domain::{Character, CharacterCatalog, DomainError};

use crate::infrastructure::ports::CharacterSource;

/// Dataset shipped with the engine.
const BUNDLED_CHARACTERS: &str = include_str!("../../data/characters.json");

/// Errors from loading the character catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Catalog JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid catalog: {0}")]
    Invalid(#[from] DomainError),
}

/// In-memory catalog loaded from JSON.
pub struct JsonCharacterSource {
    catalog: Arc<CharacterCatalog>,
}

impl JsonCharacterSource {
    /// Parse a JSON array of characters.
    ///
    /// Unknown `type` values load as `Unknown`; an unknown `yuga` or a
    /// duplicate id fails the whole load.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let characters: Vec<Character> = serde_json::from_str(json)?;
        let catalog = CharacterCatalog::new(characters)?;
        Ok(Self {
            catalog: Arc::new(catalog),
        })
    }

    /// The dataset compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CHARACTERS)
    }

    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json(&content)
    }

    /// Load from `path` when given, otherwise use the bundled dataset.
    pub async fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let source = match path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading character catalog from file");
                Self::from_file(path).await?
            }
            None => {
                tracing::info!("Loading bundled character catalog");
                Self::bundled()?
            }
        };
        tracing::info!(characters = source.catalog.len(), "Character catalog loaded");
        Ok(source)
    }
}

impl CharacterSource for JsonCharacterSource {
    fn catalog(&self) -> Arc<CharacterCatalog> {
        Arc::clone(&self.catalog)
    }
}
