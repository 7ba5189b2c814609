//! Item catalog the terminal client lets the player inspect.
use std::path::{Path, PathBuf};

use client_frontend_core::{ActionDescriptor, SubjectInfo};
use serde::Deserialize;

use crate::config::CliConfig;

const BUILTIN_CATALOG: &str = include_str!("../assets/catalog.json");

/// Errors raised while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog contains no items")]
    Empty,
}

/// Inspectable subject together with the actions it offers.
#[derive(Clone, Debug, Deserialize)]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub subject: SubjectInfo,
    #[serde(default)]
    pub actions: Vec<ActionDescriptor>,
}

#[derive(Clone, Debug)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Loads the configured catalog, or the built-in one.
    pub fn load(config: &CliConfig) -> Result<Self, CatalogError> {
        match &config.catalog_path {
            Some(path) => Self::from_path(path),
            None => Self::builtin(),
        }
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        tracing::info!("Loaded {} items from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { entries })
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }
}
