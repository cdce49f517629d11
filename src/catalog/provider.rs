use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::catalog::error::CatalogError;
use crate::menu::{CatalogDocument, MenuRecord};

/// Supplies the full, ordered catalog on demand.
///
/// Each call is one attempt; the cache decides when to call again.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn load_catalog(&self) -> Result<Vec<MenuRecord>, CatalogError>;
}

/// Records held in memory, returned as-is on every load.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    menus: Vec<MenuRecord>,
}

impl StaticCatalog {
    pub fn new(menus: Vec<MenuRecord>) -> Self {
        Self { menus }
    }
}

impl From<CatalogDocument> for StaticCatalog {
    fn from(document: CatalogDocument) -> Self {
        Self::new(document.into_menus())
    }
}

#[async_trait]
impl CatalogProvider for StaticCatalog {
    async fn load_catalog(&self) -> Result<Vec<MenuRecord>, CatalogError> {
        Ok(self.menus.clone())
    }
}

/// A catalog JSON document (`{"menus": [...]}`) read from disk on every load.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogProvider for JsonFileCatalog {
    async fn load_catalog(&self) -> Result<Vec<MenuRecord>, CatalogError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let document = CatalogDocument::from_json_slice(&bytes)?;
        Ok(document.into_menus())
    }
}
