use std::sync::Arc;

use crate::catalog::cache::CatalogCache;
use crate::catalog::error::CatalogError;
use crate::catalog::provider::CatalogProvider;
use crate::menu::MenuRecord;
use crate::selection::{self, ComboSelector, FilterSpec, RandomSource, ThreadRandom};
use crate::types::identifiers::{Category, MenuId};
use crate::types::selection_result::{RandomOptions, RandomSelectionResult};

/// Read-only handle over a lazily loaded menu catalog.
///
/// Every read loads the catalog first if the shared cache is still empty.
/// Load failures are returned to the caller and retried on the next read.
#[derive(Clone)]
pub struct Catalog {
    cache: Arc<CatalogCache>,
}

impl Catalog {
    pub fn new(cache: Arc<CatalogCache>) -> Self {
        Self { cache }
    }

    pub fn from_provider<P: CatalogProvider + 'static>(provider: P) -> Self {
        Self::new(Arc::new(CatalogCache::from_provider(provider)))
    }

    pub fn cache(&self) -> &Arc<CatalogCache> {
        &self.cache
    }

    /// All records passing `spec`, in catalog order.
    pub async fn all(&self, spec: Option<&FilterSpec>) -> Result<Vec<MenuRecord>, CatalogError> {
        let snapshot = self.cache.ensure_loaded().await?;
        Ok(selection::filter(snapshot.menus(), spec))
    }

    pub async fn categories(&self) -> Result<Vec<Category>, CatalogError> {
        let snapshot = self.cache.ensure_loaded().await?;
        Ok(selection::categories(snapshot.menus()))
    }

    pub async fn genres(&self) -> Result<Vec<String>, CatalogError> {
        let snapshot = self.cache.ensure_loaded().await?;
        Ok(selection::genres(snapshot.menus()))
    }

    /// Linear lookup. An unknown id is `Ok(None)`.
    pub async fn get_by_id(&self, id: MenuId) -> Result<Option<MenuRecord>, CatalogError> {
        let snapshot = self.cache.ensure_loaded().await?;
        Ok(snapshot.menus().iter().find(|menu| menu.id == id).cloned())
    }

    /// Random combination of filtered records within `options.budget`.
    pub async fn random(
        &self,
        spec: Option<&FilterSpec>,
        options: RandomOptions,
    ) -> Result<RandomSelectionResult, CatalogError> {
        self.random_with(spec, options, ThreadRandom).await
    }

    pub async fn random_with<R: RandomSource>(
        &self,
        spec: Option<&FilterSpec>,
        options: RandomOptions,
        rng: R,
    ) -> Result<RandomSelectionResult, CatalogError> {
        let snapshot = self.cache.ensure_loaded().await?;
        Ok(ComboSelector::new(rng).select(snapshot.menus(), spec, options))
    }

    /// Content fingerprint of the loaded catalog.
    pub async fn snapshot_version(&self) -> Result<String, CatalogError> {
        let snapshot = self.cache.ensure_loaded().await?;
        Ok(snapshot.version().to_string())
    }
}
