// Two states only: Empty and Loaded.
// a snapshot with zero records counts as Empty
// no invalidation
// no cached failures
// concurrent first reads may each load; last write wins

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::catalog::error::CatalogError;
use crate::catalog::provider::CatalogProvider;
use crate::catalog::snapshot::CatalogSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    Empty,
    Loaded,
}

/// Lazily populated, process-lifetime catalog cache.
pub struct CatalogCache {
    provider: Arc<dyn CatalogProvider>,
    snapshot: RwLock<Option<Arc<CatalogSnapshot>>>,
}

impl CatalogCache {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self {
            provider,
            snapshot: RwLock::new(None),
        }
    }

    pub fn from_provider<P: CatalogProvider + 'static>(provider: P) -> Self {
        Self::new(Arc::new(provider))
    }

    pub async fn state(&self) -> CacheState {
        match self.current().await {
            Some(_) => CacheState::Loaded,
            None => CacheState::Empty,
        }
    }

    /// The current non-empty snapshot, without triggering a load.
    pub async fn current(&self) -> Option<Arc<CatalogSnapshot>> {
        self.snapshot
            .read()
            .await
            .as_ref()
            .filter(|snapshot| !snapshot.is_empty())
            .cloned()
    }

    /// Return the loaded snapshot, loading it first if the cache is empty.
    ///
    /// A load that returns no records is handed back to the caller but leaves
    /// the cache empty, so the next call loads again. The lock is not held
    /// while the provider runs. A failed load leaves the cache empty so the
    /// next call tries again.
    pub async fn ensure_loaded(&self) -> Result<Arc<CatalogSnapshot>, CatalogError> {
        if let Some(snapshot) = self.current().await {
            return Ok(snapshot);
        }

        tracing::debug!("catalog cache empty, loading");
        let snapshot = match self.load().await {
            Ok(snapshot) => Arc::new(snapshot),
            Err(err) => {
                tracing::warn!(error = %err, "catalog load failed");
                return Err(err);
            }
        };

        tracing::info!(
            menu_count = snapshot.len(),
            version = snapshot.version(),
            "catalog loaded"
        );

        if !snapshot.is_empty() {
            *self.snapshot.write().await = Some(Arc::clone(&snapshot));
        }
        Ok(snapshot)
    }

    async fn load(&self) -> Result<CatalogSnapshot, CatalogError> {
        let menus = self.provider.load_catalog().await?;
        CatalogSnapshot::from_records(menus)
    }
}
