use thiserror::Error;

use crate::types::identifiers::MenuId;

/// Failures at the catalog load boundary.
///
/// Nothing past the load (filtering, lookup, selection) can fail.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The provider returned two records with the same id. Failed loads are
    /// not cached, so a provider that keeps returning the duplicate makes
    /// every read fail until its data is fixed.
    #[error("Duplicate menu ID: {0}")]
    DuplicateMenuId(MenuId),
    #[error("Catalog provider failed: {0}")]
    Provider(String),
}
