pub mod cache;
pub mod error;
pub mod facade;
pub mod provider;
pub mod snapshot;

pub use cache::{CacheState, CatalogCache};
pub use error::CatalogError;
pub use facade::Catalog;
pub use provider::{CatalogProvider, JsonFileCatalog, StaticCatalog};
pub use snapshot::CatalogSnapshot;
