use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::catalog::error::CatalogError;
use crate::menu::MenuRecord;

/// An immutable, validated copy of the catalog as one load returned it.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    menus: Vec<MenuRecord>,
    version: String,
    loaded_at: DateTime<Utc>, // informational only
}

impl CatalogSnapshot {
    /// Validate and fingerprint a freshly loaded record sequence.
    ///
    /// Record order is kept as loaded. Identifiers must be unique.
    pub fn from_records(menus: Vec<MenuRecord>) -> Result<Self, CatalogError> {
        // Check for duplicate IDs (adjacent after sort)
        let mut ids: Vec<_> = menus.iter().map(|menu| menu.id).collect();
        ids.sort();
        for pair in ids.windows(2) {
            if pair[0] == pair[1] {
                return Err(CatalogError::DuplicateMenuId(pair[0]));
            }
        }

        let version = content_version(&menus)?;

        Ok(Self {
            menus,
            version,
            loaded_at: Utc::now(),
        })
    }

    pub fn menus(&self) -> &[MenuRecord] {
        &self.menus
    }

    /// `sha256:<hex>` over the serialized records, in load order.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn len(&self) -> usize {
        self.menus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }
}

fn content_version(menus: &[MenuRecord]) -> Result<String, CatalogError> {
    let mut hasher = Sha256::new();
    for menu in menus {
        let line = serde_json::to_vec(menu)?;
        hasher.update(&line);
        hasher.update(b"\n");
    }
    Ok(format!("sha256:{}", hex::encode(hasher.finalize())))
}
