use std::io::Read;

use serde::{Deserialize, Serialize};

use super::record::MenuRecord;

/// On-disk catalog layout: a top-level object holding a `menus` array.
///
/// Keys other than `menus` (and unknown keys inside records) are ignored, so
/// documents carrying extra upstream metadata still parse.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub menus: Vec<MenuRecord>,
}

impl CatalogDocument {
    pub fn new(menus: Vec<MenuRecord>) -> Self {
        Self { menus }
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    pub fn into_menus(self) -> Vec<MenuRecord> {
        self.menus
    }
}
