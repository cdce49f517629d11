use std::fmt;

use serde::{Deserialize, Serialize};

/// Menu identifier, unique within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuId(u32);

impl MenuId {
    pub fn new(raw: u32) -> Self {
        MenuId(raw)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl From<u32> for MenuId {
    fn from(raw: u32) -> Self {
        MenuId(raw)
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw category label as it appears in the catalog data.
///
/// Labels are compared byte-for-byte; no normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(label: impl Into<String>) -> Self {
        Category(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Category(label.to_string())
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category(label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
