use serde::{Deserialize, Serialize};

use crate::menu::MenuRecord;
use crate::types::identifiers::Category;

/// Optional predicates over a menu record.
///
/// Every `None` field places no constraint on the record. All present fields
/// must hold for a record to pass. Matching is case-sensitive throughout.
/// A `min_price` above `max_price` is not rejected; it simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterSpec {
    pub category: Option<Category>,
    pub genre: Option<String>,
    /// Inclusive lower bound.
    pub min_price: Option<u32>,
    /// Inclusive upper bound.
    pub max_price: Option<u32>,
    /// Substring of the record name.
    pub keyword: Option<String>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<Category>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn min_price(mut self, min: u32) -> Self {
        self.min_price = Some(min);
        self
    }

    pub fn max_price(mut self, max: u32) -> Self {
        self.max_price = Some(max);
        self
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// True when no criterion is set.
    pub fn is_unconstrained(&self) -> bool {
        self == &FilterSpec::default()
    }

    pub fn matches(&self, record: &MenuRecord) -> bool {
        if let Some(category) = &self.category {
            if &record.category != category {
                return false;
            }
        }
        if let Some(genre) = &self.genre {
            if &record.genre != genre {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if record.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if record.price > max {
                return false;
            }
        }
        if let Some(keyword) = &self.keyword {
            if !record.name.contains(keyword.as_str()) {
                return false;
            }
        }
        true
    }
}

/// Keep the records matching `spec`, in their original order.
///
/// A missing spec is the identity.
pub fn filter(records: &[MenuRecord], spec: Option<&FilterSpec>) -> Vec<MenuRecord> {
    match spec {
        None => records.to_vec(),
        Some(spec) => records
            .iter()
            .filter(|record| spec.matches(record))
            .cloned()
            .collect(),
    }
}
