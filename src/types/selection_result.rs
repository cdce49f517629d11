use serde::{Deserialize, Serialize};

use crate::menu::MenuRecord;

/// The outcome of a random combination draw.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomSelectionResult {
    /// Selected records in draw order. May repeat a record when duplicates are allowed.
    pub items: Vec<MenuRecord>,
    pub total: u32,
    /// Unused budget: `budget - total`.
    pub remaining: u32,
}

impl RandomSelectionResult {
    /// Result with nothing selected and the whole budget left over.
    pub fn empty(budget: u32) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            remaining: budget,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Parameters for a random combination draw.
///
/// With `allow_duplicates` on (the default) a record stays eligible after
/// being drawn, so a single very cheap record can make up most of a
/// combination when the budget is large relative to its price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RandomOptions {
    pub budget: u32,
    pub allow_duplicates: bool,
}

impl RandomOptions {
    pub const DEFAULT_BUDGET: u32 = 1000;

    pub fn with_budget(mut self, budget: u32) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_duplicates(mut self, allow: bool) -> Self {
        self.allow_duplicates = allow;
        self
    }
}

impl Default for RandomOptions {
    fn default() -> Self {
        Self {
            budget: Self::DEFAULT_BUDGET,
            allow_duplicates: true,
        }
    }
}
