use std::collections::HashSet;

use crate::menu::MenuRecord;
use crate::types::identifiers::Category;

/// Distinct categories, in order of first appearance.
pub fn categories(records: &[MenuRecord]) -> Vec<Category> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|record| seen.insert(&record.category))
        .map(|record| record.category.clone())
        .collect()
}

/// Distinct genres, in order of first appearance.
pub fn genres(records: &[MenuRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|record| seen.insert(record.genre.as_str()))
        .map(|record| record.genre.clone())
        .collect()
}
