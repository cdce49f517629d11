//! Menu catalog filtering and budget-bounded random combination selection.
//!
//! `menu-core` loads a fixed catalog of menu records once per [`catalog::Catalog`]
//! handle, filters it by category, genre, price range and name keyword, and
//! draws random combinations of records whose total price stays within a
//! budget. Draws are greedy and randomized, not optimal; the random source is
//! injectable so callers can make them reproducible.

pub mod catalog;
pub mod menu;
pub mod selection;
pub mod types;
