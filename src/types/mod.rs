pub mod identifiers;
pub mod selection_result;

pub use identifiers::{Category, MenuId};
pub use selection_result::{RandomOptions, RandomSelectionResult};
