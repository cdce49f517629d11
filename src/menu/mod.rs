pub mod document;
pub mod record;

pub use crate::types::identifiers::{Category, MenuId};
pub use document::CatalogDocument;
pub use record::MenuRecord;
