use serde::{Deserialize, Serialize};

use crate::types::identifiers::{Category, MenuId};

/// A single catalog entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuRecord {
    pub id: MenuId,
    pub name: String,
    /// Price in the smallest currency unit.
    pub price: u32,
    pub category: Category,
    pub genre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MenuRecord {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: u32,
        category: impl Into<Category>,
        genre: impl Into<String>,
    ) -> Self {
        MenuRecord {
            id: MenuId::new(id),
            name: name.into(),
            price,
            category: category.into(),
            genre: genre.into(),
            image: None,
            description: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_free(&self) -> bool {
        self.price == 0
    }
}
