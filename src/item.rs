use serde::{Deserialize, Serialize};

/// One project shown by the carousel and the portfolio grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Path or URL of the cover image.
    pub image: String,
    pub category: String,
}

impl Item {
    pub fn new(id: u32, title: &str, description: &str, image: &str, category: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            image: image.to_string(),
            category: category.to_string(),
        }
    }

    /// Case-insensitive substring match of the category tag.
    pub fn in_category(&self, tag: &str) -> bool {
        self.category.to_lowercase().contains(&tag.to_lowercase())
    }
}
