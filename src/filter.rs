use crate::constants::ALL_CATEGORIES;
use crate::item::Item;

/// Selected category of the portfolio grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    selected: String,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self { selected: ALL_CATEGORIES.to_string() }
    }
}

impl CategoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, category: &str) {
        self.selected = category.to_string();
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn is_all(&self) -> bool {
        self.selected == ALL_CATEGORIES
    }

    pub fn matches(&self, item: &Item) -> bool {
        self.is_all() || item.in_category(&self.selected)
    }

    /// Matching items in their original order.
    pub fn apply<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}
