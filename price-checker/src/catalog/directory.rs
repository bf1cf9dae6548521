//! Category Directory: static, read-only category metadata

use shared::models::Category;

#[derive(Debug, Clone)]
pub struct CategoryDirectory {
    categories: Vec<Category>,
}

impl CategoryDirectory {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Every category, in display order
    pub fn list_all(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }
}
