//! Category Repository

use std::sync::Arc;

use shared::models::Category;

use crate::db::MemoryStore;

#[derive(Clone)]
pub struct CategoryRepository {
    store: Arc<MemoryStore>,
}

impl CategoryRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    /// All categories in stable (seed) order
    pub fn find_all(&self) -> Vec<Category> {
        self.store.categories.read().clone()
    }

    /// Resolve a category name by id
    pub fn name_of(&self, id: &str) -> Option<String> {
        self.store
            .categories
            .read()
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
    }
}
