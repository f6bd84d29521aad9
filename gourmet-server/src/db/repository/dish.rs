//! Dish Repository

use std::sync::Arc;

use shared::models::{Category, Dish, DishCreate, DishUpdate};
use shared::util::prefixed_id;
use shared::{AppError, AppResult};

use crate::db::MemoryStore;

/// Assigned when a dish is created without an uploaded image
pub const PLACEHOLDER_IMAGE_URL: &str = "https://picsum.photos/seed/placeholder/400/300";

#[derive(Clone)]
pub struct DishRepository {
    store: Arc<MemoryStore>,
}

impl DishRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    /// List dishes, filtered by exact category and case-insensitive name
    /// substring. `category_name` is joined from the current category table
    /// on every read; the stored value is never trusted.
    pub fn find(&self, category_id: Option<&str>, search: Option<&str>) -> Vec<Dish> {
        let categories = self.store.categories.read();
        let dishes = self.store.dishes.read();
        let needle = search.map(str::to_lowercase);

        dishes
            .iter()
            .filter(|d| category_id.is_none_or(|c| d.category_id == c))
            .filter(|d| {
                needle
                    .as_deref()
                    .is_none_or(|s| d.name.to_lowercase().contains(s))
            })
            .cloned()
            .map(|d| joined(&categories, d))
            .collect()
    }

    pub fn find_by_id(&self, id: &str) -> Option<Dish> {
        let categories = self.store.categories.read();
        self.store
            .dishes
            .read()
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .map(|d| joined(&categories, d))
    }

    /// Create a dish: assigns identity, resolves the category name and falls
    /// back to the placeholder image when none was uploaded.
    pub fn create(&self, data: DishCreate) -> Dish {
        let categories = self.store.categories.read();
        let dish = Dish {
            id: prefixed_id("dish"),
            name: data.name,
            description: data.description,
            price: data.price,
            image_url: data
                .image_url
                .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string()),
            available: data.available,
            category_name: categories
                .iter()
                .find(|c| c.id == data.category_id)
                .map(|c| c.name.clone()),
            category_id: data.category_id,
        };
        self.store.dishes.write().push(dish.clone());
        dish
    }

    /// Merge partial fields onto an existing dish
    pub fn update(&self, id: &str, data: DishUpdate) -> AppResult<Dish> {
        let categories = self.store.categories.read();
        let mut dishes = self.store.dishes.write();
        let dish = dishes
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| AppError::not_found(format!("Dish {}", id)))?;

        if let Some(name) = data.name {
            dish.name = name;
        }
        if let Some(description) = data.description {
            dish.description = description;
        }
        if let Some(price) = data.price {
            dish.price = price;
        }
        if let Some(image_url) = data.image_url {
            dish.image_url = image_url;
        }
        if let Some(available) = data.available {
            dish.available = available;
        }
        if let Some(category_id) = data.category_id {
            dish.category_id = category_id;
        }

        Ok(joined(&categories, dish.clone()))
    }

    /// Remove a dish by id; absent ids are a no-op
    pub fn delete(&self, id: &str) -> bool {
        let mut dishes = self.store.dishes.write();
        let before = dishes.len();
        dishes.retain(|d| d.id != id);
        dishes.len() < before
    }
}

/// Recompute the `category_name` projection from the category table
fn joined(categories: &[Category], mut dish: Dish) -> Dish {
    dish.category_name = categories
        .iter()
        .find(|c| c.id == dish.category_id)
        .map(|c| c.name.clone());
    dish
}
