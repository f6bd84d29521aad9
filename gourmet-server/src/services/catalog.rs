//! Catalog service
//!
//! Menu management: categories, dishes and the mock image upload.

use std::sync::Arc;

use shared::AppResult;
use shared::models::{Category, Dish, DishCreate, DishUpdate};
use shared::util::now_millis;

use super::Latency;
use crate::db::MemoryStore;
use crate::db::repository::{CategoryRepository, DishRepository};
use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, validate_non_negative, validate_required_text};

pub struct CatalogService {
    categories: CategoryRepository,
    dishes: DishRepository,
    latency: Latency,
}

impl CatalogService {
    pub fn new(store: Arc<MemoryStore>, latency: Latency) -> Self {
        Self {
            categories: CategoryRepository::new(store.clone()),
            dishes: DishRepository::new(store),
            latency,
        }
    }

    /// Full category list in stable order
    pub async fn fetch_categories(&self) -> Vec<Category> {
        self.latency.simulate().await;
        self.categories.find_all()
    }

    /// Dishes filtered by category and/or name search
    pub async fn fetch_dishes(
        &self,
        category_id: Option<&str>,
        search: Option<&str>,
    ) -> Vec<Dish> {
        self.latency.simulate().await;
        self.dishes.find(category_id, search)
    }

    pub async fn fetch_dish(&self, id: &str) -> Option<Dish> {
        self.latency.simulate().await;
        self.dishes.find_by_id(id)
    }

    pub async fn add_dish(&self, data: DishCreate) -> AppResult<Dish> {
        self.latency.simulate().await;

        validate_required_text(&data.name, "dish name", MAX_NAME_LEN)?;
        validate_required_text(&data.category_id, "category", MAX_NAME_LEN)?;
        validate_non_negative(data.price, "price")?;

        let dish = self.dishes.create(data);
        tracing::info!(dish_id = %dish.id, name = %dish.name, "Dish created");
        Ok(dish)
    }

    pub async fn update_dish(&self, id: &str, data: DishUpdate) -> AppResult<Dish> {
        self.latency.simulate().await;

        if let Some(name) = &data.name {
            validate_required_text(name, "dish name", MAX_NAME_LEN)?;
        }
        if let Some(description) = &data.description
            && description.len() > MAX_NOTE_LEN
        {
            return Err(shared::AppError::validation("description is too long"));
        }
        if let Some(price) = data.price {
            validate_non_negative(price, "price")?;
        }

        self.dishes.update(id, data)
    }

    /// Delete a dish; absent ids are a silent no-op
    pub async fn delete_dish(&self, id: &str) -> bool {
        self.latency.simulate().await;
        let removed = self.dishes.delete(id);
        if removed {
            tracing::info!(dish_id = %id, "Dish deleted");
        }
        removed
    }

    /// Mock image upload: no bytes are stored, the returned placeholder URL
    /// is derived from the file name and the current time.
    pub async fn upload_image(&self, file_name: &str) -> String {
        self.latency.simulate().await;
        format!(
            "https://picsum.photos/seed/{}{}/400/300",
            file_name,
            now_millis()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::AppError;

    fn service() -> CatalogService {
        CatalogService::new(Arc::new(MemoryStore::seeded()), Latency::ZERO)
    }

    #[tokio::test]
    async fn fetch_dishes_intersects_both_filters() {
        let service = service();
        let hits = service.fetch_dishes(Some("cat4"), Some("suco")).await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Suco Natural (300ml)");

        let all = service.fetch_dishes(None, None).await;
        assert_eq!(all.len(), 10);
    }

    #[tokio::test]
    async fn add_dish_rejects_missing_fields() {
        let service = service();
        let err = service
            .add_dish(DishCreate {
                name: "".into(),
                description: String::new(),
                price: Decimal::new(1000, 2),
                image_url: None,
                available: true,
                category_id: "cat1".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn add_dish_rejects_negative_price() {
        let service = service();
        let err = service
            .add_dish(DishCreate {
                name: "Couvert".into(),
                description: String::new(),
                price: Decimal::new(-100, 2),
                image_url: None,
                available: true,
                category_id: "cat1".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn upload_image_derives_url_from_file_name() {
        let url = service().upload_image("foto.png").await;
        assert!(url.starts_with("https://picsum.photos/seed/foto.png"));
        assert!(url.ends_with("/400/300"));
    }
}
