//! Order Repository

use std::sync::Arc;

use shared::models::{Order, OrderFilters, OrderStatus};
use shared::{AppError, AppResult};

use crate::db::MemoryStore;

#[derive(Clone)]
pub struct OrderRepository {
    store: Arc<MemoryStore>,
}

impl OrderRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    /// List orders newest-first, then apply the conjunctive filters
    pub fn find(&self, filters: &OrderFilters) -> Vec<Order> {
        let mut orders: Vec<Order> = self.store.orders.read().clone();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        if let Some(status) = filters.status {
            orders.retain(|o| o.status == status);
        }
        if let Some(date) = filters.date {
            orders.retain(|o| o.created_on() == date);
        }
        if let Some(term) = &filters.search {
            let term = term.to_lowercase();
            orders.retain(|o| {
                o.customer_name.to_lowercase().contains(&term)
                    || o.id.to_lowercase().contains(&term)
                    || o.customer_phone.contains(&term)
            });
        }

        orders
    }

    pub fn find_by_id(&self, id: &str) -> Option<Order> {
        self.store
            .orders
            .read()
            .iter()
            .find(|o| o.id == id)
            .cloned()
    }

    /// Insert at the head of the table (newest arrivals first)
    pub fn insert(&self, order: Order) {
        self.store.orders.write().insert(0, order);
    }

    /// Overwrite the status of an existing order
    pub fn set_status(&self, id: &str, status: OrderStatus) -> AppResult<Order> {
        let mut orders = self.store.orders.write();
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| AppError::not_found(format!("Order {}", id)))?;
        order.status = status;
        Ok(order.clone())
    }

    /// Full table snapshot (aggregate queries)
    pub fn all(&self) -> Vec<Order> {
        self.store.orders.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn repo() -> OrderRepository {
        OrderRepository::new(Arc::new(MemoryStore::seeded()))
    }

    #[test]
    fn find_sorts_newest_first() {
        let orders = repo().find(&OrderFilters::default());
        assert_eq!(orders.len(), 4);
        for pair in orders.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[test]
    fn find_filters_by_status() {
        let orders = repo().find(&OrderFilters {
            status: Some(OrderStatus::New),
            ..Default::default()
        });
        assert_eq!(orders.len(), 1);
        assert!(orders.iter().all(|o| o.status == OrderStatus::New));
    }

    #[test]
    fn find_filters_by_creation_day() {
        let today = Utc::now().date_naive();
        let orders = repo().find(&OrderFilters {
            date: Some(today),
            ..Default::default()
        });
        // order4 (now) and order3 (two hours ago) were created today
        assert!(orders.iter().all(|o| o.created_on() == today));
        assert!(orders.iter().any(|o| o.id == "order4"));
    }

    #[test]
    fn find_searches_name_id_and_phone() {
        let repo = repo();

        let by_name = repo.find(&OrderFilters {
            search: Some("maria".into()),
            ..Default::default()
        });
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].customer_name, "Maria Oliveira");

        let by_id = repo.find(&OrderFilters {
            search: Some("ORDER1".into()),
            ..Default::default()
        });
        assert_eq!(by_id.len(), 1);

        let by_phone = repo.find(&OrderFilters {
            search: Some("519666".into()),
            ..Default::default()
        });
        assert_eq!(by_phone.len(), 1);
        assert_eq!(by_phone[0].id, "order4");
    }

    #[test]
    fn set_status_unknown_id_leaves_table_unchanged() {
        let repo = repo();
        let before = repo.all();
        let err = repo.set_status("missing", OrderStatus::Sent).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        let after = repo.all();
        assert_eq!(before.len(), after.len());
        for (a, b) in before.iter().zip(after.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.status, b.status);
        }
    }

    #[test]
    fn insert_lands_at_the_head() {
        let repo = repo();
        let mut order = repo.find_by_id("order1").unwrap();
        order.id = "order5".into();
        order.created_at = Utc::now();
        repo.insert(order);
        assert_eq!(repo.all()[0].id, "order5");
    }
}
