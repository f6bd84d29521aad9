//! Order service
//!
//! Checkout submission and attendant status changes. The order total is
//! fixed here, at creation time: line totals plus the delivery fee currently
//! in effect. Later edits to dish prices or settings never touch it.

use std::sync::Arc;

use chrono::Utc;
use shared::models::{
    Order, OrderCreate, OrderFilters, OrderStatus, items_subtotal,
};
use shared::util::prefixed_id;
use shared::{AppError, AppResult};

use super::Latency;
use crate::db::MemoryStore;
use crate::db::repository::{OrderRepository, SettingsRepository};
use crate::orders::TransitionPolicy;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};

pub struct OrderService {
    orders: OrderRepository,
    settings: SettingsRepository,
    latency: Latency,
    policy: TransitionPolicy,
}

impl OrderService {
    pub fn new(store: Arc<MemoryStore>, latency: Latency, policy: TransitionPolicy) -> Self {
        Self {
            orders: OrderRepository::new(store.clone()),
            settings: SettingsRepository::new(store),
            latency,
            policy,
        }
    }

    /// Orders newest-first, filtered by status, creation day and search term
    pub async fn fetch_orders(&self, filters: &OrderFilters) -> Vec<Order> {
        self.latency.simulate().await;
        self.orders.find(filters)
    }

    pub async fn fetch_order(&self, id: &str) -> Option<Order> {
        self.latency.simulate().await;
        self.orders.find_by_id(id)
    }

    /// Submit a checkout: validates the payload, fixes the total, assigns
    /// identity and timestamp, and inserts the order at the head of the
    /// table with status NEW.
    pub async fn create_order(&self, data: OrderCreate) -> AppResult<Order> {
        self.latency.simulate().await;

        validate_required_text(&data.customer_name, "customer name", MAX_NAME_LEN)?;
        validate_required_text(&data.customer_phone, "customer phone", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&data.customer_address, "customer address", MAX_ADDRESS_LEN)?;
        validate_optional_text(data.notes.as_deref(), "notes", MAX_NOTE_LEN)?;
        if data.items.is_empty() {
            return Err(AppError::validation("order must contain at least one item"));
        }
        if data.items.iter().any(|i| i.quantity == 0) {
            return Err(AppError::validation("item quantity must be positive"));
        }

        let delivery_fee = self.settings.get().delivery_fee_fixed;
        let order = Order {
            id: prefixed_id("order"),
            customer_name: data.customer_name,
            customer_phone: data.customer_phone,
            customer_address: data.customer_address,
            total_amount: items_subtotal(&data.items) + delivery_fee,
            items: data.items,
            status: OrderStatus::New,
            notes: data.notes,
            created_at: Utc::now(),
            user_id: data.user_id,
        };

        self.orders.insert(order.clone());
        tracing::info!(
            order_id = %order.id,
            total = %order.total_amount,
            "Order created"
        );
        Ok(order)
    }

    /// Overwrite an order's status, subject to the configured transition
    /// policy. Unknown ids fail with NotFound and leave the table unchanged.
    pub async fn update_order_status(&self, id: &str, status: OrderStatus) -> AppResult<Order> {
        self.latency.simulate().await;

        let current = self
            .orders
            .find_by_id(id)
            .ok_or_else(|| AppError::not_found(format!("Order {}", id)))?;

        if !self.policy.allows(current.status, status) {
            return Err(AppError::business_rule(format!(
                "transition {} -> {} is not allowed",
                current.status, status
            )));
        }

        let order = self.orders.set_status(id, status)?;
        tracing::info!(order_id = %id, status = %status, "Order status updated");
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::models::{AppSettingsUpdate, CartItem};

    fn store() -> Arc<MemoryStore> {
        Arc::new(MemoryStore::seeded())
    }

    fn service(store: Arc<MemoryStore>) -> OrderService {
        OrderService::new(store, Latency::ZERO, TransitionPolicy::Unrestricted)
    }

    fn checkout(store: &Arc<MemoryStore>, quantities: &[(usize, u32)]) -> OrderCreate {
        let dishes = store.dishes.read().clone();
        OrderCreate {
            customer_name: "Ana Costa".into(),
            customer_phone: "51966665555".into(),
            customer_address: "Rua dos Andradas, 101".into(),
            items: quantities
                .iter()
                .map(|&(idx, quantity)| CartItem {
                    dish: dishes[idx].clone(),
                    quantity,
                })
                .collect(),
            notes: None,
            user_id: None,
        }
    }

    #[tokio::test]
    async fn create_order_fixes_total_at_creation_time() {
        let store = store();
        let service = service(store.clone());

        // dish1 (25.00) × 2 + dish8 (5.00) × 1 + fee 5.00
        let order = service
            .create_order(checkout(&store, &[(0, 2), (7, 1)]))
            .await
            .unwrap();
        assert_eq!(order.status, OrderStatus::New);
        assert_eq!(order.total_amount, Decimal::new(6000, 2));

        // Raising the fee afterwards must not change the stored total
        SettingsRepository::new(store.clone()).merge(AppSettingsUpdate {
            delivery_fee_fixed: Some(Decimal::new(2000, 2)),
            ..Default::default()
        });
        let fetched = service.fetch_order(&order.id).await.unwrap();
        assert_eq!(fetched.total_amount, Decimal::new(6000, 2));
    }

    #[tokio::test]
    async fn create_order_uses_current_delivery_fee() {
        let store = store();
        SettingsRepository::new(store.clone()).merge(AppSettingsUpdate {
            delivery_fee_fixed: Some(Decimal::new(1000, 2)),
            ..Default::default()
        });

        let order = service(store.clone())
            .create_order(checkout(&store, &[(7, 1)]))
            .await
            .unwrap();
        // 5.00 + 10.00 fee
        assert_eq!(order.total_amount, Decimal::new(1500, 2));
    }

    #[tokio::test]
    async fn create_order_lands_at_the_head_of_the_table() {
        let store = store();
        let service = service(store.clone());
        let order = service
            .create_order(checkout(&store, &[(0, 1)]))
            .await
            .unwrap();
        let listed = service.fetch_orders(&OrderFilters::default()).await;
        assert_eq!(listed[0].id, order.id);
    }

    #[tokio::test]
    async fn create_order_rejects_blank_contact_fields() {
        let store = store();
        let mut data = checkout(&store, &[(0, 1)]);
        data.customer_address = "  ".into();
        let err = service(store).create_order(data).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn create_order_rejects_empty_cart() {
        let store = store();
        let mut data = checkout(&store, &[(0, 1)]);
        data.items.clear();
        let err = service(store).create_order(data).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn update_status_unknown_id_is_not_found() {
        let store = store();
        let service = service(store.clone());
        let before = store.orders.read().clone();

        let err = service
            .update_order_status("missing", OrderStatus::Sent)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let after = store.orders.read().clone();
        assert_eq!(before.len(), after.len());
    }

    #[tokio::test]
    async fn unrestricted_policy_accepts_backwards_jump() {
        let store = store();
        let service = service(store.clone());
        // order1 is DELIVERED in the seed
        let order = service
            .update_order_status("order1", OrderStatus::New)
            .await
            .unwrap();
        assert_eq!(order.status, OrderStatus::New);
    }

    #[tokio::test]
    async fn forward_only_policy_rejects_backwards_jump() {
        let store = store();
        let service = OrderService::new(store, Latency::ZERO, TransitionPolicy::ForwardOnly);

        let err = service
            .update_order_status("order1", OrderStatus::New)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BusinessRule(_)));

        // Forward progression still works: order4 is NEW
        let order = service
            .update_order_status("order4", OrderStatus::Preparing)
            .await
            .unwrap();
        assert_eq!(order.status, OrderStatus::Preparing);
    }
}
