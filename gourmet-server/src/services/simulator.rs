//! Background order simulator
//!
//! Injects occasional synthetic orders into the shared order table so that
//! polling consumers (the attendant order list) see organic arrivals. The
//! draft source is a trait so tests can drive deterministic events instead
//! of the probabilistic production feed.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use shared::models::{CartItem, Dish, OrderCreate};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use super::OrderService;
use crate::db::MemoryStore;
use crate::db::repository::DishRepository;

/// Source of synthetic order drafts
pub trait OrderFeed: Send + Sync {
    /// Produce the next draft from the current menu, or `None` to skip the
    /// tick. Called once per simulator tick.
    fn draft(&self, dishes: &[Dish]) -> Option<OrderCreate>;
}

/// Production feed: fires with a fixed probability per tick and synthesizes
/// one or two random dishes with random customer fields.
pub struct RandomOrderFeed {
    probability: f64,
}

impl RandomOrderFeed {
    pub fn new(probability: f64) -> Self {
        Self { probability }
    }
}

impl OrderFeed for RandomOrderFeed {
    fn draft(&self, dishes: &[Dish]) -> Option<OrderCreate> {
        let mut rng = rand::thread_rng();
        if dishes.is_empty() || rng.r#gen::<f64>() >= self.probability {
            return None;
        }

        let first = dishes[rng.gen_range(0..dishes.len())].clone();
        let mut items = vec![CartItem {
            dish: first,
            quantity: 1,
        }];
        if rng.gen_bool(0.5) {
            let second = dishes[rng.gen_range(0..dishes.len())].clone();
            // One line per distinct dish: a repeat pick bumps the quantity
            if second.id == items[0].dish.id {
                items[0].quantity += 1;
            } else {
                items.push(CartItem {
                    dish: second,
                    quantity: 1,
                });
            }
        }

        Some(OrderCreate {
            customer_name: format!("Cliente {}", rng.gen_range(0..1000)),
            customer_phone: format!("XX9{:08}", rng.gen_range(0..100_000_000)),
            customer_address: format!("Rua Aleatória, {}", rng.gen_range(0..1000)),
            items,
            notes: rng.gen_bool(0.3).then(|| "Observação aleatória.".to_string()),
            user_id: None,
        })
    }
}

/// Periodic worker submitting feed drafts through the order service
///
/// Drafts go through [`OrderService::create_order`], so synthetic orders get
/// the same identity, total and NEW status as real checkouts and land at the
/// head of the table.
pub struct OrderSimulator {
    dishes: DishRepository,
    orders: Arc<OrderService>,
    feed: Arc<dyn OrderFeed>,
    interval: Duration,
}

impl OrderSimulator {
    pub fn new(
        store: Arc<MemoryStore>,
        orders: Arc<OrderService>,
        feed: Arc<dyn OrderFeed>,
        interval: Duration,
    ) -> Self {
        Self {
            dishes: DishRepository::new(store),
            orders,
            feed,
            interval,
        }
    }

    /// Run one tick: ask the feed for a draft and submit it
    pub async fn tick(&self) {
        let dishes = self.dishes.find(None, None);
        if let Some(draft) = self.feed.draft(&dishes) {
            match self.orders.create_order(draft).await {
                Ok(order) => {
                    tracing::info!(order_id = %order.id, "Simulated new order");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Simulated order rejected");
                }
            }
        }
    }

    /// Spawn the worker loop; it stops when the token is cancelled
    pub fn spawn(self, shutdown: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first interval tick fires immediately; skip it so the
            // first draft happens one full interval after startup.
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = shutdown.cancelled() => break,
                    _ = ticker.tick() => self.tick().await,
                }
            }
            tracing::debug!("Order simulator stopped");
        })
    }
}
