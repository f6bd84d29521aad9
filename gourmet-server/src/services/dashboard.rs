//! Dashboard service
//!
//! Aggregate queries over the order table: rolling per-day counts and
//! revenue for a requested window, status breakdown, and today's headline
//! numbers. Revenue always excludes CANCELED orders.

use std::sync::Arc;

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use shared::models::{
    DashboardSummary, Order, OrderStatus, OrdersPerDay, RevenuePerDay, StatusCount,
};

use super::Latency;
use crate::db::MemoryStore;
use crate::db::repository::OrderRepository;

/// Default rolling window for the per-day series
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

pub struct DashboardService {
    orders: OrderRepository,
    latency: Latency,
}

impl DashboardService {
    pub fn new(store: Arc<MemoryStore>, latency: Latency) -> Self {
        Self {
            orders: OrderRepository::new(store),
            latency,
        }
    }

    /// Orders placed per day over the window, oldest day first
    pub async fn orders_per_day(&self, days: u32) -> Vec<OrdersPerDay> {
        self.latency.simulate().await;
        let orders = self.orders.all();
        let today = Utc::now().date_naive();

        let mut series: Vec<OrdersPerDay> = (0..days.max(1))
            .map(|i| {
                let date = today - Duration::days(i as i64);
                let count = orders.iter().filter(|o| o.created_on() == date).count() as u64;
                OrdersPerDay { date, count }
            })
            .collect();
        series.reverse();
        series
    }

    /// Revenue collected per day over the window, oldest day first.
    /// CANCELED orders never count towards revenue.
    pub async fn revenue_per_day(&self, days: u32) -> Vec<RevenuePerDay> {
        self.latency.simulate().await;
        let orders = self.orders.all();
        let today = Utc::now().date_naive();

        let mut series: Vec<RevenuePerDay> = (0..days.max(1))
            .map(|i| {
                let date = today - Duration::days(i as i64);
                let revenue = orders
                    .iter()
                    .filter(|o| o.created_on() == date && o.status != OrderStatus::Canceled)
                    .map(|o| o.total_amount)
                    .sum();
                RevenuePerDay { date, revenue }
            })
            .collect();
        series.reverse();
        series
    }

    /// Order count per status; every status appears, zeroes included
    pub async fn orders_by_status(&self) -> Vec<StatusCount> {
        self.latency.simulate().await;
        let orders = self.orders.all();

        OrderStatus::ALL
            .into_iter()
            .map(|status| StatusCount {
                status,
                count: orders.iter().filter(|o| o.status == status).count() as u64,
            })
            .collect()
    }

    /// Today's order count and revenue, plus the pending backlog
    pub async fn summary(&self) -> DashboardSummary {
        self.latency.simulate().await;
        let orders = self.orders.all();
        let today = Utc::now().date_naive();

        let today_orders: Vec<&Order> =
            orders.iter().filter(|o| o.created_on() == today).collect();
        let revenue_today: Decimal = today_orders
            .iter()
            .filter(|o| o.status != OrderStatus::Canceled)
            .map(|o| o.total_amount)
            .sum();
        let pending_orders = orders
            .iter()
            .filter(|o| matches!(o.status, OrderStatus::New | OrderStatus::Preparing))
            .count() as u64;

        DashboardSummary {
            total_orders_today: today_orders.len() as u64,
            revenue_today,
            pending_orders,
        }
    }
}
