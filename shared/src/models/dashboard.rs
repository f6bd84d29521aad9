//! Dashboard projections
//!
//! Aggregates computed over the order table for the admin dashboard.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::OrderStatus;

/// Orders placed on one day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdersPerDay {
    pub date: NaiveDate,
    pub count: u64,
}

/// Revenue collected on one day (CANCELED orders excluded)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenuePerDay {
    pub date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
}

/// Order count for one status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: OrderStatus,
    pub count: u64,
}

/// Today's headline numbers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_orders_today: u64,
    /// Today's revenue, CANCELED orders excluded
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue_today: Decimal,
    /// Orders still waiting (NEW or PREPARING), regardless of day
    pub pending_orders: u64,
}
