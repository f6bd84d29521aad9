//! Order Model

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CartItem;

/// Order fulfillment status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    New,
    Preparing,
    Sent,
    Delivered,
    Canceled,
}

impl OrderStatus {
    /// All statuses in lifecycle order (CANCELED last)
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::New,
        OrderStatus::Preparing,
        OrderStatus::Sent,
        OrderStatus::Delivered,
        OrderStatus::Canceled,
    ];
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::New => "NEW",
            OrderStatus::Preparing => "PREPARING",
            OrderStatus::Sent => "SENT",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Canceled => "CANCELED",
        };
        write!(f, "{}", s)
    }
}

/// Order entity
///
/// `total_amount` is fixed at creation time (line totals + the delivery fee
/// in effect at that moment) and is never recomputed when dish prices or
/// settings change later.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    /// Snapshot of the cart at checkout (never empty)
    pub items: Vec<CartItem>,
    pub status: OrderStatus,
    /// Total in currency units, fixed at creation; a JSON number on the wire
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Set when placed by a signed-in user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Order {
    /// Calendar day the order was created on (UTC)
    pub fn created_on(&self) -> NaiveDate {
        self.created_at.date_naive()
    }
}

/// Create order payload (checkout submission)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Order list filters
///
/// All filters are conjunctive; omitting one leaves that dimension
/// unfiltered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderFilters {
    /// Exact status match
    pub status: Option<OrderStatus>,
    /// Creation-day match (YYYY-MM-DD)
    pub date: Option<NaiveDate>,
    /// Case-insensitive substring match on customer name, order id and phone
    #[serde(rename = "searchTerm")]
    pub search: Option<String>,
}

/// Update status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}
