//! Order status lifecycle
//!
//! The fulfillment pipeline runs NEW → PREPARING → SENT → DELIVERED, with
//! CANCELED as the terminal escape hatch. Which jumps an attendant may make
//! is an explicit, swappable policy rather than a hard-coded rule, so the
//! permissive default and the strict variant can both be selected from
//! configuration.

use shared::models::OrderStatus;

/// Which status transitions an attendant may apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPolicy {
    /// Any status is reachable from any other, including backwards jumps.
    /// This is the default: attendants keep full override authority.
    #[default]
    Unrestricted,
    /// Only forward progression along the pipeline; CANCELED only while the
    /// order has not left the kitchen (NEW or PREPARING); DELIVERED and
    /// CANCELED are terminal.
    ForwardOnly,
}

impl TransitionPolicy {
    pub fn allows(&self, from: OrderStatus, to: OrderStatus) -> bool {
        match self {
            TransitionPolicy::Unrestricted => true,
            TransitionPolicy::ForwardOnly => match (from, to) {
                (OrderStatus::New | OrderStatus::Preparing, OrderStatus::Canceled) => true,
                (_, OrderStatus::Canceled) => false,
                (OrderStatus::Canceled | OrderStatus::Delivered, _) => false,
                (from, to) => rank(to) > rank(from),
            },
        }
    }
}

/// Position along the fulfillment pipeline (CANCELED is handled separately)
fn rank(status: OrderStatus) -> u8 {
    match status {
        OrderStatus::New => 0,
        OrderStatus::Preparing => 1,
        OrderStatus::Sent => 2,
        OrderStatus::Delivered => 3,
        OrderStatus::Canceled => 4,
    }
}

impl std::str::FromStr for TransitionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unrestricted" => Ok(TransitionPolicy::Unrestricted),
            "forward-only" | "forward_only" => Ok(TransitionPolicy::ForwardOnly),
            other => Err(format!("unknown transition policy: {}", other)),
        }
    }
}
