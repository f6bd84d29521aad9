/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a prefixed resource id, e.g. `order-9f2c63f1a0e14b5d...`
///
/// The prefix keeps ids greppable in logs and lets the order search filter
/// match on the entity kind as well as the random part.
pub fn prefixed_id(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4().simple())
}
