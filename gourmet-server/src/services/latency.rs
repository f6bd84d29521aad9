//! Artificial latency
//!
//! The mock backend resolves every operation after a fixed delay to mimic a
//! network round-trip. Tests construct services with [`Latency::ZERO`].

use std::time::Duration;

/// Fixed delay applied before each mock API operation resolves
#[derive(Debug, Clone, Copy)]
pub struct Latency(Duration);

impl Latency {
    pub const ZERO: Latency = Latency(Duration::ZERO);

    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }

    pub async fn simulate(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}
