//! Request fencing for overlapping fetches
//!
//! The list pages re-fetch on every filter change, and overlapping mock
//! calls may resolve out of order. Without a guard a slow early response
//! would overwrite a fresher one. Each fetch takes a token from the
//! sequencer before starting; only the response holding the latest issued
//! token may be applied.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct FetchSequencer {
    latest: AtomicU64,
}

impl FetchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the token for a fetch about to start. Tokens increase
    /// monotonically; issuing a new one invalidates all earlier ones.
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether the token still belongs to the most recently issued fetch
    pub fn is_current(&self, token: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == token
    }

    /// Run `apply` only when the token is current; reports whether it ran
    pub fn apply_if_current<F: FnOnce()>(&self, token: u64, apply: F) -> bool {
        if self.is_current(token) {
            apply();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_latest_token_is_current() {
        let sequencer = FetchSequencer::new();
        let first = sequencer.issue();
        let second = sequencer.issue();

        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }

    #[test]
    fn stale_response_is_dropped_regardless_of_completion_order() {
        let sequencer = FetchSequencer::new();
        let slow = sequencer.issue();
        let fresh = sequencer.issue();

        let mut applied = Vec::new();

        // The fresh fetch resolves first...
        assert!(sequencer.apply_if_current(fresh, || applied.push("fresh")));
        // ...then the slow one arrives late and must be ignored
        assert!(!sequencer.apply_if_current(slow, || applied.push("slow")));

        assert_eq!(applied, ["fresh"]);
    }

    #[test]
    fn tokens_increase_monotonically() {
        let sequencer = FetchSequencer::new();
        let mut previous = 0;
        for _ in 0..100 {
            let token = sequencer.issue();
            assert!(token > previous);
            previous = token;
        }
    }
}
