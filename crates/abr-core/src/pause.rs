//! Inclusive pause range in whole seconds, with uniform jitter.
//!
//! Used both for the retry backoff and for the pause between accounts,
//! so the two share one validation and sampling path.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// An inclusive `[min, max]` pause range in seconds.
///
/// Serializes as a two-element array (`pause_between_attempts = [3, 10]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseRange(pub u64, pub u64);

impl PauseRange {
    pub fn min_secs(&self) -> u64 {
        self.0
    }

    pub fn max_secs(&self) -> u64 {
        self.1
    }

    /// Whether min <= max.
    pub fn is_ordered(&self) -> bool {
        self.0 <= self.1
    }

    /// Draw a uniformly random duration from the inclusive range.
    /// A reversed range samples between the same two bounds instead of
    /// panicking; validation still rejects it up front as a config fault.
    pub fn duration(&self) -> Duration {
        let (min, max) = if self.0 <= self.1 {
            (self.0, self.1)
        } else {
            (self.1, self.0)
        };
        let secs = rand::thread_rng().gen_range(min..=max);
        Duration::from_secs(secs)
    }

    /// Sleep for a random duration drawn from the range.
    pub async fn sleep(&self) {
        let d = self.duration();
        tokio::time::sleep(d).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_range_is_ordered() {
        assert!(PauseRange(1, 5).is_ordered());
        assert!(PauseRange(3, 3).is_ordered());
        assert!(!PauseRange(5, 1).is_ordered());
    }

    #[test]
    fn duration_stays_within_bounds() {
        let range = PauseRange(2, 7);
        for _ in 0..100 {
            let d = range.duration();
            assert!(d >= Duration::from_secs(2));
            assert!(d <= Duration::from_secs(7));
        }
    }

    #[test]
    fn degenerate_range_is_exact() {
        let range = PauseRange(4, 4);
        assert_eq!(range.duration(), Duration::from_secs(4));
    }

    #[test]
    fn zero_range_is_instant() {
        let range = PauseRange(0, 0);
        assert_eq!(range.duration(), Duration::ZERO);
    }

    #[test]
    fn reversed_range_samples_between_bounds() {
        let range = PauseRange(7, 2);
        assert!(!range.is_ordered());
        for _ in 0..100 {
            let d = range.duration();
            assert!(d >= Duration::from_secs(2));
            assert!(d <= Duration::from_secs(7));
        }
    }
}
