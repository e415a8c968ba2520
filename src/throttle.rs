//! Request spacing policy for outbound agent calls.
//!
//! Enforces a minimum interval between consecutive acquisitions. This is a
//! spacing policy, not quota tracking: it neither counts remaining requests
//! nor backs off on failures.

use std::time::{Duration, Instant};

/// Minimum-interval throttle.
///
/// The first acquisition passes immediately; each subsequent acquisition
/// waits until at least `interval` has elapsed since the previous one.
#[derive(Debug)]
pub struct Throttle {
    interval: Duration,
    last: Option<Instant>,
}

impl Throttle {
    /// Create a throttle with the given minimum interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Wait until the next request is permitted, then mark it issued.
    pub async fn acquire(&mut self) {
        if let Some(wait) = self.delay_from(Instant::now()) {
            tokio::time::sleep(wait).await;
        }
        self.last = Some(Instant::now());
    }

    /// Remaining wait before the next acquisition is permitted, if any.
    fn delay_from(&self, now: Instant) -> Option<Duration> {
        let last = self.last?;
        let elapsed = now.duration_since(last);
        if elapsed < self.interval {
            Some(self.interval - elapsed)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_acquisition_is_immediate() {
        let throttle = Throttle::new(Duration::from_secs(2));
        assert!(throttle.delay_from(Instant::now()).is_none());
    }

    #[test]
    fn test_spacing_enforced_within_interval() {
        let mut throttle = Throttle::new(Duration::from_secs(2));
        let t0 = Instant::now();
        throttle.last = Some(t0);

        let delay = throttle.delay_from(t0 + Duration::from_millis(500)).unwrap();
        assert!(delay > Duration::from_millis(1400));
        assert!(delay <= Duration::from_millis(1500));
    }

    #[test]
    fn test_no_delay_after_interval_elapsed() {
        let mut throttle = Throttle::new(Duration::from_secs(2));
        let t0 = Instant::now();
        throttle.last = Some(t0);
        assert!(throttle.delay_from(t0 + Duration::from_secs(2)).is_none());
    }

    #[tokio::test]
    async fn test_consecutive_acquisitions_are_spaced() {
        let mut throttle = Throttle::new(Duration::from_millis(50));
        let start = Instant::now();
        throttle.acquire().await;
        throttle.acquire().await;
        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}
