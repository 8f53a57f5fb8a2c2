//! Fixed pause between consecutive service calls.

use std::time::Duration;

/// Sleeps for a fixed delay after each ontology search.
///
/// A zero delay disables pacing entirely; no timer is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacer {
    delay: Duration,
}

impl Pacer {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::Instant;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn pause_waits_for_delay() {
        let start = Instant::now();
        Pacer::new(Duration::from_millis(50)).pause().await;
        assert_eq!(start.elapsed(), Duration::from_millis(50));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_delay_does_not_wait() {
        let start = Instant::now();
        Pacer::new(Duration::ZERO).pause().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
