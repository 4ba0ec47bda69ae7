//! Randomized delays between requests.

use std::time::Duration;

use rand::Rng;

/// Uniformly random delay in `[min, max]`, applied between consecutive fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    min: Duration,
    max: Duration,
}

impl Pacing {
    /// Create a pacing range; bounds are swapped if given in reverse.
    pub fn new(min: Duration, max: Duration) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn from_millis(min_ms: u64, max_ms: u64) -> Self {
        Self::new(Duration::from_millis(min_ms), Duration::from_millis(max_ms))
    }

    /// No delay at all.
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub fn is_disabled(&self) -> bool {
        self.max.is_zero()
    }

    /// Draw the next delay.
    pub fn next_delay(&self) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        let min_ms = self.min.as_millis() as u64;
        let max_ms = self.max.as_millis() as u64;
        Duration::from_millis(rand::rng().random_range(min_ms..=max_ms))
    }

    /// Sleep for the next delay.
    pub async fn wait(&self) {
        let delay = self.next_delay();
        if !delay.is_zero() {
            log::debug!("Waiting {} ms", delay.as_millis());
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::from_millis(1000, 3000)
    }
}
