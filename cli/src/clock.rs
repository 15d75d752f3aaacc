//! Simulator clock backed by tokio's time source
//!
//! Reads `tokio::time::Instant`, so a paused test runtime moves the
//! simulator's "now" together with its timers.

use subrogation_workflow_core::{Clock, SystemClock};
use tokio::time::Instant;

#[derive(Debug, Clone, Copy)]
pub struct TokioClock {
    origin: Instant,
    origin_epoch_ms: u64,
}

impl TokioClock {
    /// Anchored to the current wall-clock time
    pub fn new() -> Self {
        Self::starting_at(SystemClock.now_ms())
    }

    /// Anchored to a fixed epoch reading
    pub fn starting_at(epoch_ms: u64) -> Self {
        Self {
            origin: Instant::now(),
            origin_epoch_ms: epoch_ms,
        }
    }
}

impl Default for TokioClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for TokioClock {
    fn now_ms(&self) -> u64 {
        let elapsed = u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX);
        self.origin_epoch_ms.saturating_add(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_follows_paused_runtime() {
        let clock = TokioClock::starting_at(1_000);
        assert_eq!(clock.now_ms(), 1_000);

        tokio::time::advance(Duration::from_millis(2_500)).await;
        assert_eq!(clock.now_ms(), 3_500);
    }
}
