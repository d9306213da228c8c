//! Pause between fetch cycles.

use async_trait::async_trait;
use std::time::Duration;

/// Awaitable pause between two cycles.
#[async_trait]
pub trait Timer: Send + Sync {
    async fn wait(&self);
}

/// Sleeps for a fixed period.
#[derive(Debug, Clone, Copy)]
pub struct IntervalTimer {
    period: Duration,
}

impl IntervalTimer {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }
}

#[async_trait]
impl Timer for IntervalTimer {
    async fn wait(&self) {
        tokio::time::sleep(self.period).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_interval_timer_waits_full_period() {
        let timer = IntervalTimer::new(Duration::from_secs(10));
        let start = Instant::now();

        timer.wait().await;

        assert!(start.elapsed() >= Duration::from_secs(10));
    }
}
