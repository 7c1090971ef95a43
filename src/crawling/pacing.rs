//! Inter-request pacing policy.
//!
//! The delay is a strategy object so tests can run with zero delay without
//! changing the control flow around it.

use std::time::Duration;

/// Policy returning the pause between consecutive outbound fetches.
pub trait Pacer: Send + Sync {
    fn delay(&self) -> Duration;
}

/// Fixed delay between requests.
#[derive(Debug, Clone)]
pub struct FixedDelay(Duration);

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        Self(delay)
    }

    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }
}

impl Pacer for FixedDelay {
    fn delay(&self) -> Duration {
        self.0
    }
}

/// Sleep for the policy's delay. The pipeline halts here; nothing else is
/// in flight while the pause runs.
pub async fn pause(pacer: &dyn Pacer) {
    let delay = pacer.delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_delay_reports_its_duration() {
        let pacer = FixedDelay::from_millis(1500);
        assert_eq!(pacer.delay(), Duration::from_millis(1500));
    }

    #[tokio::test]
    async fn zero_delay_does_not_sleep() {
        let pacer = FixedDelay::new(Duration::ZERO);
        let start = std::time::Instant::now();
        pause(&pacer).await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
