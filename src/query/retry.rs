use std::time::Duration;

/// Retry schedule for one fetch cycle.
///
/// `retries` counts attempts after the first one, so a policy with
/// `retries = 2` makes at most three attempts. The delay before retry `n`
/// (1-based) is `base * 2^(n-1)`, capped at `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub retries: u32,
    pub base: Duration,
    pub max: Duration,
}

impl RetryPolicy {
    /// Whether another attempt is allowed after `failures` failed attempts.
    pub fn should_retry(&self, failures: u32) -> bool {
        failures <= self.retries
    }

    /// Backoff to wait after the `failures`-th failed attempt.
    pub fn delay_for(&self, failures: u32) -> Duration {
        let exponent = failures.saturating_sub(1).min(16);
        let delay = self.base.saturating_mul(1u32 << exponent);
        delay.min(self.max)
    }
}
