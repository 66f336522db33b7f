//! Self-throttling between page requests.

use std::time::Duration;

use rand::Rng;

/// Draws a pause uniformly from `[min_ms, max_ms]`.
///
/// An inverted range collapses to `min_ms`.
#[must_use]
pub fn jittered_delay(min_ms: u64, max_ms: u64) -> Duration {
    if max_ms <= min_ms {
        return Duration::from_millis(min_ms);
    }
    let ms = rand::rng().random_range(min_ms..=max_ms);
    Duration::from_millis(ms)
}

/// Sleeps for a jittered delay. A zero-length delay returns immediately.
pub async fn pause(min_ms: u64, max_ms: u64) {
    let delay = jittered_delay(min_ms, max_ms);
    if delay.is_zero() {
        return;
    }
    tracing::debug!(delay_ms = delay.as_millis(), "throttling before next page");
    tokio::time::sleep(delay).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_stays_within_bounds() {
        for _ in 0..200 {
            let d = jittered_delay(1000, 2000);
            assert!(
                d >= Duration::from_millis(1000) && d <= Duration::from_millis(2000),
                "delay out of range: {d:?}"
            );
        }
    }

    #[test]
    fn degenerate_range_is_exact() {
        assert_eq!(jittered_delay(250, 250), Duration::from_millis(250));
        assert_eq!(jittered_delay(0, 0), Duration::ZERO);
    }

    #[test]
    fn inverted_range_uses_min() {
        assert_eq!(jittered_delay(500, 100), Duration::from_millis(500));
    }

    #[tokio::test]
    async fn zero_pause_returns_immediately() {
        let start = std::time::Instant::now();
        pause(0, 0).await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
