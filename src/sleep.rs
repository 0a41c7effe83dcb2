//! Async delay helper for simulating latency.

use std::time::Duration;

use thiserror::Error;

/// Returned when a delay was asked to fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("sleep of {ms}ms rejected as requested")]
pub struct SleepError {
    pub ms: u64,
}

/// Wait `ms` milliseconds, then resolve — or reject if `should_fail` is set.
///
/// The failure path waits the full delay before erroring, so a mocked slow
/// call and a mocked slow failure take the same time.
pub async fn sleep(ms: u64, should_fail: bool) -> Result<(), SleepError> {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    if should_fail {
        Err(SleepError { ms })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[tokio::test]
    async fn resolves_after_the_delay() {
        let start = Instant::now();
        assert_eq!(sleep(20, false).await, Ok(()));
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn rejects_when_asked_to() {
        let start = Instant::now();
        assert_eq!(sleep(20, true).await, Err(SleepError { ms: 20 }));
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn zero_delay_is_fine() {
        assert_eq!(sleep(0, false).await, Ok(()));
    }
}
