//! Minimum idle time between consecutive translation API calls.

use std::time::Duration;

use tokio::sync::{Mutex, MutexGuard};
use tokio::time::Instant;

pub(crate) struct Throttle {
    min_interval: Duration,
    last_done: Mutex<Option<Instant>>,
}

/// Held for the duration of one API call. Dropping it records the instant
/// the call finished, which the next [`Throttle::wait`] measures from.
#[must_use = "the call is only spaced correctly while the permit is held"]
pub(crate) struct ThrottlePermit<'a> {
    last_done: MutexGuard<'a, Option<Instant>>,
}

impl Drop for ThrottlePermit<'_> {
    fn drop(&mut self) {
        *self.last_done = Some(Instant::now());
    }
}

impl Throttle {
    pub(crate) fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_done: Mutex::new(None),
        }
    }

    /// Waits until at least `min_interval` has passed since the previous
    /// call finished, then returns a permit for the next call. Calls are
    /// serialized while a permit is held.
    pub(crate) async fn wait(&self) -> ThrottlePermit<'_> {
        let last_done = self.last_done.lock().await;
        if let Some(previous) = *last_done {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }
        ThrottlePermit { last_done }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn first_call_does_not_wait() {
        let throttle = Throttle::new(Duration::from_secs(1));
        let start = Instant::now();
        drop(throttle.wait().await);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn consecutive_calls_are_spaced_by_min_interval() {
        let throttle = Throttle::new(Duration::from_secs(1));
        let start = Instant::now();
        drop(throttle.wait().await);
        drop(throttle.wait().await);
        drop(throttle.wait().await);
        assert!(start.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn interval_counts_from_when_the_call_finished() {
        let throttle = Throttle::new(Duration::from_millis(500));
        let permit = throttle.wait().await;
        // A slow call must not eat into the pause.
        tokio::time::sleep(Duration::from_millis(400)).await;
        drop(permit);

        let finished = Instant::now();
        drop(throttle.wait().await);
        assert!(finished.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn no_wait_when_interval_already_elapsed() {
        let throttle = Throttle::new(Duration::from_millis(500));
        drop(throttle.wait().await);
        tokio::time::sleep(Duration::from_secs(1)).await;
        let before = Instant::now();
        drop(throttle.wait().await);
        assert_eq!(before.elapsed(), Duration::ZERO);
    }
}
