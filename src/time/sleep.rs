use super::DeferredValue;

use std::time::{Duration, Instant};

/// Creates a deferred unit value that resolves once `duration` has elapsed.
///
/// The deadline is fixed when `sleep` is called, not on first poll.
///
/// # Examples
///
/// ```rust
/// use cadence::task;
/// use cadence::time::sleep;
/// use std::time::Duration;
///
/// let nap = task::from_future(async {
///     sleep(Duration::from_millis(10)).await;
/// });
/// ```
pub fn sleep(duration: Duration) -> DeferredValue<()> {
    sleep_until(Instant::now() + duration)
}

/// Creates a deferred unit value that resolves at `deadline`.
pub fn sleep_until(deadline: Instant) -> DeferredValue<()> {
    DeferredValue::new("sleep", deadline, ())
}
