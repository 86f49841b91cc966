use crate::clock::{Clock, SystemClock};
use crate::task::{Resumable, Step};

use log::trace;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;

/// A value that only becomes available once a deadline has passed.
///
/// `DeferredValue` is the single suspension primitive of the crate: every
/// timed wait funnels through it. It has no timer of its own; readiness is
/// checked against the clock each time it is polled, so progress is driven
/// entirely by the caller's cadence.
///
/// Once a poll observes the deadline, the value stays resolved for good and
/// every later poll returns the same result.
///
/// It can be driven three ways:
/// - by hand through [`poll`](Self::poll),
/// - as a task through [`Resumable`],
/// - with `.await` inside an async task through [`Future`].
///
/// # Examples
///
/// ```rust
/// use cadence::clock::{Clock, ManualClock};
/// use cadence::time::DeferredValue;
/// use std::task::Poll;
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let deadline = clock.now() + Duration::from_secs(5);
/// let mut value = DeferredValue::with_clock("answer", deadline, 42, clock.clone());
///
/// assert_eq!(value.poll(), Poll::Pending);
///
/// clock.advance(Duration::from_secs(5));
/// assert_eq!(value.poll(), Poll::Ready(42));
/// ```
#[derive(Debug, Clone)]
pub struct DeferredValue<T, C = SystemClock> {
    /// Label used in diagnostics.
    tag: String,

    /// Absolute point in time at which the value is released.
    deadline: Instant,

    /// The value to release.
    result: T,

    /// Time source consulted on every poll.
    clock: C,

    /// Latched once the deadline has been observed.
    resolved: bool,
}

impl<T> DeferredValue<T> {
    /// Creates a deferred value checked against the system clock.
    pub fn new(tag: impl Into<String>, deadline: Instant, result: T) -> Self {
        Self::with_clock(tag, deadline, result, SystemClock)
    }
}

impl<T, C: Clock> DeferredValue<T, C> {
    /// Creates a deferred value checked against `clock`.
    ///
    /// A deadline that already lies in the past is accepted; the value then
    /// resolves on its first poll.
    pub fn with_clock(tag: impl Into<String>, deadline: Instant, result: T, clock: C) -> Self {
        Self {
            tag: tag.into(),
            deadline,
            result,
            clock,
            resolved: false,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Borrows the value that will be released, ready or not.
    pub fn result(&self) -> &T {
        &self.result
    }

    /// Checks the deadline and reports whether the value is available.
    ///
    /// Emits a trace event tagged with [`tag`](Self::tag) while pending.
    pub fn is_ready(&mut self) -> bool {
        if !self.resolved && self.clock.now() >= self.deadline {
            self.resolved = true;
        }

        if !self.resolved {
            trace!("deferred `{}` polled: pending", self.tag);
        }

        self.resolved
    }

    /// Polls the deferred value.
    ///
    /// Returns `Poll::Pending` while the clock reads strictly before the
    /// deadline and `Poll::Ready` with a copy of the result afterwards.
    pub fn poll(&mut self) -> Poll<T>
    where
        T: Clone,
    {
        if self.is_ready() {
            Poll::Ready(self.result.clone())
        } else {
            Poll::Pending
        }
    }

    /// Consumes the deferred value and returns its result regardless of the
    /// deadline.
    pub fn into_result(self) -> T {
        self.result
    }
}

impl<T: Clone, C: Clock> Resumable for DeferredValue<T, C> {
    type Output = T;

    /// Maps `Pending` to `Suspended` and `Ready` to `Completed`.
    fn advance(&mut self, _input: Option<()>) -> Step<T> {
        self.poll().into()
    }
}

impl<T, C> Future for DeferredValue<T, C>
where
    T: Clone + Unpin,
    C: Clock + Unpin,
{
    type Output = T;

    /// Polls the deferred value from inside an async task.
    ///
    /// There is no timer to wake the task later, so a pending poll asks to
    /// be polled again right away.
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<T> {
        let this = self.get_mut();

        match DeferredValue::poll(this) {
            Poll::Ready(value) => Poll::Ready(value),
            Poll::Pending => {
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }
}
