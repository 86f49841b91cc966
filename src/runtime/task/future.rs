use super::{Resumable, Step};

use log::debug;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll, Waker};

/// Wraps a future so it can be driven as a task.
///
/// Every `advance` polls the future exactly once. `async` blocks compile
/// down to state machines with one suspension point per `.await` that
/// returns `Pending`, which is exactly the contract of a task.
///
/// The scheduler re-polls suspended tasks on its own turn, so wake-ups are
/// not tracked and the future is polled with a no-op waker.
///
/// # Examples
///
/// ```rust
/// use cadence::task::{self, Resumable, Step};
/// use cadence::yield_now;
///
/// let mut task = task::from_future(async {
///     yield_now().await;
///     7
/// });
///
/// assert_eq!(task.advance(None), Step::Suspended);
/// assert_eq!(task.advance(None), Step::Completed(7));
/// ```
pub fn from_future<F: Future>(future: F) -> FutureTask<F> {
    FutureTask {
        future: Some(Box::pin(future)),
    }
}

/// A task backed by a future. See [`from_future`].
pub struct FutureTask<F> {
    /// The underlying future, dropped as soon as it completes.
    future: Option<Pin<Box<F>>>,
}

impl<F> FutureTask<F> {
    /// Returns `true` once the future has produced its output.
    pub fn is_terminated(&self) -> bool {
        self.future.is_none()
    }
}

impl<F: Future> Resumable for FutureTask<F> {
    type Output = F::Output;

    fn advance(&mut self, _input: Option<()>) -> Step<F::Output> {
        let Some(future) = self.future.as_mut() else {
            panic!("future task advanced after completion");
        };

        let mut cx = Context::from_waker(Waker::noop());

        match future.as_mut().poll(&mut cx) {
            Poll::Pending => {
                debug!("future task suspended");
                Step::Suspended
            }
            Poll::Ready(output) => {
                self.future = None;
                Step::Completed(output)
            }
        }
    }
}
