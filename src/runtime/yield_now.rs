use std::future::poll_fn;
use std::task::Poll;

/// Hands control back to the scheduler for one turn.
///
/// Inside a task created with [`from_future`](crate::task::from_future),
/// each `yield_now().await` is one suspension point: the current `advance`
/// returns [`Step::Suspended`](crate::task::Step::Suspended) and the task
/// resumes after every other queued task has had its turn.
///
/// Like [`DeferredValue`](crate::time::DeferredValue), the pending poll wakes
/// its own waker. The scheduler ignores wake-ups, but an executor that only
/// re-polls woken futures still makes progress.
///
/// # Examples
///
/// ```rust
/// use cadence::yield_now;
///
/// async fn chatty() {
///     for _ in 0..3 {
///         yield_now().await;
///     }
/// }
/// ```
pub async fn yield_now() {
    let mut yielded = false;

    poll_fn(|cx| {
        if yielded {
            return Poll::Ready(());
        }

        yielded = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::pin::pin;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::task::{Context, Wake, Waker};

    struct CountingWaker(AtomicUsize);

    impl Wake for CountingWaker {
        fn wake(self: Arc<Self>) {
            self.wake_by_ref();
        }

        fn wake_by_ref(self: &Arc<Self>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn yields_once_and_wakes_itself() {
        let counter = Arc::new(CountingWaker(AtomicUsize::new(0)));
        let waker = Waker::from(counter.clone());
        let mut cx = Context::from_waker(&waker);
        let mut fut = pin!(yield_now());

        assert_eq!(fut.as_mut().poll(&mut cx), Poll::Pending);
        assert_eq!(counter.0.load(Ordering::SeqCst), 1);

        assert_eq!(fut.as_mut().poll(&mut cx), Poll::Ready(()));
        assert_eq!(counter.0.load(Ordering::SeqCst), 1);
    }
}
