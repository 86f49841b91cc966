use super::{AndThen, Then};

use std::task::Poll;

/// The outcome of advancing a task by one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "a completed task must not be advanced again"]
pub enum Step<T> {
    /// The task did one unit of work and wants another turn.
    Suspended,

    /// The task finished with a final value. It must never be advanced again.
    Completed(T),
}

impl<T> Step<T> {
    pub fn is_suspended(&self) -> bool {
        matches!(self, Step::Suspended)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Step::Completed(_))
    }

    /// Maps the final value, leaving `Suspended` untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Step<U> {
        match self {
            Step::Suspended => Step::Suspended,
            Step::Completed(value) => Step::Completed(f(value)),
        }
    }
}

impl<T> From<Poll<T>> for Step<T> {
    fn from(poll: Poll<T>) -> Self {
        match poll {
            Poll::Pending => Step::Suspended,
            Poll::Ready(value) => Step::Completed(value),
        }
    }
}

/// A suspendable computation that can be resumed one step at a time.
///
/// This is the contract the [`Scheduler`](crate::Scheduler) depends on. How a
/// task reaches its suspension points is up to the implementation: a
/// hand-written state machine, a nested [`DeferredValue`] it forwards to, or
/// a Rust `async` block driven through [`from_future`](super::from_future).
///
/// A task that delegates to a nested resumable reports `Suspended` while
/// the nested one does, and carries on with its own logic inside the same
/// call as soon as the nested one completes.
///
/// [`DeferredValue`]: crate::time::DeferredValue
pub trait Resumable {
    /// The final value produced on completion.
    type Output;

    /// Runs the task until its next suspension point or until it finishes.
    ///
    /// `input` is a value sent into the task as it resumes. None of the
    /// tasks in this crate consume it and the scheduler always passes
    /// `None`.
    ///
    /// # Panics
    ///
    /// Adapters in this crate panic when advanced after returning
    /// [`Step::Completed`].
    fn advance(&mut self, input: Option<()>) -> Step<Self::Output>;

    /// Runs `f` on the final value as part of the completing step.
    fn then<F, U>(self, f: F) -> Then<Self, F>
    where
        Self: Sized,
        F: FnOnce(Self::Output) -> U,
    {
        Then::new(self, f)
    }

    /// Builds a second task from the final value and drives it to completion.
    ///
    /// The second task is advanced in the same step that completes the
    /// first one.
    fn and_then<F, N>(self, f: F) -> AndThen<Self, F, N>
    where
        Self: Sized,
        F: FnOnce(Self::Output) -> N,
        N: Resumable,
    {
        AndThen::new(self, f)
    }
}

impl<R: Resumable + ?Sized> Resumable for Box<R> {
    type Output = R::Output;

    fn advance(&mut self, input: Option<()>) -> Step<Self::Output> {
        (**self).advance(input)
    }
}

/// A task whose final value has been erased.
///
/// The `Runnable` trait abstracts the specific output type of a task,
/// allowing the scheduler to manage a heterogeneous collection of tasks
/// through `Box<dyn Runnable>`. Every [`Resumable`] is a `Runnable`.
pub trait Runnable {
    /// Advances the task by one step, discarding its final value.
    fn run(&mut self) -> Step<()>;
}

impl<R: Resumable> Runnable for R {
    fn run(&mut self) -> Step<()> {
        self.advance(None).map(drop)
    }
}
