use super::{Resumable, Step};

use log::debug;

/// Creates a task from a step function and the state it resumes.
///
/// Each `advance` re-enters `step` with mutable access to `state`, which
/// plays the role of a generator's saved locals. The function returns
/// [`Step::Suspended`] at every suspension point and
/// [`Step::Completed`] once it is done.
///
/// # Examples
///
/// ```rust
/// use cadence::task::{self, Resumable, Step};
///
/// let mut countdown = task::from_fn(3u32, |left| {
///     if *left == 0 {
///         return Step::Completed("liftoff");
///     }
///     *left -= 1;
///     Step::Suspended
/// });
///
/// for _ in 0..3 {
///     assert_eq!(countdown.advance(None), Step::Suspended);
/// }
/// assert_eq!(countdown.advance(None), Step::Completed("liftoff"));
/// ```
pub fn from_fn<S, F, T>(state: S, step: F) -> FromFn<S, F>
where
    F: FnMut(&mut S) -> Step<T>,
{
    FromFn {
        state,
        step,
        done: false,
    }
}

/// A task driven by a step function. See [`from_fn`].
pub struct FromFn<S, F> {
    state: S,
    step: F,
    done: bool,
}

impl<S, F, T> Resumable for FromFn<S, F>
where
    F: FnMut(&mut S) -> Step<T>,
{
    type Output = T;

    fn advance(&mut self, _input: Option<()>) -> Step<T> {
        assert!(!self.done, "generator task advanced after completion");

        let step = (self.step)(&mut self.state);
        match step {
            Step::Suspended => debug!("generator task suspended"),
            Step::Completed(_) => self.done = true,
        }
        step
    }
}
