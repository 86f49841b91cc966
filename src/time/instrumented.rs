use crate::clock::{Clock, SystemClock};
use crate::task::{Resumable, Step};

use std::time::{Duration, Instant};

/// Wraps a task and measures how it reaches completion.
///
/// The wrapped task completes with a tuple containing:
/// - the output of the inner task,
/// - a [`Report`] with the number of `advance` calls and the elapsed time.
///
/// Timing starts on the **first advance**, not at construction time.
///
/// # Examples
///
/// ```rust
/// use cadence::task::{self, Resumable, Step};
/// use cadence::time::instrumented;
///
/// let mut task = instrumented(task::from_fn(0, |n: &mut u32| {
///     *n += 1;
///     if *n == 3 { Step::Completed(*n) } else { Step::Suspended }
/// }));
///
/// assert_eq!(task.advance(None), Step::Suspended);
/// assert_eq!(task.advance(None), Step::Suspended);
///
/// let Step::Completed((value, report)) = task.advance(None) else { panic!() };
/// assert_eq!(value, 3);
/// assert_eq!(report.advances, 3);
/// ```
pub fn instrumented<R>(task: R) -> Instrumented<R> {
    Instrumented::new(task, SystemClock)
}

/// Like [`instrumented`], but reads time from `clock`.
pub fn instrumented_with_clock<R, C: Clock>(task: R, clock: C) -> Instrumented<R, C> {
    Instrumented::new(task, clock)
}

/// How a task reached completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Number of `advance` calls, the completing one included.
    pub advances: usize,

    /// Time between the first advance and completion.
    pub elapsed: Duration,
}

/// A task that measures another task.
///
/// Dropping it before completion discards the measurement.
pub struct Instrumented<R, C = SystemClock> {
    /// The wrapped task.
    task: R,

    clock: C,

    /// Instant of the first advance.
    start: Option<Instant>,

    advances: usize,
}

impl<R, C> Instrumented<R, C> {
    fn new(task: R, clock: C) -> Self {
        Self {
            task,
            clock,
            start: None,
            advances: 0,
        }
    }
}

impl<R, C> Resumable for Instrumented<R, C>
where
    R: Resumable,
    C: Clock,
{
    type Output = (R::Output, Report);

    fn advance(&mut self, input: Option<()>) -> Step<Self::Output> {
        let start = *self.start.get_or_insert_with(|| self.clock.now());
        self.advances += 1;

        match self.task.advance(input) {
            Step::Suspended => Step::Suspended,
            Step::Completed(output) => {
                let report = Report {
                    advances: self.advances,
                    elapsed: self.clock.now() - start,
                };
                Step::Completed((output, report))
            }
        }
    }
}
