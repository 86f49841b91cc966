use super::Scheduler;
use crate::task::Runnable;

use std::time::Duration;

/// Builder for configuring and creating a scheduler.
///
/// `SchedulerBuilder` collects the initial tasks, in the order they will be
/// primed, and the optional pacing delay applied between draining steps.
///
/// # Examples
///
/// ```rust
/// use cadence::SchedulerBuilder;
/// use cadence::time::sleep;
/// use std::time::Duration;
///
/// let scheduler = SchedulerBuilder::new()
///     .pacing(Duration::from_millis(1))
///     .task(sleep(Duration::from_millis(5)))
///     .build();
///
/// assert_eq!(scheduler.len(), 1);
/// scheduler.run_loop();
/// ```
pub struct SchedulerBuilder<'a> {
    /// Tasks in priming order.
    tasks: Vec<Box<dyn Runnable + 'a>>,

    /// Delay slept after every re-queue. `None` spins without pausing.
    pacing: Option<Duration>,
}

impl<'a> SchedulerBuilder<'a> {
    /// Creates a builder with no tasks and no pacing.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            pacing: None,
        }
    }

    /// Sets the delay slept after a suspended task is re-queued.
    ///
    /// This bounds how hard the loop spins between deadlines. It is not a
    /// precision timer. A zero duration disables pacing.
    pub fn pacing(mut self, delay: Duration) -> Self {
        self.pacing = (!delay.is_zero()).then_some(delay);
        self
    }

    /// Appends a task.
    pub fn task<R: Runnable + 'a>(mut self, task: R) -> Self {
        self.tasks.push(Box::new(task));
        self
    }

    /// Appends already boxed tasks, keeping their order.
    pub fn tasks<I>(mut self, tasks: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Runnable + 'a>>,
    {
        self.tasks.extend(tasks);
        self
    }

    /// Builds the scheduler. No task is advanced yet.
    pub fn build(self) -> Scheduler<'a> {
        Scheduler::with_pacing(self.tasks, self.pacing)
    }
}

impl Default for SchedulerBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_pacing_is_stored_as_none() {
        let builder = SchedulerBuilder::new().pacing(Duration::ZERO);

        assert_eq!(builder.pacing, None);
    }

    #[test]
    fn later_pacing_overrides_earlier() {
        let builder = SchedulerBuilder::new()
            .pacing(Duration::from_millis(5))
            .pacing(Duration::ZERO);
        assert_eq!(builder.pacing, None);

        let builder = builder.pacing(Duration::from_millis(7));
        assert_eq!(builder.pacing, Some(Duration::from_millis(7)));
    }
}
