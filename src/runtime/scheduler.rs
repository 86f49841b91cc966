use super::builder::SchedulerBuilder;
use super::queue::{Entry, ReadyQueue};
use super::state::LoopState;
use crate::task::{Runnable, Step};

use log::{debug, info};
use std::mem;
use std::thread;
use std::time::Duration;

/// A single-threaded, cooperative round-robin event loop.
///
/// `Scheduler` is responsible for:
/// - holding the tasks it was built with, in order,
/// - advancing each task one step at a time,
/// - re-queueing suspended tasks at the back of a FIFO queue,
/// - retiring a task the moment it completes.
///
/// Nothing preempts a step: each call to `advance` runs until the task's
/// next suspension point. Final values are discarded; completion is the
/// only signal the loop consumes.
///
/// # Examples
///
/// ```rust
/// use cadence::Scheduler;
/// use cadence::task;
/// use cadence::yield_now;
///
/// Scheduler::builder()
///     .task(task::from_future(async {
///         yield_now().await;
///         println!("first");
///     }))
///     .task(task::from_future(async {
///         println!("second");
///     }))
///     .build()
///     .run_loop();
/// ```
pub struct Scheduler<'a> {
    /// Initial population, in construction order.
    tasks: Vec<Box<dyn Runnable + 'a>>,

    /// Delay applied after every re-queue while draining.
    pacing: Option<Duration>,
}

impl<'a> Scheduler<'a> {
    /// Creates a scheduler over `tasks` without pacing.
    ///
    /// No task is advanced until [`run_loop`](Self::run_loop) is called.
    pub fn new<I>(tasks: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Runnable + 'a>>,
    {
        Self::with_pacing(tasks.into_iter().collect(), None)
    }

    /// Returns a [`SchedulerBuilder`] for configuring a scheduler.
    pub fn builder() -> SchedulerBuilder<'a> {
        SchedulerBuilder::new()
    }

    pub(crate) fn with_pacing(tasks: Vec<Box<dyn Runnable + 'a>>, pacing: Option<Duration>) -> Self {
        Self { tasks, pacing }
    }

    /// Number of tasks the loop will start with.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Runs every task to completion.
    ///
    /// # Execution loop
    ///
    /// 1. **Priming**: each task is advanced once in construction order.
    ///    Tasks that complete right away never enter the ready queue; the
    ///    rest are queued in the same order.
    /// 2. **Draining**: the front task is popped and advanced. A completed
    ///    task is dropped, a suspended one goes to the back of the queue,
    ///    followed by the pacing delay if one is configured.
    /// 3. **Done**: the loop returns as soon as the queue is empty.
    ///
    /// # Liveness
    ///
    /// There is no watchdog. A task that never completes, for example one
    /// waiting on a deadline that is never reached, keeps this call from
    /// ever returning.
    pub fn run_loop(self) {
        let Scheduler { mut tasks, pacing } = self;

        let total = tasks.len();
        let mut queue = ReadyQueue::with_capacity(total);
        let mut state = LoopState::Priming;
        let mut advances = 0usize;

        info!("event loop starting with {total} task(s)");

        loop {
            match state {
                LoopState::Priming => {
                    for (id, mut task) in mem::take(&mut tasks).into_iter().enumerate() {
                        advances += 1;

                        match task.run() {
                            Step::Completed(()) => debug!("task #{id} completed while priming"),
                            Step::Suspended => queue.push(Entry { id, task }),
                        }
                    }

                    debug!("priming done, {} task(s) queued", queue.len());
                }
                LoopState::Draining => {
                    if let Some(mut entry) = queue.pop() {
                        advances += 1;

                        match entry.task.run() {
                            Step::Completed(()) => debug!("task #{} completed", entry.id),
                            Step::Suspended => {
                                queue.push(entry);

                                if let Some(delay) = pacing {
                                    thread::sleep(delay);
                                }
                            }
                        }
                    }
                }
                LoopState::Done => break,
            }

            state = state.next(queue.is_empty());
        }

        info!("event loop finished: {total} task(s) completed in {advances} step(s)");
    }
}
