/// Phases of a single [`run_loop`](crate::Scheduler::run_loop) call.
///
/// `Priming → Draining` happens unconditionally after the first pass,
/// `Draining → Done` once the ready queue is empty. There is no way out of
/// `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopState {
    /// Every task is advanced once, in construction order.
    Priming,

    /// Tasks are served round-robin from the ready queue.
    Draining,

    /// Every task has completed.
    Done,
}

impl LoopState {
    /// Computes the state that follows `self`.
    pub(crate) fn next(self, queue_empty: bool) -> Self {
        match self {
            LoopState::Priming => LoopState::Draining,
            LoopState::Draining if queue_empty => LoopState::Done,
            LoopState::Draining => LoopState::Draining,
            LoopState::Done => LoopState::Done,
        }
    }
}
