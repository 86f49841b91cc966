use super::{Resumable, Step};

use log::debug;
use std::mem;

/// A task that forwards to a nested task and finishes with a continuation.
///
/// Created by [`Resumable::then`].
pub struct Then<R, F> {
    inner: R,

    /// Taken when the inner task completes.
    f: Option<F>,
}

impl<R, F> Then<R, F> {
    pub(crate) fn new(inner: R, f: F) -> Self {
        Self { inner, f: Some(f) }
    }
}

impl<R, F, U> Resumable for Then<R, F>
where
    R: Resumable,
    F: FnOnce(R::Output) -> U,
{
    type Output = U;

    fn advance(&mut self, input: Option<()>) -> Step<U> {
        let Some(f) = self.f.take() else {
            panic!("`Then` advanced after completion");
        };

        match self.inner.advance(input) {
            Step::Suspended => {
                debug!("delegating task suspended");
                self.f = Some(f);
                Step::Suspended
            }
            Step::Completed(value) => Step::Completed(f(value)),
        }
    }
}

/// A task that runs two tasks back to back, the second built from the
/// final value of the first.
///
/// Created by [`Resumable::and_then`].
pub struct AndThen<R, F, N> {
    phase: Phase<R, F, N>,
}

enum Phase<R, F, N> {
    First { inner: R, f: F },
    Second(N),
    Done,
}

impl<R, F, N> AndThen<R, F, N> {
    pub(crate) fn new(inner: R, f: F) -> Self {
        Self {
            phase: Phase::First { inner, f },
        }
    }
}

impl<R, F, N> Resumable for AndThen<R, F, N>
where
    R: Resumable,
    F: FnOnce(R::Output) -> N,
    N: Resumable,
{
    type Output = N::Output;

    fn advance(&mut self, mut input: Option<()>) -> Step<N::Output> {
        loop {
            match &mut self.phase {
                Phase::First { inner, .. } => match inner.advance(input.take()) {
                    Step::Suspended => {
                        debug!("chained task suspended in first half");
                        return Step::Suspended;
                    }
                    Step::Completed(value) => {
                        let Phase::First { f, .. } = mem::replace(&mut self.phase, Phase::Done)
                        else {
                            unreachable!();
                        };

                        debug!("first half of chained task completed, starting second");
                        self.phase = Phase::Second(f(value));
                    }
                },
                Phase::Second(next) => {
                    let step = next.advance(input.take());
                    match step {
                        Step::Suspended => debug!("chained task suspended in second half"),
                        Step::Completed(_) => self.phase = Phase::Done,
                    }
                    return step;
                }
                Phase::Done => panic!("`AndThen` advanced after completion"),
            }
        }
    }
}
