//! The three sample tasks run by the `cadence` binary.
//!
//! Each task waits for its own deadline with a different suspension style
//! and then reports an [`Answer`] to a sink:
//!
//! - [`basic_task`]: a hand-written generator state machine,
//! - [`future_task`]: a [`DeferredValue`] composed with a continuation,
//! - [`async_task`]: an `async` block awaiting a [`DeferredValue`].

use crate::clock::Clock;
use crate::task::{self, Resumable, Step};
use crate::time::DeferredValue;

use log::debug;
use std::fmt;
use std::time::Instant;

pub const BASIC_ANSWER: &str = "BASIC ANSWER";
pub const FUTURE_ANSWER: &str = "FUTURE ANSWER";
pub const ASYNC_ANSWER: &str = "FUTURE ASYNC ANSWER";

/// Which sample task produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Basic,
    Future,
    Async,
}

/// The final value reported by a sample task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub kind: Kind,
    pub label: String,
    pub value: &'static str,
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            Kind::Basic => "Basic",
            Kind::Future => "Future",
            Kind::Async => "Future async",
        };

        write!(f, "{kind} task answer: {}", self.value)
    }
}

/// A generator that suspends until `deadline`, then yields `answer`.
///
/// The locals live in the struct, and `phase` records where execution
/// stopped, which is what a compiler does for a generator.
pub struct Countdown<C> {
    label: String,
    deadline: Instant,
    answer: &'static str,
    clock: C,
    phase: Phase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Waiting,
    Finished,
}

impl<C: Clock> Countdown<C> {
    pub fn new(label: impl Into<String>, deadline: Instant, answer: &'static str, clock: C) -> Self {
        Self {
            label: label.into(),
            deadline,
            answer,
            clock,
            phase: Phase::Waiting,
        }
    }
}

impl<C: Clock> Resumable for Countdown<C> {
    type Output = &'static str;

    fn advance(&mut self, _input: Option<()>) -> Step<&'static str> {
        match self.phase {
            Phase::Waiting if self.clock.now() < self.deadline => {
                debug!("coroutine iteration: {}", self.label);
                Step::Suspended
            }
            Phase::Waiting => {
                self.phase = Phase::Finished;
                Step::Completed(self.answer)
            }
            Phase::Finished => panic!("countdown `{}` advanced after completion", self.label),
        }
    }
}

/// The generator-based sample task.
pub fn basic_task<C, S>(
    label: &str,
    deadline: Instant,
    clock: C,
    mut sink: S,
) -> impl Resumable<Output = ()> + use<C, S>
where
    C: Clock,
    S: FnMut(Answer),
{
    let label = label.to_owned();

    Countdown::new(label.clone(), deadline, BASIC_ANSWER, clock).then(move |value| {
        sink(Answer {
            kind: Kind::Basic,
            label,
            value,
        })
    })
}

/// The sample task that delegates to a deferred value.
pub fn future_task<C, S>(
    label: &str,
    deadline: Instant,
    clock: C,
    mut sink: S,
) -> impl Resumable<Output = ()> + use<C, S>
where
    C: Clock,
    S: FnMut(Answer),
{
    let label = label.to_owned();

    DeferredValue::with_clock(label.clone(), deadline, FUTURE_ANSWER, clock).then(move |value| {
        sink(Answer {
            kind: Kind::Future,
            label,
            value,
        })
    })
}

/// The sample task written with `async` / `.await`.
pub fn async_task<C, S>(
    label: &str,
    deadline: Instant,
    clock: C,
    mut sink: S,
) -> impl Resumable<Output = ()> + use<C, S>
where
    C: Clock + Unpin,
    S: FnMut(Answer),
{
    let label = label.to_owned();

    task::from_future(async move {
        let value = DeferredValue::with_clock(label.clone(), deadline, ASYNC_ANSWER, clock).await;

        sink(Answer {
            kind: Kind::Async,
            label,
            value,
        });
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use std::time::Duration;

    #[test]
    fn countdown_suspends_until_deadline() {
        let clock = ManualClock::new();
        let deadline = clock.now() + Duration::from_secs(2);
        let mut countdown = Countdown::new("A", deadline, BASIC_ANSWER, clock.clone());

        assert_eq!(countdown.advance(None), Step::Suspended);
        clock.advance(Duration::from_secs(1));
        assert_eq!(countdown.advance(None), Step::Suspended);
        clock.advance(Duration::from_secs(1));
        assert_eq!(countdown.advance(None), Step::Completed(BASIC_ANSWER));
        assert_eq!(countdown.phase, Phase::Finished);
    }

    #[test]
    #[should_panic(expected = "advanced after completion")]
    fn countdown_refuses_to_resume_when_finished() {
        let clock = ManualClock::new();
        let mut countdown = Countdown::new("A", clock.now(), BASIC_ANSWER, clock.clone());

        let _ = countdown.advance(None);
        let _ = countdown.advance(None);
    }

    #[test]
    fn answers_render_like_the_binary_prints_them() {
        let answer = Answer {
            kind: Kind::Async,
            label: "C".into(),
            value: ASYNC_ANSWER,
        };

        assert_eq!(answer.to_string(), "Future async task answer: FUTURE ASYNC ANSWER");
    }
}
