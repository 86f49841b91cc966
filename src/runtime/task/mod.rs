//! Resumable task primitives.
//!
//! This module defines the protocol the scheduler drives and the adapters
//! that turn different suspension styles into tasks.
//!
//! It includes:
//! - the [`Resumable`] contract and its [`Step`] outcome,
//! - the type-erased [`Runnable`] view the scheduler stores,
//! - generator tasks built from a step function ([`from_fn`]),
//! - delegating combinators ([`Then`], [`AndThen`]),
//! - future-backed tasks for `async` code ([`from_future`]).
//!
//! [`DeferredValue`](crate::time::DeferredValue) is itself a task, so any
//! of the combinators can be layered on top of a timed wait.

mod future;
mod generator;
mod protocol;
mod then;

pub use future::{FutureTask, from_future};
pub use generator::{FromFn, from_fn};
pub use protocol::{Resumable, Runnable, Step};
pub use then::{AndThen, Then};
