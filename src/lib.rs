//! # Cadence
//!
//! **Cadence** is a minimal cooperative task scheduler: a single-threaded
//! event loop that resumes a fixed set of suspendable tasks round-robin
//! until every one of them has completed.
//!
//! The loop only knows one contract, [`task::Resumable`]: advance one step,
//! report `Suspended` or `Completed`. Three suspension styles plug into it:
//!
//! - **Generators**: hand-written state machines, or a step function over
//!   saved state with [`task::from_fn`]
//! - **Deferred values**: [`time::DeferredValue`] releases a value once a
//!   deadline passes and can be composed with [`Resumable::then`]
//! - **`async` / `.await`**: any future becomes a task with
//!   [`task::from_future`], one suspension point per pending poll
//!
//! Time is read through the [`clock::Clock`] trait, so deadlines can be
//! tested with a [`clock::ManualClock`] instead of real waits.
//!
//! ## Quick Start
//!
//! ```rust
//! use cadence::Scheduler;
//! use cadence::task::{self, Resumable};
//! use cadence::time::DeferredValue;
//! use std::time::{Duration, Instant};
//!
//! let deadline = Instant::now() + Duration::from_millis(20);
//!
//! Scheduler::builder()
//!     .task(DeferredValue::new("greeting", deadline, "hello").then(|word| {
//!         println!("{word}");
//!     }))
//!     .task(task::from_future(async {
//!         cadence::yield_now().await;
//!         println!("world");
//!     }))
//!     .build()
//!     .run_loop();
//! ```
//!
//! ## Modules
//!
//! - [`task`]: the task protocol and its adapters
//! - [`time`]: deferred values, sleeps and instrumentation
//! - [`clock`]: the system clock and a manual clock for tests
//! - [`demo`]: the three sample tasks run by the `cadence` binary
//!
//! ## Logging
//!
//! Diagnostics are emitted through the [`log`] facade. The library never
//! installs a logger.

mod runtime;

pub mod clock;
pub mod demo;
pub mod time;

pub use runtime::builder::SchedulerBuilder;
pub use runtime::task;
pub use runtime::yield_now::yield_now;
pub use runtime::Scheduler;

#[doc(no_inline)]
pub use runtime::task::Resumable;
