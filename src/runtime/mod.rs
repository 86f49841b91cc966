//! Core runtime components.
//!
//! This module contains the event loop and the task protocol it drives.
//!
//! It is responsible for:
//! - defining what it means for a task to be resumable,
//! - queueing suspended tasks in round-robin order,
//! - driving every task to completion on the current thread,
//! - enabling cooperative yielding from `async` tasks.

mod queue;
mod scheduler;
mod state;

pub(crate) mod builder;
pub(crate) mod yield_now;

pub mod task;

pub use scheduler::Scheduler;
