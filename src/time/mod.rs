//! Deadline-based time utilities.
//!
//! This module provides the suspension primitive of the crate and the
//! helpers built on top of it.
//!
//! It includes:
//! - [`DeferredValue`], a value released once a deadline passes,
//! - [`sleep`] and [`sleep_until`] for unit-valued waits,
//! - [`instrumented`] for measuring how long a task takes to finish.

mod deferred;
mod instrumented;
mod sleep;

#[doc(inline)]
pub use deferred::DeferredValue;

#[doc(inline)]
pub use instrumented::{Instrumented, Report, instrumented, instrumented_with_clock};

#[doc(inline)]
pub use sleep::{sleep, sleep_until};
