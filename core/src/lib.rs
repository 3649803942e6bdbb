//! Polling waiter for Awaiter.
//!
//! Waits until a caller-supplied accessor returns a value, the timeout passes,
//! or the accessor fails:
//!
//! ```text
//! start --interval--> tick 1 --interval--> tick 2 ... --> Ready | TimedOut | Err(accessor error)
//! ```
//!
//! - [`poll_until`] is the full state machine and reports a [`WaitOutcome`].
//! - [`wait_for_value`] folds the outcome into `Ok(true)` / `Ok(false)`.
//! - [`wait_for`] and [`wait_for_some`] take accessors that cannot fail.
//! - [`blocking`] mirrors the async waiters for callers without a runtime.
//!
//! The async waiters run on tokio's timer and never block the executor.

pub mod blocking;
mod poll;
mod waiter;

pub use awaiter_types::{WaitConfig, WaitConfigError, WaitOutcome};
pub use poll::{poll_until, wait_for, wait_for_some, wait_for_value};
pub use waiter::ValueWaiter;
