//! Core domain types for Awaiter.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies:
//! the validated [`WaitConfig`] and the [`WaitOutcome`] a wait settles with.

mod outcome;
mod wait_config;

pub use outcome::WaitOutcome;
pub use wait_config::{WaitConfig, WaitConfigError};
