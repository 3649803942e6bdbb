//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::sync::{
    Arc,
    atomic::{AtomicU32, Ordering},
};

use awaiter_core::WaitConfig;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install a test-writer subscriber once; `RUST_LOG` controls verbosity.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(env_filter)
        .try_init();
}

pub fn config(check_interval_ms: u64, timeout_ms: u64) -> WaitConfig {
    WaitConfig::from_millis(check_interval_ms, timeout_ms).expect("valid test config")
}

/// Error type whose identity survives the trip through a wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorError(pub &'static str);

/// Thread-safe invocation counter shared between an accessor and its test.
#[derive(Debug, Clone, Default)]
pub struct CallCounter(Arc<AtomicU32>);

impl CallCounter {
    /// Record one call and return its 1-based index.
    pub fn hit(&self) -> u32 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn count(&self) -> u32 {
        self.0.load(Ordering::SeqCst)
    }
}
