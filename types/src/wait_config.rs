//! Polling cadence and timeout for a single wait.
//!
//! A [`WaitConfig`] can only be built with non-zero durations, so a timer
//! created from it can never be given a zero period. Durations are also
//! whole milliseconds that fit a `u64`, which is what the serialized form
//! stores, so every valid config reads back unchanged.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WaitConfigError {
    #[error("check interval must be greater than zero")]
    ZeroCheckInterval,
    #[error("timeout must be greater than zero")]
    ZeroTimeout,
    #[error("{field} must be a whole number of milliseconds")]
    FractionalMillis { field: &'static str },
    #[error("{field} exceeds the longest supported duration of u64::MAX milliseconds")]
    TooLong { field: &'static str },
}

/// How often to poll an accessor and when to give up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWaitConfig", into = "RawWaitConfig")]
pub struct WaitConfig {
    check_interval: Duration,
    timeout: Duration,
}

impl WaitConfig {
    pub const DEFAULT_CHECK_INTERVAL: Duration = Duration::from_millis(100);
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

    pub fn new(check_interval: Duration, timeout: Duration) -> Result<Self, WaitConfigError> {
        if check_interval.is_zero() {
            return Err(WaitConfigError::ZeroCheckInterval);
        }
        if timeout.is_zero() {
            return Err(WaitConfigError::ZeroTimeout);
        }
        check_whole_millis(check_interval, "check interval")?;
        check_whole_millis(timeout, "timeout")?;
        Ok(Self {
            check_interval,
            timeout,
        })
    }

    pub fn from_millis(check_interval_ms: u64, timeout_ms: u64) -> Result<Self, WaitConfigError> {
        Self::new(
            Duration::from_millis(check_interval_ms),
            Duration::from_millis(timeout_ms),
        )
    }

    /// Returns a copy with a different check interval.
    pub fn with_check_interval(self, check_interval: Duration) -> Result<Self, WaitConfigError> {
        Self::new(check_interval, self.timeout)
    }

    /// Returns a copy with a different timeout.
    pub fn with_timeout(self, timeout: Duration) -> Result<Self, WaitConfigError> {
        Self::new(self.check_interval, timeout)
    }

    #[must_use]
    pub const fn check_interval(&self) -> Duration {
        self.check_interval
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Latest point, relative to the start of a wait, at which the wait settles.
    ///
    /// The timeout is only compared at tick boundaries, so a wait that never
    /// sees a value can run for up to one extra interval. Time spent inside the
    /// accessor is not included.
    #[must_use]
    pub fn deadline_bound(&self) -> Duration {
        self.timeout.saturating_add(self.check_interval)
    }
}

fn check_whole_millis(duration: Duration, field: &'static str) -> Result<(), WaitConfigError> {
    if duration.subsec_nanos() % 1_000_000 != 0 {
        return Err(WaitConfigError::FractionalMillis { field });
    }
    if duration > Duration::from_millis(u64::MAX) {
        return Err(WaitConfigError::TooLong { field });
    }
    Ok(())
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            check_interval: Self::DEFAULT_CHECK_INTERVAL,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }
}

/// On-disk shape of [`WaitConfig`]: whole milliseconds, both optional.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawWaitConfig {
    #[serde(default = "default_check_interval_ms")]
    check_interval_ms: u64,
    #[serde(default = "default_timeout_ms")]
    timeout_ms: u64,
}

const fn default_check_interval_ms() -> u64 {
    WaitConfig::DEFAULT_CHECK_INTERVAL.as_millis() as u64
}

const fn default_timeout_ms() -> u64 {
    WaitConfig::DEFAULT_TIMEOUT.as_millis() as u64
}

impl TryFrom<RawWaitConfig> for WaitConfig {
    type Error = WaitConfigError;

    fn try_from(raw: RawWaitConfig) -> Result<Self, Self::Error> {
        Self::from_millis(raw.check_interval_ms, raw.timeout_ms)
    }
}

// Lossless: `WaitConfig::new` only admits whole milliseconds up to `u64::MAX`.
impl From<WaitConfig> for RawWaitConfig {
    fn from(config: WaitConfig) -> Self {
        Self {
            check_interval_ms: config.check_interval.as_millis() as u64,
            timeout_ms: config.timeout.as_millis() as u64,
        }
    }
}
