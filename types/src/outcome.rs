//! Terminal result of a wait that did not fail.

use std::time::Duration;

/// How a wait settled when the accessor never errored.
///
/// A failing accessor is not represented here: its error is returned to the
/// caller as-is through the `Err` side of the wait's `Result`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitOutcome<T> {
    /// The accessor produced a value on tick `ticks`.
    Ready {
        value: T,
        ticks: u32,
        elapsed: Duration,
    },
    /// The timeout passed without a value being observed.
    TimedOut { ticks: u32, elapsed: Duration },
}

impl<T> WaitOutcome<T> {
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    #[must_use]
    pub const fn is_timed_out(&self) -> bool {
        matches!(self, Self::TimedOut { .. })
    }

    /// Number of accessor invocations made before settling.
    #[must_use]
    pub const fn ticks(&self) -> u32 {
        match self {
            Self::Ready { ticks, .. } | Self::TimedOut { ticks, .. } => *ticks,
        }
    }

    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        match self {
            Self::Ready { elapsed, .. } | Self::TimedOut { elapsed, .. } => *elapsed,
        }
    }

    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Ready { value, .. } => Some(value),
            Self::TimedOut { .. } => None,
        }
    }

    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> WaitOutcome<U> {
        match self {
            Self::Ready {
                value,
                ticks,
                elapsed,
            } => WaitOutcome::Ready {
                value: f(value),
                ticks,
                elapsed,
            },
            Self::TimedOut { ticks, elapsed } => WaitOutcome::TimedOut { ticks, elapsed },
        }
    }

    /// Short label for logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ready { .. } => "ready",
            Self::TimedOut { .. } => "timed_out",
        }
    }
}

impl<T> From<WaitOutcome<T>> for bool {
    fn from(outcome: WaitOutcome<T>) -> Self {
        outcome.is_ready()
    }
}
