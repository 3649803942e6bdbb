//! Async polling of an accessor on a fixed cadence.
//!
//! # Tick order
//!
//! Each tick invokes the accessor exactly once, then:
//!
//! 1. accessor returned `Err` -> settle with that error, untouched
//! 2. accessor returned `Some` -> settle [`WaitOutcome::Ready`]
//! 3. elapsed time is strictly greater than the timeout -> settle [`WaitOutcome::TimedOut`]
//! 4. otherwise wait for the next tick
//!
//! The first tick fires one full interval after the call, never immediately.
//! The timeout is only compared on ticks, so a wait that never sees a value
//! settles somewhere in `(timeout, timeout + interval]`.
//!
//! The [`Interval`] is owned by the returned future. It is dropped when the
//! wait settles on any path, or when the caller drops the future early.

use std::{convert::Infallible, time::Duration};

use awaiter_types::{WaitConfig, WaitOutcome};
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

/// Matches the horizon tokio itself uses for deadlines that overflow `Instant`.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

fn ticker(start: Instant, period: Duration) -> Interval {
    let first_tick = start
        .checked_add(period)
        .unwrap_or_else(|| start + FAR_FUTURE);
    let mut ticker = interval_at(first_tick, period);
    // A slow accessor pushes later ticks back instead of causing a burst.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

/// Poll `accessor` until it yields a value, errors, or the timeout passes.
///
/// An accessor error is returned as-is and stops polling; the accessor is
/// never invoked again after the first error.
pub async fn poll_until<T, E, F>(mut accessor: F, config: WaitConfig) -> Result<WaitOutcome<T>, E>
where
    F: FnMut() -> Result<Option<T>, E>,
{
    let timeout = config.timeout();
    let start = Instant::now();
    let mut ticker = ticker(start, config.check_interval());
    let mut ticks: u32 = 0;

    loop {
        ticker.tick().await;
        ticks = ticks.saturating_add(1);
        tracing::trace!(
            tick = ticks,
            elapsed_ms = start.elapsed().as_millis(),
            "Polling accessor"
        );

        let polled = accessor();
        let elapsed = start.elapsed();

        let value = match polled {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(
                    tick = ticks,
                    elapsed_ms = elapsed.as_millis(),
                    "Accessor failed; stopping wait"
                );
                return Err(err);
            }
        };

        let outcome = match value {
            Some(value) => WaitOutcome::Ready {
                value,
                ticks,
                elapsed,
            },
            None if elapsed > timeout => WaitOutcome::TimedOut { ticks, elapsed },
            None => continue,
        };

        tracing::debug!(
            outcome = outcome.as_str(),
            ticks,
            elapsed_ms = elapsed.as_millis(),
            "Wait settled"
        );
        return Ok(outcome);
    }
}

/// Wait for a fallible accessor to produce a value.
///
/// Resolves `Ok(true)` once a value is seen, `Ok(false)` on timeout, and
/// `Err` with the accessor's own error if it fails.
pub async fn wait_for_value<T, E, F>(accessor: F, config: WaitConfig) -> Result<bool, E>
where
    F: FnMut() -> Result<Option<T>, E>,
{
    poll_until(accessor, config).await.map(bool::from)
}

/// Wait for an infallible accessor to produce a value.
pub async fn wait_for<T, F>(mut accessor: F, config: WaitConfig) -> bool
where
    F: FnMut() -> Option<T>,
{
    let Ok(outcome) = poll_until(|| Ok::<_, Infallible>(accessor()), config).await;
    outcome.is_ready()
}

/// Wait for an infallible accessor and hand back the value it produced.
pub async fn wait_for_some<T, F>(mut accessor: F, config: WaitConfig) -> Option<T>
where
    F: FnMut() -> Option<T>,
{
    let Ok(outcome) = poll_until(|| Ok::<_, Infallible>(accessor()), config).await;
    outcome.into_value()
}
