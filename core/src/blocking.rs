//! Thread-blocking counterparts of the async waiters for callers without a runtime.
//!
//! Ticks follow the same order and timeout rule as the async waiter. The
//! calling thread sleeps between ticks. Tick `n` is scheduled `n` intervals
//! after the start; when the accessor overruns a tick, the next one fires
//! right away and the schedule continues from there.

use std::{
    convert::Infallible,
    thread,
    time::{Duration, Instant},
};

use awaiter_types::{WaitConfig, WaitOutcome};

/// Lateness tolerated before a tick counts as missed (tokio uses the same).
const MISSED_TICK_SLACK: Duration = Duration::from_millis(5);

/// Blocking version of [`crate::poll_until`].
pub fn poll_until<T, E, F>(mut accessor: F, config: WaitConfig) -> Result<WaitOutcome<T>, E>
where
    F: FnMut() -> Result<Option<T>, E>,
{
    let period = config.check_interval();
    let timeout = config.timeout();
    let start = Instant::now();
    // Offsets from `start`; saturating so huge intervals never overflow `Instant`.
    let mut next_tick = period;
    let mut ticks: u32 = 0;

    loop {
        thread::sleep(next_tick.saturating_sub(start.elapsed()));
        let fired = start.elapsed();
        next_tick = if fired > next_tick.saturating_add(MISSED_TICK_SLACK) {
            fired.saturating_add(period)
        } else {
            next_tick.saturating_add(period)
        };
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

/// Blocking version of [`crate::wait_for_value`].
pub fn wait_for_value<T, E, F>(accessor: F, config: WaitConfig) -> Result<bool, E>
where
    F: FnMut() -> Result<Option<T>, E>,
{
    poll_until(accessor, config).map(bool::from)
}

/// Blocking version of [`crate::wait_for`].
pub fn wait_for<T, F>(mut accessor: F, config: WaitConfig) -> bool
where
    F: FnMut() -> Option<T>,
{
    let Ok(outcome) = poll_until(|| Ok::<_, Infallible>(accessor()), config);
    outcome.is_ready()
}
