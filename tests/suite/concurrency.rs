//! Independent concurrent waits

use std::{thread, time::Duration};

use awaiter_core::{ValueWaiter, WaitOutcome, blocking, poll_until, wait_for_value};
use tokio::time::Instant;

use crate::common::{AccessorError, CallCounter, config, init_tracing};

#[tokio::test(start_paused = true)]
async fn concurrent_waits_keep_their_own_timing() {
    init_tracing();
    let fast_calls = CallCounter::default();
    let slow_calls = CallCounter::default();
    let fast_counter = fast_calls.clone();
    let slow_counter = slow_calls.clone();

    let fast = poll_until(
        move || Ok::<_, AccessorError>((fast_counter.hit() == 3).then_some("fast")),
        config(10, 1000),
    );
    let slow = poll_until(
        move || {
            slow_counter.hit();
            Ok::<Option<&str>, AccessorError>(None)
        },
        config(50, 200),
    );

    let (fast, slow) = tokio::join!(fast, slow);

    assert_eq!(
        fast.unwrap(),
        WaitOutcome::Ready {
            value: "fast",
            ticks: 3,
            elapsed: Duration::from_millis(30),
        }
    );
    assert_eq!(
        slow.unwrap(),
        WaitOutcome::TimedOut {
            ticks: 5,
            elapsed: Duration::from_millis(250),
        }
    );
    assert_eq!(fast_calls.count(), 3);
    assert_eq!(slow_calls.count(), 5);
}

#[tokio::test(start_paused = true)]
async fn one_failing_wait_does_not_disturb_another() {
    init_tracing();
    let waiter = ValueWaiter::new(config(10, 100));
    let ok_calls = CallCounter::default();
    let ok_counter = ok_calls.clone();
    let start = Instant::now();

    let failing = waiter.wait_for_value(|| Err::<Option<()>, _>(AccessorError("first tick")));
    let succeeding =
        waiter.wait_for_value(move || Ok::<_, AccessorError>((ok_counter.hit() == 6).then_some(())));

    let (failing, succeeding) = tokio::join!(failing, succeeding);

    assert_eq!(failing, Err(AccessorError("first tick")));
    assert_eq!(succeeding, Ok(true));
    assert_eq!(ok_calls.count(), 6);
    assert_eq!(start.elapsed(), Duration::from_millis(60));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn spawned_waits_run_on_a_multi_thread_runtime() {
    init_tracing();
    let handles: Vec<_> = (1..=4_u32)
        .map(|target| {
            let calls = CallCounter::default();
            tokio::spawn(async move {
                let counter = calls.clone();
                let ready = wait_for_value(
                    move || Ok::<_, AccessorError>((counter.hit() >= target).then_some(target)),
                    config(5, 2000),
                )
                .await;
                (ready, calls.count(), target)
            })
        })
        .collect();

    for handle in handles {
        let (ready, calls, target) = handle.await.expect("wait task panicked");
        assert_eq!(ready, Ok(true));
        assert_eq!(calls, target);
    }
}

#[test]
fn blocking_waits_on_separate_threads() {
    init_tracing();
    let ready = thread::spawn(|| {
        let calls = CallCounter::default();
        let counter = calls.clone();
        let ready = blocking::wait_for(move || (counter.hit() == 2).then_some(()), config(5, 500));
        (ready, calls.count())
    });
    let timed_out = thread::spawn(|| blocking::wait_for(|| None::<()>, config(5, 40)));

    assert_eq!(ready.join().unwrap(), (true, 2));
    assert!(!timed_out.join().unwrap());
}
