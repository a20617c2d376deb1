//! Async pacing across tokio tasks.

#![cfg(feature = "async")]

use std::sync::Arc;
use std::time::{Duration, Instant};
use steady_pace::infrastructure::mocks::MockClock;
use steady_pace::{AsyncPacer, Rate};

#[tokio::test]
async fn test_tasks_are_spaced_on_real_clock() {
    let pacer = Arc::new(AsyncPacer::new(200).unwrap());

    let start = Instant::now();
    let mut handles = Vec::new();
    for _ in 0..4 {
        let pacer = Arc::clone(&pacer);
        handles.push(tokio::spawn(async move {
            for _ in 0..3 {
                pacer.admit().await;
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    // 12 admissions, 11 gaps of 5ms
    assert!(start.elapsed() >= Duration::from_millis(55));
    assert_eq!(pacer.metrics().admissions(), 12);
}

#[tokio::test(start_paused = true)]
async fn test_same_arrival_queues_behind_each_other() {
    let clock = MockClock::new(Instant::now());
    let pacer = AsyncPacer::with_clock(Rate::per_second(100).unwrap(), Arc::new(clock));

    let start = tokio::time::Instant::now();
    let nominal = Instant::now();
    for _ in 0..4 {
        assert_eq!(pacer.admit_at(nominal).await, nominal);
    }

    // Admissions at +0, +10, +20 and +30ms, each measured from the same arrival
    assert!(start.elapsed() >= Duration::from_millis(60));
    assert_eq!(
        pacer.last_admitted().await,
        Some(nominal + Duration::from_millis(30))
    );
    assert_eq!(pacer.metrics().total_wait(), Duration::from_millis(60));
}

#[tokio::test(start_paused = true)]
async fn test_timeout_layered_outside() {
    let pacer = AsyncPacer::new(1).unwrap();
    let now = Instant::now();
    pacer.admit_at(now).await;

    let outcome = tokio::time::timeout(Duration::from_millis(100), pacer.admit_at(now)).await;
    assert!(outcome.is_err());

    // The abandoned admission did not take the slot
    assert_eq!(pacer.last_admitted().await, Some(now));
    assert_eq!(pacer.metrics().admissions(), 1);
}
