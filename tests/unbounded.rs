//! The no-op limiter.

use std::time::{Duration, Instant};
use steady_pace::{Limiter, RateLimit, Unbounded};

#[test]
fn test_unbounded_adds_no_latency() {
    let limiter = steady_pace::new_unbounded();

    // Best of a few rounds so a single preemption does not fail the run
    let fastest = (0..5)
        .map(|_| {
            let start = Instant::now();
            for _ in 0..1000 {
                limiter.admit();
            }
            start.elapsed()
        })
        .min()
        .unwrap();

    assert!(
        fastest < Duration::from_millis(1),
        "1000 admissions took {:?}",
        fastest
    );
}

#[test]
fn test_unbounded_admit_at_reports_current_time() {
    let limiter = Unbounded::new();
    let stale = Instant::now();
    std::thread::sleep(Duration::from_millis(2));

    let returned = limiter.admit_at(stale);
    assert!(returned >= stale + Duration::from_millis(2));
}

#[test]
fn test_same_code_path_for_both_variants() {
    fn drive(limiter: &RateLimit, n: usize) -> usize {
        (0..n).map(|_| limiter.admit()).count()
    }

    let unbounded = steady_pace::new_unbounded();
    let paced = steady_pace::new(10_000).unwrap();

    assert_eq!(drive(&unbounded, 10), 10);
    assert_eq!(drive(&paced, 10), 10);
    assert_eq!(paced.metrics().admissions(), 10);
    assert_eq!(unbounded.metrics().delayed_admissions(), 0);
}

#[test]
fn test_zero_rate_rejected_at_construction() {
    let err = steady_pace::new(0).unwrap_err();
    assert_eq!(err, steady_pace::RateError::ZeroRate);
    assert_eq!(err.to_string(), "rate must be greater than 0");
}
