//! The throttled limiter.
//!
//! A [`Pacer`] holds its [`Schedule`] behind a mutex and keeps the lock for
//! the whole read, compute, suspend, write sequence. Concurrent callers are
//! therefore admitted one at a time, each waiting out its own slot.

use crate::application::limiter::Limiter;
use crate::application::metrics::Metrics;
use crate::application::ports::{Clock, Sleeper};
use crate::domain::rate::{Rate, RateError};
use crate::domain::schedule::Schedule;
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::sleeper::ThreadSleeper;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Limits a repeating action to a target average rate.
///
/// Callers invoke [`Limiter::admit`](crate::Limiter::admit) before every
/// iteration; the call blocks just long enough to keep consecutive admissions
/// one interval apart. Idle time is not banked, so a caller that shows up late
/// proceeds immediately but cannot trigger a burst afterwards.
///
/// # Example
/// ```
/// use steady_pace::{Limiter, Pacer};
/// use std::time::{Duration, Instant};
///
/// let pacer = Pacer::new(100).unwrap();
/// assert_eq!(pacer.interval(), Duration::from_millis(10));
///
/// let start = Instant::now();
/// for _ in 0..3 {
///     pacer.admit();
/// }
/// assert!(start.elapsed() >= Duration::from_millis(20));
/// ```
#[derive(Debug)]
pub struct Pacer {
    rate: Rate,
    schedule: Mutex<Schedule>,
    clock: Arc<dyn Clock>,
    sleeper: Arc<dyn Sleeper>,
    metrics: Metrics,
}

impl Pacer {
    /// Create a pacer admitting `rate` actions per second on the system clock.
    ///
    /// # Errors
    /// Returns `RateError::ZeroRate` if `rate` is zero.
    pub fn new(rate: u32) -> Result<Self, RateError> {
        Ok(Self::with_rate(Rate::per_second(rate)?))
    }

    /// Create a pacer for an already validated rate on the system clock.
    pub fn with_rate(rate: Rate) -> Self {
        Self::from_parts(
            rate,
            Arc::new(SystemClock::new()),
            Arc::new(ThreadSleeper::new()),
        )
    }

    /// Create a pacer with explicit time sources.
    ///
    /// The sleeper must advance the clock: after `sleeper.sleep(d)` returns,
    /// `clock.now()` is expected to have moved forward by at least `d`.
    pub fn from_parts(rate: Rate, clock: Arc<dyn Clock>, sleeper: Arc<dyn Sleeper>) -> Self {
        tracing::debug!(
            rate = %rate,
            interval_us = rate.interval().as_micros() as u64,
            "pacer created"
        );

        Self {
            rate,
            schedule: Mutex::new(Schedule::new(rate.interval())),
            clock,
            sleeper,
            metrics: Metrics::new(),
        }
    }

    /// The configured rate.
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// Target spacing between two admissions.
    pub fn interval(&self) -> Duration {
        self.rate.interval()
    }

    /// Admission metrics for this pacer.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// When the last caller was allowed to proceed, if any.
    pub fn last_admitted(&self) -> Option<Instant> {
        self.lock_schedule().last_admitted()
    }

    /// Forget the last admission, so the next caller proceeds immediately.
    pub fn reset(&self) {
        self.lock_schedule().reset();
    }

    fn admit_locked(&self, schedule: &mut Schedule, now: Instant) -> Instant {
        let admission = schedule.reserve(now);

        if admission.is_delayed() {
            self.sleeper.sleep(admission.wait);
        }

        self.metrics.record_admission(admission.wait);
        tracing::trace!(
            wait_us = admission.wait.as_micros() as u64,
            delayed = admission.is_delayed(),
            "admitted"
        );

        admission.requested_at
    }

    // The schedule is replaced in a single assignment, so a panic in another
    // caller cannot leave it half-updated.
    fn lock_schedule(&self) -> MutexGuard<'_, Schedule> {
        self.schedule.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Limiter for Pacer {
    fn admit(&self) -> Instant {
        let mut schedule = self.lock_schedule();
        // Read the clock only once the lock is held, so callers queued behind a
        // suspension see the time they actually reached the front.
        let now = self.clock.now();
        self.admit_locked(&mut schedule, now)
    }

    fn admit_at(&self, now: Instant) -> Instant {
        let mut schedule = self.lock_schedule();
        self.admit_locked(&mut schedule, now)
    }
}
