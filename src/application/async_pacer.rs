//! Async pacing for tokio tasks.
//!
//! [`AsyncPacer`] applies the same schedule as [`Pacer`](crate::Pacer) but
//! parks the task instead of the thread. The admission lock is a
//! `tokio::sync::Mutex`, held across the sleep, so tasks are admitted one at a
//! time in the order they acquired the lock.
//!
//! There is no timeout parameter. To give up on an admission, race the future
//! against your own signal; a future dropped mid-wait reserves nothing:
//!
//! ```
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! use steady_pace::AsyncPacer;
//! use std::time::Duration;
//!
//! let pacer = AsyncPacer::new(1).unwrap();
//! pacer.admit().await;
//!
//! tokio::select! {
//!     _ = pacer.admit() => unreachable!("the next slot is a second away"),
//!     _ = tokio::time::sleep(Duration::from_millis(5)) => {}
//! }
//! # }
//! ```

use crate::application::metrics::Metrics;
use crate::application::ports::Clock;
use crate::domain::rate::{Rate, RateError};
use crate::domain::schedule::Schedule;
use crate::infrastructure::clock::SystemClock;

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Paces tokio tasks to a target average rate.
#[derive(Debug)]
pub struct AsyncPacer {
    rate: Rate,
    schedule: Mutex<Schedule>,
    clock: Arc<dyn Clock>,
    metrics: Metrics,
}

impl AsyncPacer {
    /// Create a pacer admitting `rate` tasks per second.
    ///
    /// # Errors
    /// Returns `RateError::ZeroRate` if `rate` is zero.
    pub fn new(rate: u32) -> Result<Self, RateError> {
        Ok(Self::with_rate(Rate::per_second(rate)?))
    }

    /// Create a pacer for an already validated rate.
    pub fn with_rate(rate: Rate) -> Self {
        Self::with_clock(rate, Arc::new(SystemClock::new()))
    }

    /// Create a pacer reading time from `clock`.
    ///
    /// Suspension always goes through `tokio::time`, so the clock should
    /// advance with it.
    pub fn with_clock(rate: Rate, clock: Arc<dyn Clock>) -> Self {
        tracing::debug!(
            rate = %rate,
            interval_us = rate.interval().as_micros() as u64,
            "async pacer created"
        );

        Self {
            rate,
            schedule: Mutex::new(Schedule::new(rate.interval())),
            clock,
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

    /// When the last task was allowed to proceed, if any.
    pub async fn last_admitted(&self) -> Option<Instant> {
        self.schedule.lock().await.last_admitted()
    }

    /// Wait until the calling task may proceed.
    ///
    /// # Returns
    /// The instant the task reached the front of the queue.
    pub async fn admit(&self) -> Instant {
        let mut schedule = self.schedule.lock().await;
        let now = self.clock.now();
        self.admit_locked(&mut schedule, now).await
    }

    /// Wait until a task arriving at `now` may proceed.
    ///
    /// # Returns
    /// `now`, the instant the task presented.
    pub async fn admit_at(&self, now: Instant) -> Instant {
        let mut schedule = self.schedule.lock().await;
        self.admit_locked(&mut schedule, now).await
    }

    async fn admit_locked(&self, schedule: &mut Schedule, now: Instant) -> Instant {
        let wait = schedule.wait_for(now);
        if !wait.is_zero() {
            tokio::time::sleep(wait).await;
        }

        // Committed only after the sleep so a cancelled admission leaves no trace.
        let admission = schedule.reserve(now);

        self.metrics.record_admission(admission.wait);
        tracing::trace!(
            wait_us = admission.wait.as_micros() as u64,
            delayed = admission.is_delayed(),
            "admitted"
        );

        admission.requested_at
    }
}
