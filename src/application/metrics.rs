//! Observability metrics for pacing.
//!
//! Provides counters describing how often callers were admitted and how long
//! they were held back.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Metrics tracking admission statistics.
///
/// All metrics use atomic operations for thread-safe updates and reads.
/// Clones share the same counters.
#[derive(Debug, Clone)]
pub struct Metrics {
    inner: Arc<MetricsInner>,
}

#[derive(Debug)]
struct MetricsInner {
    /// Total number of admissions
    admissions: AtomicU64,
    /// Admissions that had to wait before proceeding
    delayed_admissions: AtomicU64,
    /// Accumulated suspension time in nanoseconds
    total_wait_nanos: AtomicU64,
}

impl Metrics {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MetricsInner {
                admissions: AtomicU64::new(0),
                delayed_admissions: AtomicU64::new(0),
                total_wait_nanos: AtomicU64::new(0),
            }),
        }
    }

    /// Record one admission and the time the caller was suspended for it.
    pub(crate) fn record_admission(&self, wait: Duration) {
        self.inner.admissions.fetch_add(1, Ordering::Relaxed);
        if !wait.is_zero() {
            self.inner
                .delayed_admissions
                .fetch_add(1, Ordering::Relaxed);
            let nanos = u64::try_from(wait.as_nanos()).unwrap_or(u64::MAX);
            self.inner
                .total_wait_nanos
                .fetch_add(nanos, Ordering::Relaxed);
        }
    }

    /// Get the total number of admissions.
    pub fn admissions(&self) -> u64 {
        self.inner.admissions.load(Ordering::Relaxed)
    }

    /// Get the number of admissions that had to wait.
    pub fn delayed_admissions(&self) -> u64 {
        self.inner.delayed_admissions.load(Ordering::Relaxed)
    }

    /// Get the accumulated suspension time.
    pub fn total_wait(&self) -> Duration {
        Duration::from_nanos(self.inner.total_wait_nanos.load(Ordering::Relaxed))
    }

    /// Get a snapshot of all metrics.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            admissions: self.admissions(),
            delayed_admissions: self.delayed_admissions(),
            total_wait: self.total_wait(),
        }
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.inner.admissions.store(0, Ordering::Relaxed);
        self.inner.delayed_admissions.store(0, Ordering::Relaxed);
        self.inner.total_wait_nanos.store(0, Ordering::Relaxed);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time snapshot of metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Total number of admissions
    pub admissions: u64,
    /// Admissions that had to wait before proceeding
    pub delayed_admissions: u64,
    /// Accumulated suspension time
    pub total_wait: Duration,
}

impl MetricsSnapshot {
    /// Fraction of admissions that had to wait (0.0 to 1.0).
    ///
    /// Returns 0.0 if nothing has been admitted.
    pub fn delay_rate(&self) -> f64 {
        if self.admissions == 0 {
            0.0
        } else {
            self.delayed_admissions as f64 / self.admissions as f64
        }
    }

    /// Mean suspension per admission, counting admissions that did not wait.
    pub fn average_wait(&self) -> Duration {
        match u32::try_from(self.admissions) {
            Ok(0) => Duration::ZERO,
            Ok(n) => self.total_wait / n,
            Err(_) => Duration::from_secs_f64(
                self.total_wait.as_secs_f64() / self.admissions as f64,
            ),
        }
    }
}
