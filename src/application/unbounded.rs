//! The no-op limiter, used when pacing is disabled.

use crate::application::limiter::Limiter;
use crate::application::metrics::Metrics;
use crate::application::ports::Clock;
use crate::infrastructure::clock::SystemClock;

use std::sync::Arc;
use std::time::Instant;

/// A limiter that never waits.
///
/// Both admit operations return the clock's current time immediately, which
/// lets calling code keep a single code path whether or not pacing is enabled.
///
/// There is no admission state. The only fields are the clock handle and
/// the observability counters behind [`metrics`](Unbounded::metrics), which
/// never influence an admission.
#[derive(Debug, Clone)]
pub struct Unbounded {
    clock: Arc<dyn Clock>,
    metrics: Metrics,
}

impl Unbounded {
    /// Create an unbounded limiter on the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock::new()))
    }

    /// Create an unbounded limiter reading time from `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            metrics: Metrics::new(),
        }
    }

    /// Admission metrics; every admission is recorded with no wait.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

impl Default for Unbounded {
    fn default() -> Self {
        Self::new()
    }
}

impl Limiter for Unbounded {
    fn admit(&self) -> Instant {
        self.metrics.record_admission(std::time::Duration::ZERO);
        self.clock.now()
    }

    /// Ignores `now` and reports the clock's current time.
    fn admit_at(&self, _now: Instant) -> Instant {
        self.admit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::mocks::MockClock;
    use std::time::Duration;

    #[test]
    fn test_returns_current_time() {
        let start = Instant::now();
        let clock = MockClock::new(start);
        let limiter = Unbounded::with_clock(Arc::new(clock.clone()));

        assert_eq!(limiter.admit(), start);

        clock.advance(Duration::from_secs(1));
        assert_eq!(
            limiter.admit_at(start + Duration::from_secs(50)),
            start + Duration::from_secs(1)
        );
    }

    #[test]
    fn test_never_delays() {
        let limiter = Unbounded::new();
        for _ in 0..100 {
            limiter.admit();
        }

        let snapshot = limiter.metrics().snapshot();
        assert_eq!(snapshot.admissions, 100);
        assert_eq!(snapshot.delayed_admissions, 0);
        assert_eq!(snapshot.total_wait, Duration::ZERO);
    }
}
