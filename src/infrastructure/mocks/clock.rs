//! Mock clock for testing.

use crate::application::ports::Clock;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Manually driven clock.
///
/// Time only moves when a test calls [`advance`](MockClock::advance) or
/// [`set`](MockClock::set), or when a [`MockSleeper`](super::MockSleeper)
/// sharing this clock is asked to sleep.
///
/// # Examples
///
/// ```
/// use steady_pace::infrastructure::mocks::MockClock;
/// use steady_pace::Clock;
/// use std::time::{Duration, Instant};
///
/// let start = Instant::now();
/// let clock = MockClock::new(start);
/// assert_eq!(clock.now(), start);
///
/// clock.advance(Duration::from_millis(10));
/// assert_eq!(clock.now(), start + Duration::from_millis(10));
/// assert_eq!(clock.elapsed(), Duration::from_millis(10));
/// ```
///
/// # Thread Safety
///
/// All clones share the same underlying time value, so advancing one clone
/// advances every pacer and sleeper holding another.
#[derive(Debug, Clone)]
pub struct MockClock {
    start: Instant,
    current_time: Arc<Mutex<Instant>>,
}

impl MockClock {
    /// Create a mock clock starting at a specific instant.
    pub fn new(start: Instant) -> Self {
        Self {
            start,
            current_time: Arc::new(Mutex::new(start)),
        }
    }

    /// Advance the clock by a duration.
    ///
    /// A duration that would overflow `Instant` leaves the clock where it is.
    pub fn advance(&self, duration: Duration) {
        let mut time = self
            .current_time
            .lock()
            .expect("MockClock mutex poisoned - a test thread panicked while holding the lock");
        if let Some(advanced) = time.checked_add(duration) {
            *time = advanced;
        }
    }

    /// Set the clock to a specific instant.
    pub fn set(&self, instant: Instant) {
        let mut time = self
            .current_time
            .lock()
            .expect("MockClock mutex poisoned - a test thread panicked while holding the lock");
        *time = instant;
    }

    /// Time elapsed on this clock since it was created.
    pub fn elapsed(&self) -> Duration {
        self.now().saturating_duration_since(self.start)
    }
}

impl Clock for MockClock {
    fn now(&self) -> Instant {
        *self
            .current_time
            .lock()
            .expect("MockClock mutex poisoned - a test thread panicked while holding the lock")
    }
}
