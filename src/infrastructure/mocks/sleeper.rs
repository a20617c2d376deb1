//! Mock sleeper for testing.

use crate::application::ports::Sleeper;
use crate::infrastructure::mocks::clock::MockClock;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Sleeper that advances a [`MockClock`] instead of blocking.
///
/// Every requested duration is recorded, so tests can assert exactly how long
/// a pacer tried to hold each caller.
///
/// # Examples
///
/// ```
/// use steady_pace::infrastructure::mocks::{MockClock, MockSleeper};
/// use steady_pace::{Limiter, Pacer, Rate};
/// use std::sync::Arc;
/// use std::time::{Duration, Instant};
///
/// let clock = MockClock::new(Instant::now());
/// let sleeper = MockSleeper::new(clock.clone());
/// let pacer = Pacer::from_parts(
///     Rate::per_second(100).unwrap(),
///     Arc::new(clock.clone()),
///     Arc::new(sleeper.clone()),
/// );
///
/// pacer.admit();
/// pacer.admit();
/// assert_eq!(sleeper.recorded(), vec![Duration::from_millis(10)]);
/// assert_eq!(clock.elapsed(), Duration::from_millis(10));
/// ```
#[derive(Debug, Clone)]
pub struct MockSleeper {
    clock: MockClock,
    recorded: Arc<Mutex<Vec<Duration>>>,
}

impl MockSleeper {
    /// Create a sleeper driving `clock`.
    pub fn new(clock: MockClock) -> Self {
        Self {
            clock,
            recorded: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// All durations slept so far, in call order.
    pub fn recorded(&self) -> Vec<Duration> {
        self.recorded
            .lock()
            .expect("MockSleeper mutex poisoned - a test thread panicked while holding the lock")
            .clone()
    }

    /// Number of times the sleeper was invoked.
    pub fn calls(&self) -> usize {
        self.recorded
            .lock()
            .expect("MockSleeper mutex poisoned - a test thread panicked while holding the lock")
            .len()
    }

    /// Sum of all durations slept.
    pub fn total(&self) -> Duration {
        self.recorded().into_iter().sum()
    }
}

impl Sleeper for MockSleeper {
    fn sleep(&self, duration: Duration) {
        self.recorded
            .lock()
            .expect("MockSleeper mutex poisoned - a test thread panicked while holding the lock")
            .push(duration);
        self.clock.advance(duration);
    }
}
