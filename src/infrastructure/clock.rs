//! Clock adapters for reading the current instant.
//!
//! Tests that need to control time use `MockClock` from
//! `infrastructure::mocks`, available in test builds or with the
//! `test-helpers` feature.

use crate::application::ports::Clock;
use std::time::Instant;

/// Clock backed by the monotonic `Instant::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a system clock.
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::Sleeper;
    use crate::infrastructure::sleeper::ThreadSleeper;
    use std::time::Duration;

    #[test]
    fn test_system_clock_follows_thread_sleeper() {
        let clock = SystemClock::new();
        let before = clock.now();
        ThreadSleeper::new().sleep(Duration::from_millis(10));

        assert!(clock.now() >= before + Duration::from_millis(10));
    }
}
