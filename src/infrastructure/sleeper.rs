//! Sleeper adapters for suspending the calling thread.
//!
//! Tests that must not block use `MockSleeper` from `infrastructure::mocks`,
//! which advances a `MockClock` instead.

use crate::application::ports::Sleeper;
use std::time::Duration;

/// Sleeper backed by `std::thread::sleep`.
///
/// It pairs with [`SystemClock`](super::clock::SystemClock): after `sleep(d)`
/// returns, the system clock has moved forward by at least `d`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl ThreadSleeper {
    /// Create a thread sleeper.
    pub fn new() -> Self {
        Self
    }
}

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
