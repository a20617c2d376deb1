//! Ports (interfaces) for the application layer.
//!
//! In hexagonal architecture, ports define the interfaces that the application
//! layer needs. Infrastructure adapters implement these ports.

use std::fmt::Debug;
use std::time::{Duration, Instant};

/// Port for obtaining current time.
///
/// This abstraction allows the application layer to work with time
/// without depending on system clock implementation details.
/// Infrastructure provides concrete implementations (SystemClock, MockClock).
pub trait Clock: Send + Sync + Debug {
    /// Get the current instant.
    fn now(&self) -> Instant;
}

/// Port for suspending the calling thread.
///
/// Pacers call this while holding their admission lock, so an implementation
/// must return only once `duration` has elapsed on the pacer's clock.
/// Infrastructure provides concrete implementations (ThreadSleeper, MockSleeper).
pub trait Sleeper: Send + Sync + Debug {
    /// Block the current thread for `duration`.
    fn sleep(&self, duration: Duration);
}
