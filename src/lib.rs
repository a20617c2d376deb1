//! # steady-pace
//!
//! Pacing for repeated actions: call [`Limiter::admit`] before every iteration
//! and the call blocks just long enough to keep iterations one interval apart,
//! averaging the target rate.
//!
//! ## Quick Start
//!
//! ```rust
//! use steady_pace::Limiter;
//! use std::time::{Duration, Instant};
//!
//! // 200 admissions per second, one every 5ms
//! let limiter = steady_pace::new(200).unwrap();
//!
//! let start = Instant::now();
//! for _ in 0..5 {
//!     limiter.admit();
//!     // ... throttled work ...
//! }
//! assert!(start.elapsed() >= Duration::from_millis(20));
//! ```
//!
//! ## How admissions are scheduled
//!
//! The pacer remembers when it last let a caller through. A caller arriving
//! less than one interval later is suspended for the remainder; a caller
//! arriving later than that goes straight through and becomes the new
//! reference point. This is a leaky bucket with a capacity of one:
//!
//! - The first admission never waits, however long after construction it happens.
//! - Idle time is never banked, so there are no bursts after a pause.
//! - [`Limiter::admit_at`] returns the instant the caller presented, not the
//!   instant it was released.
//!
//! ## Sharing between threads
//!
//! `Pacer` is `Send + Sync`. Share it through `Arc` (or a scoped borrow) and
//! every worker is admitted one at a time; the lock is held while a caller
//! waits, so two workers can never claim the same slot.
//!
//! ```rust
//! use steady_pace::{Limiter, Pacer};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let pacer = Arc::new(Pacer::new(500).unwrap());
//! let handles: Vec<_> = (0..4)
//!     .map(|_| {
//!         let pacer = Arc::clone(&pacer);
//!         thread::spawn(move || {
//!             for _ in 0..3 {
//!                 pacer.admit();
//!             }
//!         })
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(pacer.metrics().admissions(), 12);
//! ```
//!
//! ## Disabling pacing
//!
//! [`new_unbounded`] (or [`PacerBuilder::unbounded`]) returns a limiter with
//! the same type and interface that never waits, so calling code does not
//! branch on configuration.
//!
//! ## Testing with synthetic time
//!
//! Pacers read time through the [`Clock`] port and suspend through the
//! [`Sleeper`] port. With the `test-helpers` feature,
//! `infrastructure::mocks` provides `MockClock` and `MockSleeper`, which let
//! tests drive a pacer without sleeping.
//!
//! ## Features
//!
//! - `async`: [`AsyncPacer`], which parks tokio tasks instead of threads.
//! - `test-helpers`: exposes the mock clock and sleeper.

// Domain layer - pure business logic
pub mod domain;

// Application layer - orchestration
pub mod application;

// Infrastructure layer - external adapters
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::{
    rate::{Rate, RateError},
    schedule::{Admission, Schedule},
};

pub use application::{
    limiter::{Limiter, RateLimit},
    metrics::{Metrics, MetricsSnapshot},
    pacer::Pacer,
    ports::{Clock, Sleeper},
    unbounded::Unbounded,
};

#[cfg(feature = "async")]
pub use application::async_pacer::AsyncPacer;

pub use infrastructure::{
    builder::{BuildError, PacerBuilder},
    clock::SystemClock,
    sleeper::ThreadSleeper,
};

/// Create a limiter admitting `rate` actions per second.
///
/// # Errors
/// Returns `RateError::ZeroRate` if `rate` is zero.
pub fn new(rate: u32) -> Result<RateLimit, RateError> {
    RateLimit::paced(rate)
}

/// Create a limiter that never waits.
pub fn new_unbounded() -> RateLimit {
    RateLimit::unbounded()
}
