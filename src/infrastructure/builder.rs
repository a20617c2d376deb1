//! Limiter configuration.
//!
//! [`PacerBuilder`] collects the rate and the time sources, validates them in
//! [`build`](PacerBuilder::build), and picks the limiter variant.

use crate::application::limiter::RateLimit;
use crate::application::pacer::Pacer;
use crate::application::ports::{Clock, Sleeper};
use crate::application::unbounded::Unbounded;
use crate::domain::rate::{Rate, RateError};
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::sleeper::ThreadSleeper;

use std::sync::Arc;
use std::time::Duration;

/// Error returned when building a limiter fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// Neither a rate nor `unbounded()` was configured
    MissingRate,
    /// The configured rate is invalid
    Rate(RateError),
    /// `build_pacer()` was called on an unbounded configuration
    Unbounded,
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::MissingRate => {
                write!(f, "no rate configured; call with_rate() or unbounded()")
            }
            BuildError::Rate(e) => write!(f, "invalid rate: {}", e),
            BuildError::Unbounded => {
                write!(f, "cannot build a pacer from an unbounded configuration")
            }
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::Rate(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RateError> for BuildError {
    fn from(e: RateError) -> Self {
        BuildError::Rate(e)
    }
}

/// Builder for constructing a [`RateLimit`] or a bare [`Pacer`].
///
/// # Example
/// ```
/// use steady_pace::{BuildError, PacerBuilder, RateError};
/// use std::time::Duration;
///
/// let limit = PacerBuilder::new()
///     .with_rate(30)
///     .with_per(Duration::from_secs(60))
///     .build()
///     .unwrap();
/// assert_eq!(limit.interval(), Some(Duration::from_secs(2)));
///
/// // Pacing disabled by configuration
/// let limit = PacerBuilder::new().unbounded().build().unwrap();
/// assert!(!limit.is_paced());
///
/// assert_eq!(
///     PacerBuilder::new().with_rate(0).build().unwrap_err(),
///     BuildError::Rate(RateError::ZeroRate)
/// );
/// ```
#[derive(Debug, Clone)]
pub struct PacerBuilder {
    rate: Option<u32>,
    per: Duration,
    unbounded: bool,
    clock: Option<Arc<dyn Clock>>,
    sleeper: Option<Arc<dyn Sleeper>>,
}

impl PacerBuilder {
    /// Create a builder with no rate and a one-second period.
    pub fn new() -> Self {
        Self {
            rate: None,
            per: Duration::from_secs(1),
            unbounded: false,
            clock: None,
            sleeper: None,
        }
    }

    /// Set the number of admissions per period.
    ///
    /// The value will be validated when `build()` is called.
    pub fn with_rate(mut self, rate: u32) -> Self {
        self.rate = Some(rate);
        self.unbounded = false;
        self
    }

    /// Set the period the rate applies to.
    ///
    /// Default: one second
    pub fn with_per(mut self, per: Duration) -> Self {
        self.per = per;
        self
    }

    /// Set a custom clock (mainly for testing).
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set a custom sleeper (mainly for testing).
    ///
    /// The sleeper must advance whatever clock the pacer reads.
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = Some(sleeper);
        self
    }

    /// Disable pacing: `build()` yields a limiter that never waits.
    pub fn unbounded(mut self) -> Self {
        self.unbounded = true;
        self.rate = None;
        self
    }

    /// Build the limiter.
    ///
    /// # Errors
    /// Returns `BuildError` if no rate was configured or the rate is invalid.
    pub fn build(self) -> Result<RateLimit, BuildError> {
        if self.unbounded {
            let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock::new()));
            tracing::debug!("pacing disabled, using unbounded limiter");
            return Ok(RateLimit::Unbounded(Unbounded::with_clock(clock)));
        }

        self.build_pacer().map(RateLimit::Paced)
    }

    /// Build a throttled pacer.
    ///
    /// # Errors
    /// Returns `BuildError::Unbounded` if pacing was disabled, otherwise the
    /// same errors as `build()`.
    pub fn build_pacer(self) -> Result<Pacer, BuildError> {
        if self.unbounded {
            return Err(BuildError::Unbounded);
        }

        let count = self.rate.ok_or(BuildError::MissingRate)?;
        let rate = Rate::new(count, self.per)?;

        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock::new()));
        let sleeper = self
            .sleeper
            .unwrap_or_else(|| Arc::new(ThreadSleeper::new()));

        Ok(Pacer::from_parts(rate, clock, sleeper))
    }
}

impl Default for PacerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
