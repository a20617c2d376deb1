//! The limiter capability and its two variants.
//!
//! Everything that paces callers implements [`Limiter`]. [`RateLimit`] picks
//! between the throttled [`Pacer`] and the no-op [`Unbounded`] at construction
//! time, so code that holds one never has to ask whether pacing is enabled.

use crate::application::metrics::Metrics;
use crate::application::pacer::Pacer;
use crate::application::unbounded::Unbounded;
use crate::domain::rate::{Rate, RateError};
use crate::infrastructure::builder::PacerBuilder;

use std::fmt::Debug;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Trait for anything that admits callers at a controlled pace.
///
/// Callers invoke [`admit`](Limiter::admit) before every throttled unit of
/// work. Implementations may block the calling thread.
pub trait Limiter: Send + Sync + Debug {
    /// Block until the caller may proceed, using the limiter's own clock.
    ///
    /// # Returns
    /// The instant the caller arrived, not the instant it was released.
    fn admit(&self) -> Instant;

    /// Block until a caller arriving at `now` may proceed.
    ///
    /// # Returns
    /// `now` for throttled limiters; [`Unbounded`] reports its clock's current
    /// time instead.
    fn admit_at(&self, now: Instant) -> Instant;
}

impl<L: Limiter + ?Sized> Limiter for Arc<L> {
    fn admit(&self) -> Instant {
        (**self).admit()
    }

    fn admit_at(&self, now: Instant) -> Instant {
        (**self).admit_at(now)
    }
}

impl<L: Limiter + ?Sized> Limiter for Box<L> {
    fn admit(&self) -> Instant {
        (**self).admit()
    }

    fn admit_at(&self, now: Instant) -> Instant {
        (**self).admit_at(now)
    }
}

impl<L: Limiter + ?Sized> Limiter for &L {
    fn admit(&self) -> Instant {
        (**self).admit()
    }

    fn admit_at(&self, now: Instant) -> Instant {
        (**self).admit_at(now)
    }
}

/// Limiter chosen at construction time.
///
/// # Example
/// ```
/// use steady_pace::{Limiter, RateLimit};
///
/// fn run(limiter: &RateLimit, jobs: &[u32]) -> u32 {
///     let mut total = 0;
///     for job in jobs {
///         limiter.admit();
///         total += job;
///     }
///     total
/// }
///
/// let paced = RateLimit::paced(1000).unwrap();
/// let unbounded = RateLimit::unbounded();
/// assert_eq!(run(&paced, &[1, 2, 3]), run(&unbounded, &[1, 2, 3]));
/// assert!(paced.is_paced());
/// assert!(!unbounded.is_paced());
/// ```
#[derive(Debug)]
pub enum RateLimit {
    /// Callers are spaced one interval apart
    Paced(Pacer),
    /// Callers are never held back
    Unbounded(Unbounded),
}

impl RateLimit {
    /// Create a paced limiter admitting `rate` actions per second.
    ///
    /// # Errors
    /// Returns `RateError::ZeroRate` if `rate` is zero.
    pub fn paced(rate: u32) -> Result<Self, RateError> {
        Ok(RateLimit::Paced(Pacer::new(rate)?))
    }

    /// Create a paced limiter for an already validated rate.
    pub fn with_rate(rate: Rate) -> Self {
        RateLimit::Paced(Pacer::with_rate(rate))
    }

    /// Create a limiter that never waits.
    pub fn unbounded() -> Self {
        RateLimit::Unbounded(Unbounded::new())
    }

    /// Start configuring a limiter.
    pub fn builder() -> PacerBuilder {
        PacerBuilder::new()
    }

    /// Check whether callers are actually throttled.
    pub fn is_paced(&self) -> bool {
        matches!(self, RateLimit::Paced(_))
    }

    /// Target spacing between admissions, or `None` when unbounded.
    pub fn interval(&self) -> Option<Duration> {
        match self {
            RateLimit::Paced(p) => Some(p.interval()),
            RateLimit::Unbounded(_) => None,
        }
    }

    /// Admission metrics of the underlying limiter.
    pub fn metrics(&self) -> &Metrics {
        match self {
            RateLimit::Paced(p) => p.metrics(),
            RateLimit::Unbounded(u) => u.metrics(),
        }
    }
}

impl Limiter for RateLimit {
    fn admit(&self) -> Instant {
        match self {
            RateLimit::Paced(p) => p.admit(),
            RateLimit::Unbounded(u) => u.admit(),
        }
    }

    fn admit_at(&self, now: Instant) -> Instant {
        match self {
            RateLimit::Paced(p) => p.admit_at(now),
            RateLimit::Unbounded(u) => u.admit_at(now),
        }
    }
}

impl From<Pacer> for RateLimit {
    fn from(pacer: Pacer) -> Self {
        RateLimit::Paced(pacer)
    }
}

impl From<Unbounded> for RateLimit {
    fn from(unbounded: Unbounded) -> Self {
        RateLimit::Unbounded(unbounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paced_variant() {
        let limit = RateLimit::paced(50).unwrap();
        assert!(limit.is_paced());
        assert_eq!(limit.interval(), Some(Duration::from_millis(20)));
    }

    #[test]
    fn test_paced_zero_rate_rejected() {
        assert!(matches!(RateLimit::paced(0), Err(RateError::ZeroRate)));
    }

    #[test]
    fn test_unbounded_variant() {
        let limit = RateLimit::unbounded();
        assert!(!limit.is_paced());
        assert_eq!(limit.interval(), None);

        limit.admit();
        assert_eq!(limit.metrics().admissions(), 1);
    }

    #[test]
    fn test_dyn_limiter() {
        let limiters: Vec<Box<dyn Limiter>> = vec![
            Box::new(RateLimit::unbounded()),
            Box::new(Pacer::new(1000).unwrap()),
            Box::new(Arc::new(Unbounded::new())),
        ];

        for limiter in &limiters {
            let before = Instant::now();
            assert!(limiter.admit() >= before);
        }
    }

    #[test]
    fn test_from_variants() {
        let limit: RateLimit = Pacer::new(10).unwrap().into();
        assert!(limit.is_paced());

        let limit: RateLimit = Unbounded::new().into();
        assert!(!limit.is_paced());
    }
}
