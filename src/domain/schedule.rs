//! Admission scheduling.
//!
//! A [`Schedule`] is a leaky bucket with a capacity of one: it remembers when
//! the last action was admitted and tells the caller how long to wait before
//! the next one may proceed. It never sleeps itself and never reads a clock,
//! so the whole decision can be driven with synthetic instants.

use std::time::{Duration, Instant};

/// Outcome of reserving the next admission slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Admission {
    /// The instant the caller presented
    pub requested_at: Instant,
    /// The instant the caller may proceed (`requested_at + wait`)
    pub admitted_at: Instant,
    /// How long the caller must be suspended; zero means proceed immediately
    pub wait: Duration,
}

impl Admission {
    /// Check whether the caller has to be suspended.
    pub fn is_delayed(&self) -> bool {
        !self.wait.is_zero()
    }
}

/// Admission state for a single pacer.
///
/// # Example
/// ```
/// use steady_pace::Schedule;
/// use std::time::{Duration, Instant};
///
/// let mut schedule = Schedule::new(Duration::from_millis(10));
/// let start = Instant::now();
///
/// // The first admission never waits
/// assert!(!schedule.reserve(start).is_delayed());
///
/// // 3ms later the caller must wait out the remaining 7ms
/// let admission = schedule.reserve(start + Duration::from_millis(3));
/// assert_eq!(admission.wait, Duration::from_millis(7));
/// assert_eq!(schedule.last_admitted(), Some(start + Duration::from_millis(10)));
/// ```
#[derive(Debug, Clone)]
pub struct Schedule {
    interval: Duration,
    last_admitted: Option<Instant>,
}

impl Schedule {
    /// Create a schedule that spaces admissions `interval` apart.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_admitted: None,
        }
    }

    /// Target spacing between admissions.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// When the last admitted caller was allowed to proceed, if ever.
    pub fn last_admitted(&self) -> Option<Instant> {
        self.last_admitted
    }

    /// How long a caller arriving at `now` would have to wait, without
    /// reserving anything.
    ///
    /// A next slot too far out to be represented as an `Instant` is treated
    /// as a full interval away.
    pub fn wait_for(&self, now: Instant) -> Duration {
        match self.last_admitted {
            Some(last) => match last.checked_add(self.interval) {
                Some(next) => next.saturating_duration_since(now),
                None => self.interval,
            },
            None => Duration::ZERO,
        }
    }

    /// Reserve the next admission for a caller arriving at `now`.
    ///
    /// The slot is recorded immediately as `now + wait`. Callers that suspend
    /// for `wait` must keep exclusive access to the schedule until they wake,
    /// otherwise a second caller could observe the slot before it is honoured.
    ///
    /// A caller arriving after its slot has passed is admitted at `now`, and
    /// the reference point moves up to `now`: idle time is never banked.
    pub fn reserve(&mut self, now: Instant) -> Admission {
        let wait = self.wait_for(now);

        // Saturate at the latest known instant rather than overflow
        let admitted_at = now
            .checked_add(wait)
            .unwrap_or_else(|| self.last_admitted.map_or(now, |last| last.max(now)));
        self.last_admitted = Some(admitted_at);

        Admission {
            requested_at: now,
            admitted_at,
            wait,
        }
    }

    /// Forget the last admission, so the next caller proceeds immediately.
    pub fn reset(&mut self) {
        self.last_admitted = None;
    }
}
