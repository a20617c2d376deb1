//! Target admission rates.
//!
//! A [`Rate`] is a validated "`count` admissions per `per` period". The pacer
//! only ever consumes the derived [`Rate::interval`], the target spacing
//! between two consecutive admissions.

use std::fmt;
use std::time::Duration;

/// Error returned when a rate cannot produce a usable admission interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateError {
    /// Admission count must be greater than zero
    ZeroRate,
    /// Rate period must be greater than zero
    ZeroPeriod,
    /// The interval (`per / count`) truncates to zero nanoseconds
    IntervalTooShort {
        /// Requested admissions per period
        count: u32,
        /// Requested period
        per: Duration,
    },
}

impl fmt::Display for RateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateError::ZeroRate => write!(f, "rate must be greater than 0"),
            RateError::ZeroPeriod => write!(f, "rate period must be greater than 0"),
            RateError::IntervalTooShort { count, per } => write!(
                f,
                "{} admissions per {:?} leaves no measurable interval between them",
                count, per
            ),
        }
    }
}

impl std::error::Error for RateError {}

/// A target admission rate.
///
/// # Example
/// ```
/// use steady_pace::Rate;
/// use std::time::Duration;
///
/// let rate = Rate::per_second(100).unwrap();
/// assert_eq!(rate.interval(), Duration::from_millis(10));
///
/// let rate = Rate::new(3, Duration::from_secs(60)).unwrap();
/// assert_eq!(rate.interval(), Duration::from_secs(20));
///
/// assert!(Rate::per_second(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rate {
    count: u32,
    per: Duration,
    interval: Duration,
}

impl Rate {
    /// Create a rate of `count` admissions every `per`.
    ///
    /// # Errors
    /// Returns `RateError::ZeroRate` if `count` is zero,
    /// `RateError::ZeroPeriod` if `per` is zero, and
    /// `RateError::IntervalTooShort` if `per / count` is below one nanosecond.
    pub fn new(count: u32, per: Duration) -> Result<Self, RateError> {
        if count == 0 {
            return Err(RateError::ZeroRate);
        }
        if per.is_zero() {
            return Err(RateError::ZeroPeriod);
        }

        let interval = per / count;
        if interval.is_zero() {
            return Err(RateError::IntervalTooShort { count, per });
        }

        Ok(Self {
            count,
            per,
            interval,
        })
    }

    /// Create a rate of `count` admissions per second.
    pub fn per_second(count: u32) -> Result<Self, RateError> {
        Self::new(count, Duration::from_secs(1))
    }

    /// Admissions per period.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Length of the period.
    pub fn per(&self) -> Duration {
        self.per
    }

    /// Target spacing between two consecutive admissions.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.per == Duration::from_secs(1) {
            write!(f, "{}/s", self.count)
        } else {
            write!(f, "{}/{:?}", self.count, self.per)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_second_interval() {
        assert_eq!(
            Rate::per_second(1).unwrap().interval(),
            Duration::from_secs(1)
        );
        assert_eq!(
            Rate::per_second(100).unwrap().interval(),
            Duration::from_millis(10)
        );
        assert_eq!(
            Rate::per_second(3).unwrap().interval(),
            Duration::from_nanos(333_333_333)
        );
    }

    #[test]
    fn test_custom_period() {
        let rate = Rate::new(30, Duration::from_secs(60)).unwrap();
        assert_eq!(rate.count(), 30);
        assert_eq!(rate.per(), Duration::from_secs(60));
        assert_eq!(rate.interval(), Duration::from_secs(2));
    }

    #[test]
    fn test_zero_rate_rejected() {
        assert_eq!(Rate::per_second(0), Err(RateError::ZeroRate));
        assert_eq!(
            Rate::new(0, Duration::from_secs(5)),
            Err(RateError::ZeroRate)
        );
    }

    #[test]
    fn test_zero_period_rejected() {
        assert_eq!(Rate::new(10, Duration::ZERO), Err(RateError::ZeroPeriod));
    }

    #[test]
    fn test_interval_too_short_rejected() {
        let per = Duration::from_nanos(10);
        assert_eq!(
            Rate::new(11, per),
            Err(RateError::IntervalTooShort { count: 11, per })
        );

        // One nanosecond is still a usable interval
        assert_eq!(
            Rate::new(10, per).unwrap().interval(),
            Duration::from_nanos(1)
        );
    }

    #[test]
    fn test_max_rate_per_second() {
        let rate = Rate::per_second(1_000_000_000).unwrap();
        assert_eq!(rate.interval(), Duration::from_nanos(1));

        assert!(matches!(
            Rate::per_second(1_000_000_001),
            Err(RateError::IntervalTooShort { .. })
        ));
        assert!(Rate::per_second(u32::MAX).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Rate::per_second(50).unwrap().to_string(), "50/s");
        assert_eq!(
            Rate::new(5, Duration::from_secs(60)).unwrap().to_string(),
            "5/60s"
        );
        assert_eq!(
            RateError::ZeroRate.to_string(),
            "rate must be greater than 0"
        );
    }
}
