use std::{fmt, ops::Deref};

use thiserror::Error;
use uom::si::{f64::Time, time::second};

/// A validated, strictly positive, finite time increment.
///
/// Steppers deliberately return a raw [`Time`]: intermediate proposals may be
/// `+∞` ("no opinion") and a misconfigured tree can produce zero or negative
/// values. The outer loop is required to reject such results after
/// combination, and `TimeIncrement` is that rejection point: once one exists,
/// the increment is known to be usable for advancing simulation time.
///
/// # Construction
///
/// ```
/// use stride_core::TimeIncrement;
/// use uom::si::{f64::Time, time::second};
///
/// let dt = TimeIncrement::try_from(Time::new::<second>(0.5))?;
/// assert_eq!(dt.to_string(), "0.5 s");
/// # Ok::<(), stride_core::TimeIncrementError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TimeIncrement(Time);

/// Error type returned when constructing an invalid [`TimeIncrement`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TimeIncrementError {
    #[error("time increment must be greater than zero, got {0} s")]
    NotPositive(f64),
    #[error("time increment must be finite, got {0} s")]
    NotFinite(f64),
}

impl TimeIncrement {
    /// Constructs a `TimeIncrement` from a value in seconds.
    ///
    /// # Errors
    ///
    /// Returns an error if `seconds` is zero, negative, or non-finite.
    pub fn from_seconds(seconds: f64) -> Result<Self, TimeIncrementError> {
        Self::from_time(Time::new::<second>(seconds))
    }

    /// Constructs a `TimeIncrement` from an existing [`Time`] value.
    ///
    /// # Errors
    ///
    /// Returns an error if the time is zero, negative, or non-finite.
    pub fn from_time(time: Time) -> Result<Self, TimeIncrementError> {
        let seconds = time.get::<second>();
        if !seconds.is_finite() {
            Err(TimeIncrementError::NotFinite(seconds))
        } else if seconds > 0.0 {
            Ok(Self(time))
        } else {
            Err(TimeIncrementError::NotPositive(seconds))
        }
    }

    /// Consumes the `TimeIncrement` and returns the underlying [`Time`].
    #[must_use]
    pub fn into_inner(self) -> Time {
        self.0
    }
}

impl TryFrom<Time> for TimeIncrement {
    type Error = TimeIncrementError;
    fn try_from(t: Time) -> Result<Self, Self::Error> {
        Self::from_time(t)
    }
}

impl Deref for TimeIncrement {
    type Target = Time;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for TimeIncrement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0.get::<second>();
        write!(f, "{s} s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn accepts_positive_finite_values() {
        let dt = TimeIncrement::from_seconds(2.0).unwrap();
        assert_relative_eq!(dt.into_inner().get::<second>(), 2.0);
    }

    #[test]
    fn rejects_zero_and_negative() {
        assert_eq!(
            TimeIncrement::from_seconds(0.0),
            Err(TimeIncrementError::NotPositive(0.0))
        );
        assert_eq!(
            TimeIncrement::from_seconds(-1.0),
            Err(TimeIncrementError::NotPositive(-1.0))
        );
    }

    #[test]
    fn rejects_non_finite() {
        assert!(matches!(
            TimeIncrement::from_seconds(f64::INFINITY),
            Err(TimeIncrementError::NotFinite(_))
        ));
        assert!(matches!(
            TimeIncrement::from_seconds(f64::NAN),
            Err(TimeIncrementError::NotFinite(_))
        ));
    }
}
