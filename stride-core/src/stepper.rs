use uom::si::{f64::Time, time::second};

use crate::{SolutionState, StepperFeedback, StepperInfo};

/// The "no opinion" sentinel: a `+∞` time increment.
///
/// A stepper with nothing to contribute returns this and lets a combining
/// ancestor (or the caller's own ceiling) decide. Combinators treat it as the
/// identity of `min`.
#[must_use]
pub fn unbounded() -> Time {
    Time::new::<second>(f64::INFINITY)
}

/// A strategy that proposes the size of the next time increment.
///
/// Implementations must be pure functions of `info` plus whatever state they
/// privately own (child steppers, [`crate::DtSlot`] handles); they never
/// block and never fail. A result of [`unbounded`] means "no opinion". The
/// *caller* is responsible for rejecting a non-positive or non-finite final
/// result after combination, which [`crate::TimeIncrement`] enforces.
///
/// Composite steppers exclusively own their children, so a tree has no
/// sharing and no cycles. Cross-call communication goes exclusively through
/// caller-owned slots written by [`crate::steppers::Instrumented`].
pub trait Stepper<S: SolutionState> {
    /// Proposes the next time increment.
    ///
    /// `feedback` may be filled with at most one outstanding
    /// [`crate::StateRequest`] for the caller to honor before or after
    /// applying the increment.
    fn advance(&self, info: &StepperInfo<S>, feedback: &mut StepperFeedback) -> Time;
}

impl<S: SolutionState> core::fmt::Debug for dyn Stepper<S> + '_ {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("dyn Stepper")
    }
}

impl<S, T> Stepper<S> for Box<T>
where
    S: SolutionState,
    T: Stepper<S> + ?Sized,
{
    fn advance(&self, info: &StepperInfo<S>, feedback: &mut StepperFeedback) -> Time {
        (**self).advance(info, feedback)
    }
}
