use uom::si::f64::Time;

use crate::{SolutionState, Stepper, StepperFeedback, StepperInfo, unbounded};

/// Lands the simulation exactly on a list of required times.
///
/// On every call the target list is re-scanned from the current time for the
/// smallest target strictly beyond `time + tol`; targets within `tol` of the
/// current time count as already reached. Because the scan restarts from
/// `info.time` rather than an internal cursor, the stepper self-corrects when
/// another combinator perturbs an earlier step: after an externally imposed
/// cutback it simply proposes the remaining distance to the missed target.
///
/// Once the list is exhausted every further call returns [`unbounded`].
#[derive(Debug, Clone, PartialEq)]
pub struct FixedPoint {
    times: Vec<Time>,
    tol: Time,
}

impl FixedPoint {
    /// Creates a stepper targeting `times`, matched with tolerance `tol`.
    ///
    /// The targets are sorted ascending; order of the input does not matter.
    #[must_use]
    pub fn new(times: impl Into<Vec<Time>>, tol: Time) -> Self {
        let mut times = times.into();
        times.sort_by(|a, b| a.value.total_cmp(&b.value));
        Self { times, tol }
    }
}

impl<S: SolutionState> Stepper<S> for FixedPoint {
    fn advance(&self, info: &StepperInfo<S>, _feedback: &mut StepperFeedback) -> Time {
        for &target in &self.times {
            if target > info.time + self.tol {
                return target - info.time;
            }
        }
        unbounded()
    }
}
