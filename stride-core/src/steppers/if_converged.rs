use uom::si::f64::Time;

use crate::{SolutionState, Stepper, StepperFeedback, StepperInfo};

/// Branches on the outcome of the previous nonlinear solve.
///
/// Delegates to `on_converged` when `info.prev_converged` is true and to
/// `on_failed` otherwise; only the taken branch is evaluated. The typical
/// failure branch is `GrowShrink::new(0.5, 1.0)`, which halves the last
/// applied increment so the outer loop can retry the step.
pub struct IfConverged<S: SolutionState> {
    on_converged: Box<dyn Stepper<S>>,
    on_failed: Box<dyn Stepper<S>>,
}

impl<S: SolutionState> IfConverged<S> {
    /// Creates the branch from its two arms.
    pub fn new(
        on_converged: impl Stepper<S> + 'static,
        on_failed: impl Stepper<S> + 'static,
    ) -> Self {
        Self {
            on_converged: Box::new(on_converged),
            on_failed: Box::new(on_failed),
        }
    }
}

impl<S: SolutionState> Stepper<S> for IfConverged<S> {
    fn advance(&self, info: &StepperInfo<S>, feedback: &mut StepperFeedback) -> Time {
        if info.prev_converged {
            self.on_converged.advance(info, feedback)
        } else {
            self.on_failed.advance(info, feedback)
        }
    }
}
