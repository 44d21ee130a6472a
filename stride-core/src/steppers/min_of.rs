use uom::si::f64::Time;

use crate::{SolutionState, Stepper, StepperFeedback, StepperInfo};

/// Proposes the smaller of two child proposals.
///
/// Results within `tol` of each other count as equal and resolve to the first
/// child's proposal, so floating-point jitter cannot flip an otherwise stable
/// tie between the children.
pub struct MinOf<S: SolutionState> {
    a: Box<dyn Stepper<S>>,
    b: Box<dyn Stepper<S>>,
    tol: Time,
}

impl<S: SolutionState> MinOf<S> {
    /// Combines `a` and `b`, snapping results within `tol` to `a`'s proposal.
    pub fn new(a: impl Stepper<S> + 'static, b: impl Stepper<S> + 'static, tol: Time) -> Self {
        Self {
            a: Box::new(a),
            b: Box::new(b),
            tol,
        }
    }
}

impl<S: SolutionState> Stepper<S> for MinOf<S> {
    fn advance(&self, info: &StepperInfo<S>, feedback: &mut StepperFeedback) -> Time {
        let a = self.a.advance(info, feedback);
        let b = self.b.advance(info, feedback);
        // (∞ - ∞) is NaN; the comparison fails and min() takes over.
        if (a - b).abs() <= self.tol { a } else { a.min(b) }
    }
}
