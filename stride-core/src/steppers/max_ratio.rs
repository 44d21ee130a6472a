use uom::si::f64::Time;

use crate::{SolutionState, Stepper, StepperFeedback, StepperInfo};

/// Limits how fast the increment may grow between steps.
///
/// The inner proposal is clamped to `prev_dt * max_ratio`, where `prev_dt` is
/// the increment actually applied on the last step. With no history yet
/// (`prev_dt` is zero) the proposal passes through unmodified. An
/// [`crate::unbounded`] proposal from the inner stepper is capped the same
/// way, which keeps the tree productive after a target-list stepper runs out
/// of targets.
pub struct MaxRatio<S: SolutionState> {
    inner: Box<dyn Stepper<S>>,
    max_ratio: f64,
}

impl<S: SolutionState> MaxRatio<S> {
    /// Wraps `inner`, limiting growth to `max_ratio` per step.
    pub fn new(inner: impl Stepper<S> + 'static, max_ratio: f64) -> Self {
        Self {
            inner: Box::new(inner),
            max_ratio,
        }
    }
}

impl<S: SolutionState> Stepper<S> for MaxRatio<S> {
    fn advance(&self, info: &StepperInfo<S>, feedback: &mut StepperFeedback) -> Time {
        let dt = self.inner.advance(info, feedback);
        if info.prev_dt.value > 0.0 {
            dt.min(info.prev_dt * self.max_ratio)
        } else {
            dt
        }
    }
}
