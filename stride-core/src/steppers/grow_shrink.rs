use uom::si::f64::Time;

use crate::{SolutionState, Stepper, StepperFeedback, StepperInfo};

/// Scales a source value up after success and down after failure.
///
/// The source is either a child stepper or, by default, the last applied
/// increment (`info.prev_dt`). When the previous solve converged the source
/// value is multiplied by `grow_factor`; otherwise by `shrink_factor`.
///
/// Two configurations cover the common uses:
///
/// - `GrowShrink::with_source(1.0, factor, FromSlot::new(slot))` grows
///   relative to the last *accepted* increment.
/// - `GrowShrink::new(0.5, 1.0)` as the failure branch of
///   [`crate::steppers::IfConverged`] expresses a bisection-style cutback of
///   `prev_dt`.
pub struct GrowShrink<S: SolutionState> {
    shrink_factor: f64,
    grow_factor: f64,
    source: Option<Box<dyn Stepper<S>>>,
}

impl<S: SolutionState> GrowShrink<S> {
    /// Scales `info.prev_dt` by `grow_factor` or `shrink_factor`.
    #[must_use]
    pub fn new(shrink_factor: f64, grow_factor: f64) -> Self {
        Self {
            shrink_factor,
            grow_factor,
            source: None,
        }
    }

    /// Scales the proposal of `source` instead of `info.prev_dt`.
    pub fn with_source(
        shrink_factor: f64,
        grow_factor: f64,
        source: impl Stepper<S> + 'static,
    ) -> Self {
        Self {
            shrink_factor,
            grow_factor,
            source: Some(Box::new(source)),
        }
    }
}

impl<S: SolutionState> Stepper<S> for GrowShrink<S> {
    fn advance(&self, info: &StepperInfo<S>, feedback: &mut StepperFeedback) -> Time {
        let base = match &self.source {
            Some(source) => source.advance(info, feedback),
            None => info.prev_dt,
        };
        if info.prev_converged {
            base * self.grow_factor
        } else {
            base * self.shrink_factor
        }
    }
}
