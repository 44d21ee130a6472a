use uom::si::f64::Time;

use crate::{DtSlot, SolutionState, Stepper, StepperFeedback, StepperInfo};

/// Persists the wrapped tree's result into a caller-owned [`DtSlot`].
///
/// On every call the inner proposal is computed, written to the slot, and
/// returned unchanged. This is the single point where the controller's
/// external, restartable state is updated; [`crate::steppers::FromSlot`]
/// leaves anywhere in the same tree observe the value on the next call. A
/// slot must be written by exactly one `Instrumented` instance.
pub struct Instrumented<S: SolutionState> {
    inner: Box<dyn Stepper<S>>,
    slot: DtSlot,
}

impl<S: SolutionState> Instrumented<S> {
    /// Wraps `inner`, mirroring its results into `slot`.
    pub fn new(inner: impl Stepper<S> + 'static, slot: DtSlot) -> Self {
        Self {
            inner: Box::new(inner),
            slot,
        }
    }
}

impl<S: SolutionState> Stepper<S> for Instrumented<S> {
    fn advance(&self, info: &StepperInfo<S>, feedback: &mut StepperFeedback) -> Time {
        let dt = self.inner.advance(info, feedback);
        self.slot.set(dt);
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::steppers::{
        ConstDt, FromSlot, GrowShrink, MinOf,
        test_utils::{drive, seconds},
    };

    #[test]
    fn mirrors_the_result_into_the_slot() {
        let slot = DtSlot::new(seconds(0.0));
        let stepper: Instrumented<()> =
            Instrumented::new(ConstDt::new(seconds(2.5)), slot.clone());
        let info = StepperInfo::default();
        let mut feedback = StepperFeedback::new();

        assert_eq!(stepper.advance(&info, &mut feedback), seconds(2.5));
        assert_eq!(slot.get(), seconds(2.5));
    }

    #[test]
    fn closes_the_loop_for_slot_readers() {
        // Grow 2x from the last result, but never beyond 8 s. The growth
        // compounds through the slot: 1, 2, 4, 8, 8, ...
        let slot = DtSlot::new(seconds(0.5));
        let stepper = Instrumented::new(
            MinOf::new(
                GrowShrink::with_source(1.0, 2.0, FromSlot::new(slot.clone())),
                ConstDt::new(seconds(8.0)),
                seconds(1e-10),
            ),
            slot.clone(),
        );
        let mut info = StepperInfo::default();

        assert_eq!(drive(&stepper, &mut info, 5), vec![1.0, 2.0, 4.0, 8.0, 8.0]);
        assert_eq!(slot.get(), seconds(8.0));
    }
}
