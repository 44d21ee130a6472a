use uom::si::f64::Time;

use crate::{DtSlot, SolutionState, Stepper, StepperFeedback, StepperInfo};

/// Proposes the current value of a caller-owned [`DtSlot`], verbatim.
///
/// Paired with [`crate::steppers::Instrumented`], which writes the tree's
/// result into the same slot, this lets growth strategies work from the last
/// *accepted* increment rather than the last *requested* one. The stepper
/// holds only a handle; the caller owns the storage and may reseed it when
/// restarting from a checkpoint.
#[derive(Debug, Clone)]
pub struct FromSlot {
    slot: DtSlot,
}

impl FromSlot {
    /// Creates a stepper that reads `slot`.
    #[must_use]
    pub fn new(slot: DtSlot) -> Self {
        Self { slot }
    }
}

impl<S: SolutionState> Stepper<S> for FromSlot {
    fn advance(&self, _info: &StepperInfo<S>, _feedback: &mut StepperFeedback) -> Time {
        self.slot.get()
    }
}
