use uom::si::f64::Time;

use crate::{SolutionState, Stepper, StepperFeedback, StepperInfo};

/// Always proposes the same increment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstDt {
    dt: Time,
}

impl ConstDt {
    /// Creates a stepper that proposes `dt` on every call.
    #[must_use]
    pub fn new(dt: Time) -> Self {
        Self { dt }
    }
}

impl<S: SolutionState> Stepper<S> for ConstDt {
    fn advance(&self, _info: &StepperInfo<S>, _feedback: &mut StepperFeedback) -> Time {
        self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::steppers::test_utils::{drive, seconds};

    #[test]
    fn proposes_the_same_increment_every_call() {
        let stepper = ConstDt::new(seconds(4.2));
        let mut info = StepperInfo::default();

        assert_eq!(drive(&stepper, &mut info, 3), vec![4.2, 4.2, 4.2]);
    }
}
