use uom::si::f64::Time;

use crate::{SolutionState, Stepper, StepperFeedback, StepperInfo};

/// Spreads the inner stepper's target over blocks of `n` calls.
///
/// With `k = n - step_count % n` calls remaining in the current block, a
/// finite inner proposal `d` becomes `d / k`, so the inner target is reached
/// exactly when the step count next becomes a multiple of `n`. Combined with
/// a self-correcting inner stepper such as [`crate::steppers::FixedPoint`],
/// the remaining distance is re-divided on every call and the sub-steps stay
/// consistent even when other combinators perturb them. An unbounded inner
/// proposal passes through untouched.
pub struct EveryN<S: SolutionState> {
    inner: Box<dyn Stepper<S>>,
    n: usize,
}

impl<S: SolutionState> EveryN<S> {
    /// Wraps `inner`, reaching its target once every `n` calls. A zero `n`
    /// is treated as 1.
    pub fn new(inner: impl Stepper<S> + 'static, n: usize) -> Self {
        Self {
            inner: Box::new(inner),
            n: n.max(1),
        }
    }
}

impl<S: SolutionState> Stepper<S> for EveryN<S> {
    fn advance(&self, info: &StepperInfo<S>, feedback: &mut StepperFeedback) -> Time {
        let dt = self.inner.advance(info, feedback);
        if !dt.value.is_finite() {
            return dt;
        }
        let remaining = self.n - info.step_count % self.n;
        dt / remaining as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::steppers::{
        ConstDt, FixedPoint,
        test_utils::{drive, seconds},
    };

    #[test]
    fn reaches_the_target_on_the_block_boundary() {
        let stepper = EveryN::new(FixedPoint::new(vec![seconds(6.0)], seconds(1e-10)), 3);
        let mut info = StepperInfo::default();

        let dts = drive(&stepper, &mut info, 4);
        assert_eq!(&dts[..3], &[2.0, 2.0, 2.0]);
        assert!(dts[3].is_infinite());
        assert_eq!(info.time, seconds(6.0));
        assert_eq!(info.step_count, 3);
    }

    #[test]
    fn redivides_after_a_perturbed_sub_step() {
        let stepper = EveryN::new(FixedPoint::new(vec![seconds(6.0)], seconds(1e-10)), 3);
        let mut info = StepperInfo::default();
        let mut feedback = StepperFeedback::new();

        // Apply only half of the first sub-step.
        let dt = stepper.advance(&info, &mut feedback);
        assert_eq!(dt, seconds(2.0));
        crate::steppers::test_utils::apply(&mut info, dt * 0.5);

        // 5 s remain over 2 calls.
        assert_eq!(stepper.advance(&info, &mut feedback), seconds(2.5));
    }

    #[test]
    fn n_of_one_passes_through() {
        let stepper: EveryN<()> = EveryN::new(ConstDt::new(seconds(3.0)), 1);
        let info = StepperInfo::default();
        let mut feedback = StepperFeedback::new();

        assert_eq!(stepper.advance(&info, &mut feedback), seconds(3.0));
    }
}
