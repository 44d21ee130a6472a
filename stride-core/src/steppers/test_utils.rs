//! Shared helpers for strategy tests.

use uom::si::{f64::Time, time::second};

use crate::{Stepper, StepperFeedback, StepperInfo, TimeIncrement};

pub(crate) fn seconds(value: f64) -> Time {
    Time::new::<second>(value)
}

/// Applies `dt` to `info` as the outer loop would after a converged solve.
pub(crate) fn apply(info: &mut StepperInfo<()>, dt: Time) {
    info.record_step(TimeIncrement::from_time(dt).unwrap());
}

/// Drives `stepper` for `calls` steps, always applying the exact suggestion,
/// and returns the proposed increments in seconds. Stops applying once the
/// suggestion is non-finite but keeps recording the proposals.
pub(crate) fn drive(stepper: &impl Stepper<()>, info: &mut StepperInfo<()>, calls: usize) -> Vec<f64> {
    let mut dts = Vec::with_capacity(calls);
    for _ in 0..calls {
        let mut feedback = StepperFeedback::new();
        let dt = stepper.advance(info, &mut feedback);
        dts.push(dt.get::<second>());
        if dt.get::<second>().is_finite() {
            apply(info, dt);
        }
    }
    dts
}
