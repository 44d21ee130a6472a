//! Shared helpers for driving stepper trees the way an outer simulation
//! loop would.

use stride_core::{Stepper, StepperFeedback, StepperInfo, TimeIncrement};
use uom::si::{f64::Time, time::second};

/// Shorthand for a [`Time`] in seconds.
#[must_use]
pub fn seconds(value: f64) -> Time {
    Time::new::<second>(value)
}

/// Applies `dt` to `info` as the outer loop would after a converged solve.
///
/// # Panics
///
/// Panics if `dt` is not a valid increment; tests apply only finite,
/// positive suggestions.
pub fn apply(info: &mut StepperInfo<()>, dt: Time) {
    info.record_step(TimeIncrement::from_time(dt).unwrap());
}

/// Drives `stepper` for `calls` steps, always applying the exact suggestion,
/// and returns the proposed increments in seconds. Non-finite suggestions
/// are recorded but not applied.
pub fn drive(stepper: &impl Stepper<()>, info: &mut StepperInfo<()>, calls: usize) -> Vec<f64> {
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
