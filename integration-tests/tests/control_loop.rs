//! A full adaptive control loop: growth from the last accepted increment,
//! a nominal ceiling, and bisection-style cutback on solve failure.

use approx::assert_relative_eq;
use integration_tests::{apply, seconds};
use stride_core::{
    DtSlot, Stepper, StepperFeedback, StepperInfo,
    steppers::{ConstDt, FromSlot, GrowShrink, IfConverged, Instrumented, MinOf},
};

/// Grow 2x from the persisted last increment while converging, capped at a
/// nominal 4 s; halve the last attempt after a failure.
fn adaptive_tree(slot: &DtSlot) -> impl Stepper<()> {
    Instrumented::new(
        IfConverged::new(
            MinOf::new(
                GrowShrink::with_source(1.0, 2.0, FromSlot::new(slot.clone())),
                ConstDt::new(seconds(4.0)),
                seconds(1e-10),
            ),
            GrowShrink::new(0.5, 1.0),
        ),
        slot.clone(),
    )
}

#[test]
fn cutback_and_regrowth_through_the_persisted_slot() {
    let slot = DtSlot::new(seconds(1.0));
    let stepper = adaptive_tree(&slot);
    let mut info = StepperInfo::default();
    let mut feedback = StepperFeedback::new();

    // Two converged steps: growth compounds through the slot until the cap.
    let dt = stepper.advance(&info, &mut feedback);
    assert_relative_eq!(dt.get::<uom::si::time::second>(), 2.0);
    apply(&mut info, dt);

    let dt = stepper.advance(&info, &mut feedback);
    assert_relative_eq!(dt.get::<uom::si::time::second>(), 4.0);
    apply(&mut info, dt);

    // The next solve fails; the loop retries with a halved increment.
    info.record_solve(false, 50, 400, seconds(1.0));
    let retry = stepper.advance(&info, &mut feedback);
    assert_relative_eq!(retry.get::<uom::si::time::second>(), 2.0);
    info.prev_dt = retry;

    // The retry converges and is accepted.
    info.record_solve(true, 6, 40, seconds(0.2));
    apply(&mut info, retry);

    // Growth resumes from the accepted 2 s, not from the rejected 4 s.
    let dt = stepper.advance(&info, &mut feedback);
    assert_relative_eq!(dt.get::<uom::si::time::second>(), 4.0);
}

#[test]
fn restart_reseeds_growth_from_the_persisted_value() {
    // A fresh process restores the slot from persisted state; the tree picks
    // up where the previous run left off.
    let slot = DtSlot::new(seconds(0.25));
    let stepper = adaptive_tree(&slot);
    let info = StepperInfo::default();
    let mut feedback = StepperFeedback::new();

    let dt = stepper.advance(&info, &mut feedback);
    assert_relative_eq!(dt.get::<uom::si::time::second>(), 0.5);
    assert_relative_eq!(slot.get().get::<uom::si::time::second>(), 0.5);
}
