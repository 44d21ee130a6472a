//! The configuration language and direct construction must produce
//! behaviorally identical trees.

use approx::assert_relative_eq;
use integration_tests::{drive, seconds};
use stride_core::{
    StepperInfo,
    steppers::{ConstDt, FixedPoint, MinOf},
};
use stride_dsl::StepperBuilder;

const COMPOSITE: &str =
    "(MinOfStepper (ConstStepper 4.2) (FixedPointStepper (2 4 10 12) 1e-10) 1e-10)";

fn programmatic_composite() -> MinOf<()> {
    MinOf::new(
        ConstDt::new(seconds(4.2)),
        FixedPoint::new(
            vec![seconds(2.0), seconds(4.0), seconds(10.0), seconds(12.0)],
            seconds(1e-10),
        ),
        seconds(1e-10),
    )
}

#[test]
fn dsl_and_programmatic_trees_agree_step_for_step() {
    let from_text = StepperBuilder::<()>::new().build_str(COMPOSITE).unwrap();
    let by_hand = programmatic_composite();

    let mut text_info = StepperInfo::default();
    let mut hand_info = StepperInfo::default();

    let text_dts = drive(&from_text, &mut text_info, 10);
    let hand_dts = drive(&by_hand, &mut hand_info, 10);

    assert_eq!(text_dts, hand_dts);
    assert_eq!(text_info.time, hand_info.time);
}

#[test]
fn the_composite_hits_its_targets_under_the_ceiling() {
    let stepper = StepperBuilder::<()>::new().build_str(COMPOSITE).unwrap();
    let mut info = StepperInfo::default();

    let dts = drive(&stepper, &mut info, 6);

    // Fixed points at 2 and 4 win, then the 4.2 s ceiling takes over until
    // the remaining distance to a target drops below it.
    assert_relative_eq!(dts[0], 2.0);
    assert_relative_eq!(dts[1], 2.0);
    assert_relative_eq!(dts[2], 4.2);
    assert_relative_eq!(dts[3], 1.8, max_relative = 1e-12);
    assert_relative_eq!(dts[4], 2.0, max_relative = 1e-12);
    assert_relative_eq!(dts[5], 4.2);
}

#[test]
fn rebuilding_from_the_same_text_is_deterministic() {
    let builder = StepperBuilder::<()>::new();
    let first = builder.build_str(COMPOSITE).unwrap();
    let second = builder.build_str(COMPOSITE).unwrap();

    let mut info_a = StepperInfo::default();
    let mut info_b = StepperInfo::default();

    assert_eq!(drive(&first, &mut info_a, 10), drive(&second, &mut info_b, 10));
}
