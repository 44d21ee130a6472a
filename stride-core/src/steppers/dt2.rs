use std::cell::Cell;

use uom::si::f64::Time;

use crate::{SolutionState, Stepper, StepperFeedback, StepperInfo, unbounded};

/// Step-doubling local-error control with checkpoint and rewind.
///
/// The estimated error is `soln_nonlin.error_norm(&soln_predicted)`, the
/// relative distance between the converged solution and the prediction the
/// caller obtained by stepping differently (typically one full step against
/// two half steps).
///
/// - Error above `error_max`: the step is rejected. A
///   [`crate::StateRequest::Rewind`] to the most recent checkpoint is raised
///   (when one exists) and `prev_dt * sqrt(error_tol / err)` is proposed for
///   the redo.
/// - Error at or below `error_max`: the step stands. A
///   [`crate::StateRequest::Snapshot`] is raised unless the last checkpoint
///   is within `time_tol` of the current time, and the proposal grows by up
///   to 2x when the error is comfortably under `error_tol`.
///
/// With no applied increment yet there is nothing to scale, so the stepper
/// has no opinion.
pub struct Dt2 {
    time_tol: Time,
    error_tol: f64,
    error_max: f64,
    last_snapshot: Cell<Option<Time>>,
}

impl Dt2 {
    /// Creates the error controller.
    ///
    /// `time_tol` deduplicates checkpoint times; `error_tol` is the target
    /// error per step and `error_max` the rejection threshold,
    /// `error_tol <= error_max`.
    #[must_use]
    pub fn new(time_tol: Time, error_tol: f64, error_max: f64) -> Self {
        Self {
            time_tol,
            error_tol,
            error_max,
            last_snapshot: Cell::new(None),
        }
    }
}

impl<S: SolutionState> Stepper<S> for Dt2 {
    fn advance(&self, info: &StepperInfo<S>, feedback: &mut StepperFeedback) -> Time {
        if info.prev_dt.value <= 0.0 {
            return unbounded();
        }

        let err = info.soln_nonlin.error_norm(&info.soln_predicted);

        if err > self.error_max {
            if let Some(time) = self.last_snapshot.get() {
                feedback.request_rewind(time);
            }
            return info.prev_dt * (self.error_tol / err).sqrt();
        }

        let stale = match self.last_snapshot.get() {
            Some(time) => (info.time - time).abs() > self.time_tol,
            None => true,
        };
        if stale {
            feedback.request_snapshot();
            self.last_snapshot.set(Some(info.time));
        }

        if err < self.error_tol {
            let growth = (self.error_tol / err.max(f64::EPSILON)).sqrt().min(2.0);
            info.prev_dt * growth
        } else {
            info.prev_dt
        }
    }
}
