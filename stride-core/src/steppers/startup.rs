use uom::si::f64::Time;

use crate::{SolutionState, Stepper, StepperFeedback, StepperInfo};

/// Holds a cautious fixed increment during the first steps of a simulation.
///
/// While `info.step_count <= n_startup_steps` the stepper proposes
/// `startup_dt` without consulting the inner tree; afterwards it delegates
/// every call to `inner`.
pub struct Startup<S: SolutionState> {
    inner: Box<dyn Stepper<S>>,
    startup_dt: Time,
    n_startup_steps: usize,
}

impl<S: SolutionState> Startup<S> {
    /// Wraps `inner`, proposing `startup_dt` for the first
    /// `n_startup_steps` steps.
    pub fn new(
        inner: impl Stepper<S> + 'static,
        startup_dt: Time,
        n_startup_steps: usize,
    ) -> Self {
        Self {
            inner: Box::new(inner),
            startup_dt,
            n_startup_steps,
        }
    }
}

impl<S: SolutionState> Stepper<S> for Startup<S> {
    fn advance(&self, info: &StepperInfo<S>, feedback: &mut StepperFeedback) -> Time {
        if info.step_count <= self.n_startup_steps {
            self.startup_dt
        } else {
            self.inner.advance(info, feedback)
        }
    }
}
