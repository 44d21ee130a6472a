use serde::{Deserialize, Serialize};
use uom::si::{f64::Time, time::second};

use crate::{SolutionState, TimeIncrement};

/// A read-only snapshot of simulation state passed to every
/// [`crate::Stepper::advance`] call.
///
/// The outer loop owns a `StepperInfo` and mutates it between calls, either
/// directly through the public fields or via [`record_step`](Self::record_step)
/// and [`record_solve`](Self::record_solve). Strategies that reason about
/// history (ratio clamps, growth relative to the last accepted increment,
/// fixed-point re-scanning) rely on the snapshot for call *k + 1* reflecting
/// exactly the outcome of call *k*.
///
/// The solution handles are opaque to the controller; only
/// [`crate::steppers::Dt2`] consumes them, through
/// [`SolutionState::error_norm`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(serialize = "S: Serialize", deserialize = "S: Deserialize<'de>"))]
pub struct StepperInfo<S: SolutionState> {
    /// Number of increments applied so far.
    pub step_count: usize,
    /// Current simulation time. Only ever increases.
    pub time: Time,

    /// The increment actually applied on the last step.
    pub prev_dt: Time,
    pub prev_prev_dt: Time,
    pub prev_prev_prev_dt: Time,

    /// Name of the active time-integration scheme. Informational only.
    pub time_integrator: String,

    /// Nonlinear iterations spent on the last solve.
    pub nonlin_iters: u32,
    /// Linear iterations spent on the last solve.
    pub lin_iters: u32,

    /// Whether the last nonlinear solve converged.
    pub prev_converged: bool,
    /// Whether the last step's result was accepted by the outer loop, as
    /// opposed to being retried with a smaller increment.
    pub prev_step_accepted: bool,

    /// Wall-clock cost of the last solve.
    pub prev_solve_time: Time,
    pub prev_prev_solve_time: Time,
    pub prev_prev_prev_solve_time: Time,

    /// Solution state from the last nonlinear solve.
    pub soln_nonlin: S,
    /// Auxiliary solution state.
    pub soln_aux: S,
    /// Predicted solution state, for error estimation against `soln_nonlin`.
    pub soln_predicted: S,
}

impl<S: SolutionState + Default> Default for StepperInfo<S> {
    fn default() -> Self {
        Self::new(S::default(), S::default(), S::default())
    }
}

impl<S: SolutionState> StepperInfo<S> {
    /// Creates a snapshot at time zero with an empty history.
    ///
    /// The previous solve is reported as converged and accepted so that
    /// convergence-gated strategies start on their nominal branch.
    pub fn new(soln_nonlin: S, soln_aux: S, soln_predicted: S) -> Self {
        let zero = Time::new::<second>(0.0);
        Self {
            step_count: 0,
            time: zero,
            prev_dt: zero,
            prev_prev_dt: zero,
            prev_prev_prev_dt: zero,
            time_integrator: String::new(),
            nonlin_iters: 0,
            lin_iters: 0,
            prev_converged: true,
            prev_step_accepted: true,
            prev_solve_time: zero,
            prev_prev_solve_time: zero,
            prev_prev_prev_solve_time: zero,
            soln_nonlin,
            soln_aux,
            soln_predicted,
        }
    }

    /// Records an applied increment: shifts the dt history, advances time,
    /// and bumps the step count.
    ///
    /// Taking a validated [`TimeIncrement`] keeps the "time only increases"
    /// invariant out of reach of raw stepper output.
    pub fn record_step(&mut self, dt: TimeIncrement) {
        let dt = dt.into_inner();
        self.prev_prev_prev_dt = self.prev_prev_dt;
        self.prev_prev_dt = self.prev_dt;
        self.prev_dt = dt;
        self.time += dt;
        self.step_count += 1;
    }

    /// Records the outcome and cost of the last nonlinear solve, shifting
    /// the solve-time history.
    pub fn record_solve(
        &mut self,
        converged: bool,
        nonlin_iters: u32,
        lin_iters: u32,
        solve_time: Time,
    ) {
        self.prev_converged = converged;
        self.nonlin_iters = nonlin_iters;
        self.lin_iters = lin_iters;
        self.prev_prev_prev_solve_time = self.prev_prev_solve_time;
        self.prev_prev_solve_time = self.prev_solve_time;
        self.prev_solve_time = solve_time;
    }
}
