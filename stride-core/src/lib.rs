//! Core traits and types for Stride, a composable adaptive time-step
//! controller for transient simulations.
//!
//! The controller is a tree of [`Stepper`] strategies. Once per time step the
//! outer simulation loop calls [`Stepper::advance`] on the root with a
//! read-only [`StepperInfo`] snapshot and receives the proposed size of the
//! next time increment. Strategies combine freely:
//!
//! - Leaves propose sizes outright ([`steppers::ConstDt`],
//!   [`steppers::FixedPoint`], [`steppers::FromSlot`]).
//! - Combinators own child steppers and merge or gate their proposals
//!   ([`steppers::MinOf`], [`steppers::MaxRatio`], [`steppers::GrowShrink`],
//!   [`steppers::Startup`], [`steppers::IfConverged`], [`steppers::EveryN`]).
//! - [`steppers::Dt2`] rejects steps on estimated error, asking the caller to
//!   checkpoint and rewind through [`StepperFeedback`].
//! - The [`steppers::Instrumented`] decorator persists the tree's result into
//!   a caller-owned [`DtSlot`] so descendants can grow relative to the last
//!   accepted increment.
//!
//! A stepper signals "no opinion" by returning [`unbounded`] time; the caller
//! converts the combined result into a validated [`TimeIncrement`] before
//! applying it.

mod checkpoints;
mod feedback;
mod increment;
mod info;
mod slot;
mod state;
mod stepper;

pub mod steppers;

pub use checkpoints::Checkpoints;
pub use feedback::{StateRequest, StepperFeedback};
pub use increment::{TimeIncrement, TimeIncrementError};
pub use info::StepperInfo;
pub use slot::DtSlot;
pub use state::SolutionState;
pub use stepper::{Stepper, unbounded};
