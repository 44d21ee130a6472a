//! Time-step strategies.
//!
//! Leaves propose increments outright; combinators own child steppers and
//! merge, gate, or reshape their proposals. Any tree of these implements
//! [`crate::Stepper`] and is driven one call per simulation step.

mod const_dt;
mod dt2;
mod every_n;
mod fixed_point;
mod from_slot;
mod grow_shrink;
mod if_converged;
mod instrumented;
mod max_ratio;
mod min_of;
mod startup;

pub use const_dt::ConstDt;
pub use dt2::Dt2;
pub use every_n::EveryN;
pub use fixed_point::FixedPoint;
pub use from_slot::FromSlot;
pub use grow_shrink::GrowShrink;
pub use if_converged::IfConverged;
pub use instrumented::Instrumented;
pub use max_ratio::MaxRatio;
pub use min_of::MinOf;
pub use startup::Startup;

#[cfg(test)]
pub(crate) mod test_utils;
