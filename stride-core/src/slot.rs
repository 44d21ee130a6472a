use std::{cell::Cell, rc::Rc};

use uom::si::f64::Time;

/// A shared handle to a caller-owned time-increment cell.
///
/// Slots close the loop between [`crate::steppers::Instrumented`], which
/// writes the tree's result after every call, and any number of
/// [`crate::steppers::FromSlot`] leaves that read it back on the next call.
/// The caller keeps a clone so it can persist the value across process
/// restarts and reseed it on recovery.
///
/// Cloning a `DtSlot` clones the handle, not the cell; all clones observe the
/// same value. The controller is single-threaded by contract, so no locking
/// is involved.
#[derive(Debug, Clone)]
pub struct DtSlot(Rc<Cell<Time>>);

impl DtSlot {
    /// Creates a slot holding `initial`.
    #[must_use]
    pub fn new(initial: Time) -> Self {
        Self(Rc::new(Cell::new(initial)))
    }

    /// Returns the current value.
    #[must_use]
    pub fn get(&self) -> Time {
        self.0.get()
    }

    /// Replaces the current value.
    pub fn set(&self, dt: Time) {
        self.0.set(dt);
    }
}
