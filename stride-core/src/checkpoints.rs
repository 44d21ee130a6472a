use serde::{Deserialize, Serialize};
use uom::si::f64::Time;

use crate::{SolutionState, StepperInfo};

/// A time-keyed store of simulation checkpoints.
///
/// The outer loop owns a `Checkpoints` and services
/// [`crate::StateRequest::Snapshot`] by calling [`save`](Self::save) and
/// [`crate::StateRequest::Rewind`] by calling [`restore`](Self::restore) with
/// the requested time. Lookups tolerate floating-point drift in the key;
/// saving at a time that matches an existing entry (within the same
/// tolerance) replaces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(serialize = "S: Serialize", deserialize = "S: Deserialize<'de>"))]
pub struct Checkpoints<S: SolutionState> {
    entries: Vec<(Time, StepperInfo<S>)>,
    tol: Time,
}

impl<S: SolutionState> Checkpoints<S> {
    /// Creates an empty store with the given key-matching tolerance.
    #[must_use]
    pub fn new(tol: Time) -> Self {
        Self {
            entries: Vec::new(),
            tol,
        }
    }

    /// Saves a checkpoint keyed by `info.time`.
    pub fn save(&mut self, info: &StepperInfo<S>) {
        let time = info.time;
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|(t, _)| (*t - time).abs() <= self.tol)
        {
            entry.1 = info.clone();
        } else {
            self.entries.push((time, info.clone()));
        }
    }

    /// Returns the checkpoint recorded at `time`, if any.
    #[must_use]
    pub fn restore(&self, time: Time) -> Option<&StepperInfo<S>> {
        self.entries
            .iter()
            .find(|(t, _)| (*t - time).abs() <= self.tol)
            .map(|(_, info)| info)
    }

    /// Discards every checkpoint recorded after `time`, keeping the rewind
    /// target itself.
    pub fn discard_after(&mut self, time: Time) {
        let tol = self.tol;
        self.entries.retain(|(t, _)| *t <= time + tol);
    }

    /// Number of stored checkpoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::TimeIncrement;
    use uom::si::time::second;

    fn seconds(value: f64) -> Time {
        Time::new::<second>(value)
    }

    #[test]
    fn save_and_restore_within_tolerance() {
        let mut store = Checkpoints::new(seconds(1e-9));
        let mut info = StepperInfo::<()>::default();
        info.record_step(TimeIncrement::from_seconds(2.0).unwrap());

        store.save(&info);

        let restored = store.restore(seconds(2.0 + 1e-10)).unwrap();
        assert_eq!(restored.step_count, 1);
        assert!(store.restore(seconds(3.0)).is_none());
    }

    #[test]
    fn saving_at_the_same_time_replaces() {
        let mut store = Checkpoints::new(seconds(1e-9));
        let mut info = StepperInfo::<()>::default();

        store.save(&info);
        info.step_count = 7;
        info.time = seconds(0.0);
        store.save(&info);

        assert_eq!(store.len(), 1);
        assert_eq!(store.restore(seconds(0.0)).unwrap().step_count, 7);
    }

    #[test]
    fn discard_after_keeps_the_target() {
        let mut store = Checkpoints::new(seconds(1e-9));
        let mut info = StepperInfo::<()>::default();

        store.save(&info);
        info.record_step(TimeIncrement::from_seconds(1.0).unwrap());
        store.save(&info);
        info.record_step(TimeIncrement::from_seconds(1.0).unwrap());
        store.save(&info);

        store.discard_after(seconds(1.0));
        assert_eq!(store.len(), 2);
        assert!(store.restore(seconds(1.0)).is_some());
        assert!(store.restore(seconds(2.0)).is_none());
    }
}
