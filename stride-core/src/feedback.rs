use uom::si::f64::Time;

/// A state-management request raised by a stepper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateRequest {
    /// Record a checkpoint of the current simulation state, keyed by the
    /// current time.
    Snapshot,
    /// Restore the checkpoint recorded at `time` before applying the
    /// proposed increment.
    Rewind { time: Time },
}

/// The output channel a stepper may fill during [`crate::Stepper::advance`].
///
/// The caller creates a fresh (or [`take`](Self::take)n-empty) feedback value
/// for every call and consumes the request afterwards. At most one request
/// can be outstanding per call; a later request within the same call replaces
/// the earlier one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepperFeedback {
    request: Option<StateRequest>,
}

impl StepperFeedback {
    /// Creates an empty feedback value.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks the caller to checkpoint the current state.
    pub fn request_snapshot(&mut self) {
        self.request = Some(StateRequest::Snapshot);
    }

    /// Asks the caller to rewind to the checkpoint recorded at `time`.
    pub fn request_rewind(&mut self, time: Time) {
        self.request = Some(StateRequest::Rewind { time });
    }

    /// Returns the outstanding request without consuming it.
    #[must_use]
    pub fn request(&self) -> Option<StateRequest> {
        self.request
    }

    /// Consumes and returns the outstanding request, leaving the feedback
    /// ready for the next call.
    pub fn take(&mut self) -> Option<StateRequest> {
        self.request.take()
    }
}
