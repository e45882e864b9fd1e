//! Session layer: owns the wizard machine and a transport, and drives the
//! submission lifecycle.

use tracing::{debug, info, warn};

use crate::checkin::state_machine::{CheckInEvent, CheckInMachine, Step};
use crate::checkin::traits::CheckInTransport;
use crate::checkin::types::CheckInPayload;

/// One check-in session: the wizard machine plus the outbound transport.
///
/// The session is exclusively owned; all mutation goes through `&mut self`,
/// so the draft has no concurrent writers. The only asynchronous operation
/// is [`submit`](Self::submit).
pub struct CheckInSession {
    machine: CheckInMachine,
    transport: Box<dyn CheckInTransport>,
    submitting: bool,
}

impl CheckInSession {
    pub fn new(transport: Box<dyn CheckInTransport>) -> Self {
        Self {
            machine: CheckInMachine::new(),
            transport,
            submitting: false,
        }
    }

    pub fn machine(&self) -> &CheckInMachine {
        &self.machine
    }

    /// True while a submission is in flight. The UI disables the submit
    /// affordance on this flag.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Forward a wizard event to the state machine.
    pub fn handle_event(&mut self, event: CheckInEvent) {
        self.machine.handle_event(event);
    }

    /// Submit the current draft. Valid only from the Details step with an
    /// emotion selected; exactly one send per invocation, no retry. Any
    /// transport error or non-success status collapses into the single
    /// failure outcome. Invalid or re-entrant calls are no-ops.
    pub async fn submit(&mut self) {
        if self.submitting {
            debug!("Submit ignored: submission already in flight");
            return;
        }
        if self.machine.step() != Step::Details {
            debug!(step = ?self.machine.step(), "Submit ignored: not on the details step");
            return;
        }
        let Some(payload) = CheckInPayload::from_draft(self.machine.draft()) else {
            debug!("Submit ignored: no emotion selected");
            return;
        };

        self.submitting = true;
        info!(
            emotion = %payload.emotion,
            intensity = %payload.intensity,
            tags = ?payload.tags,
            "Submitting check-in"
        );

        let result = self.transport.send(&payload).await;
        self.submitting = false;

        match result {
            Ok(()) => {
                info!("Check-in submitted");
                self.machine.handle_event(CheckInEvent::SubmissionSucceeded);
            }
            Err(error) => {
                warn!(error = %error, "Check-in submission failed");
                self.machine.handle_event(CheckInEvent::SubmissionFailed);
            }
        }
    }
}
