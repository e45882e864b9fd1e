// Mock transport for testing - records payloads, no side effects

use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::checkin::traits::CheckInTransport;
use crate::checkin::types::CheckInPayload;
use crate::submit::SubmitError;

/// Mock transport that records every payload it is asked to send and serves
/// a scripted outcome.
#[derive(Debug, Default)]
pub struct MockTransport {
    sent: Mutex<Vec<CheckInPayload>>,
    fail: Mutex<bool>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport that fails every send with a server error status.
    pub fn failing() -> Self {
        let transport = Self::new();
        transport.set_fail(true);
        transport
    }

    pub fn set_fail(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    pub fn sent_payloads(&self) -> Vec<CheckInPayload> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl CheckInTransport for MockTransport {
    async fn send(&self, payload: &CheckInPayload) -> Result<(), SubmitError> {
        self.sent.lock().unwrap().push(payload.clone());
        if *self.fail.lock().unwrap() {
            Err(SubmitError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
            })
        } else {
            Ok(())
        }
    }
}
