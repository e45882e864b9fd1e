// Transport seam - separating the wire call from the wizard for testability

use async_trait::async_trait;

use crate::checkin::types::CheckInPayload;
use crate::submit::SubmitError;

/// Outbound delivery of a completed check-in.
#[async_trait]
pub trait CheckInTransport: Send + Sync {
    /// Send the payload to the remote endpoint. One attempt, no retry.
    async fn send(&self, payload: &CheckInPayload) -> Result<(), SubmitError>;
}

// Lets callers keep a handle on an injected transport (e.g. a mock) while
// the session owns its own.
#[async_trait]
impl<T: CheckInTransport + ?Sized> CheckInTransport for std::sync::Arc<T> {
    async fn send(&self, payload: &CheckInPayload) -> Result<(), SubmitError> {
        (**self).send(payload).await
    }
}
