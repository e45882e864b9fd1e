pub mod mocks;
pub mod session;
pub mod state_machine;
pub mod traits;
pub mod types;

pub use session::CheckInSession;
pub use state_machine::{
    CheckInEvent, CheckInMachine, Step, WizardState, FAILURE_MESSAGE, SUCCESS_MESSAGE,
};
pub use traits::CheckInTransport;
pub use types::{CheckInDraft, CheckInPayload, DEFAULT_INTENSITY, NOTES_MAX_CHARS};
