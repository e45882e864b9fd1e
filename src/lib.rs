// Moodcheck Library - Mood Check-In Wizard
// This exposes the core components for embedding and integration

pub mod catalog;
pub mod checkin;
pub mod submit;
pub mod telemetry;

// Re-export key types for easy access
pub use catalog::{EmotionDefinition, EmotionId, EMOTIONS, TAGS_PER_EMOTION};
pub use checkin::{
    CheckInDraft, CheckInEvent, CheckInMachine, CheckInPayload, CheckInSession, CheckInTransport,
    Step, WizardState, DEFAULT_INTENSITY, FAILURE_MESSAGE, NOTES_MAX_CHARS, SUCCESS_MESSAGE,
};
pub use submit::{HttpSubmitClient, SubmitConfig, SubmitError, DEFAULT_ENDPOINT};
pub use telemetry::init_telemetry;
