//! Wizard state machine for the check-in flow.
//!
//! The wizard is a small event-driven machine: Selection -> Details ->
//! (Success | Error), with Reset returning to Selection. Invalid events are
//! guarded no-ops rather than errors; terminal states accept nothing but
//! Reset.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::EmotionId;
use crate::checkin::types::CheckInDraft;

/// Message shown on the Success terminal step.
pub const SUCCESS_MESSAGE: &str = "Check-in submitted successfully!";
/// Message shown on the Error terminal step.
pub const FAILURE_MESSAGE: &str = "Failed to submit. Please try again.";

/// Wizard state. Terminal states carry their user-facing message so a
/// terminal step without one is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardState {
    Selection,
    Details,
    Success { message: String },
    Error { message: String },
}

impl Default for WizardState {
    fn default() -> Self {
        WizardState::Selection
    }
}

impl WizardState {
    pub fn step(&self) -> Step {
        match self {
            WizardState::Selection => Step::Selection,
            WizardState::Details => Step::Details,
            WizardState::Success { .. } => Step::Success,
            WizardState::Error { .. } => Step::Error,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, WizardState::Success { .. } | WizardState::Error { .. })
    }
}

/// Payload-free view of the current step, for guards and display logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    Selection,
    Details,
    Success,
    Error,
}

/// Events that can drive the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckInEvent {
    SelectEmotion { emotion: EmotionId },
    ClearEmotion,
    ToggleTag { tag: String },
    SetIntensity { value: u8 },
    Continue,
    Back,
    Skip,
    UpdateNotes { text: String },
    SubmissionSucceeded,
    SubmissionFailed,
    Reset,
}

/// The wizard machine: current state plus the draft being edited.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInMachine {
    state: WizardState,
    draft: CheckInDraft,
}

impl CheckInMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step(&self) -> Step {
        self.state.step()
    }

    pub fn draft(&self) -> &CheckInDraft {
        &self.draft
    }

    pub fn selected_emotion(&self) -> Option<EmotionId> {
        self.draft.emotion
    }

    pub fn selected_tags(&self) -> &[String] {
        &self.draft.tags
    }

    pub fn intensity(&self) -> u8 {
        self.draft.intensity
    }

    pub fn notes(&self) -> &str {
        &self.draft.notes
    }

    /// The terminal-step message, if the wizard has reached one.
    pub fn message(&self) -> Option<&str> {
        match &self.state {
            WizardState::Success { message } | WizardState::Error { message } => Some(message),
            _ => None,
        }
    }

    /// Handle a wizard event. Guarded events that do not apply in the
    /// current state are ignored.
    pub fn handle_event(&mut self, event: CheckInEvent) {
        match (self.step(), event) {
            (Step::Selection, CheckInEvent::SelectEmotion { emotion }) => {
                self.draft.select_emotion(emotion);
                info!(emotion = ?emotion, "Emotion selected, tag selection cleared");
            }
            (Step::Selection, CheckInEvent::ClearEmotion) => {
                self.draft.clear_emotion();
                info!("Emotion selection cleared");
            }
            (Step::Selection, CheckInEvent::ToggleTag { tag }) => {
                if self.draft.toggle_tag(&tag) {
                    debug!(tag = %tag, tags = ?self.draft.tags, "Tag toggled");
                } else {
                    debug!(tag = %tag, "Tag rejected: not in the selected emotion's vocabulary");
                }
            }
            (Step::Selection | Step::Details, CheckInEvent::SetIntensity { value }) => {
                if self.draft.emotion.is_some() {
                    self.draft.set_intensity(value);
                    debug!(intensity = %self.draft.intensity, "Intensity updated");
                } else {
                    debug!("Intensity ignored: no emotion selected");
                }
            }
            (Step::Selection, CheckInEvent::Continue) => {
                if self.draft.emotion.is_some() {
                    self.transition(WizardState::Details, "continue");
                } else {
                    debug!("Continue ignored: no emotion selected");
                }
            }
            (Step::Details, CheckInEvent::Back) => {
                self.transition(WizardState::Selection, "back");
            }
            // Skip is behaviorally identical to Back: return to Selection
            // with emotion, tags, and notes retained.
            (Step::Details, CheckInEvent::Skip) => {
                self.transition(WizardState::Selection, "skip");
            }
            (Step::Details, CheckInEvent::UpdateNotes { text }) => {
                if !self.draft.update_notes(&text) {
                    debug!(len = text.chars().count(), "Notes update rejected: over cap");
                }
            }
            (Step::Details, CheckInEvent::SubmissionSucceeded) => {
                self.transition(
                    WizardState::Success {
                        message: SUCCESS_MESSAGE.to_string(),
                    },
                    "submission_succeeded",
                );
            }
            (Step::Details, CheckInEvent::SubmissionFailed) => {
                self.transition(
                    WizardState::Error {
                        message: FAILURE_MESSAGE.to_string(),
                    },
                    "submission_failed",
                );
            }
            (Step::Success | Step::Error, CheckInEvent::Reset) => {
                self.draft.reset();
                self.transition(WizardState::Selection, "reset");
            }
            (step, event) => {
                debug!(step = ?step, event = ?event, "Ignoring event: not valid in current state");
            }
        }
    }

    fn transition(&mut self, to: WizardState, event: &str) {
        info!(
            from = ?self.state.step(),
            to = ?to.step(),
            event = %event,
            "Check-in wizard state transition"
        );
        self.state = to;
    }
}
