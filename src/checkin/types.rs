//! Draft and payload data model for a single check-in session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::EmotionId;

/// Maximum notes length, in Unicode scalar values.
pub const NOTES_MAX_CHARS: usize = 500;

/// Intensity scale default and upper bound.
pub const DEFAULT_INTENSITY: u8 = 50;
pub const MAX_INTENSITY: u8 = 100;

/// In-progress, unsubmitted check-in state. Mutation methods enforce the
/// data-model invariants and return whether the input was accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInDraft {
    pub emotion: Option<EmotionId>,
    pub intensity: u8,
    pub tags: Vec<String>,
    pub notes: String,
}

impl Default for CheckInDraft {
    fn default() -> Self {
        Self {
            emotion: None,
            intensity: DEFAULT_INTENSITY,
            tags: Vec::new(),
            notes: String::new(),
        }
    }
}

impl CheckInDraft {
    /// Select an emotion. Clears the tag selection so the subset invariant
    /// holds against the new emotion's vocabulary.
    pub fn select_emotion(&mut self, emotion: EmotionId) {
        self.emotion = Some(emotion);
        self.tags.clear();
    }

    /// Drop the emotion selection and its tags.
    pub fn clear_emotion(&mut self) {
        self.emotion = None;
        self.tags.clear();
    }

    /// Toggle a tag: add if absent, remove if present. Rejects tags outside
    /// the selected emotion's vocabulary and returns false.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        let Some(emotion) = self.emotion else {
            return false;
        };
        if !emotion.definition().has_tag(tag) {
            return false;
        }
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag.to_string());
        }
        true
    }

    /// Set intensity, clamped to [0, 100].
    pub fn set_intensity(&mut self, value: u8) {
        self.intensity = value.min(MAX_INTENSITY);
    }

    /// Replace the notes text. Input past the 500-character cap is rejected
    /// and the prior value retained.
    pub fn update_notes(&mut self, text: &str) -> bool {
        if text.chars().count() > NOTES_MAX_CHARS {
            return false;
        }
        self.notes = text.to_string();
        true
    }

    /// Reset to the exact initial defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The submitted representation. Built once at submission time from a draft
/// with an emotion selected; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInPayload {
    pub emotion: String,
    pub intensity: u8,
    pub tags: Vec<String>,
    pub notes: String,
    pub timestamp: DateTime<Utc>,
}

impl CheckInPayload {
    /// Build the payload from a draft, stamping it with the current time.
    /// Returns None when no emotion is selected.
    pub fn from_draft(draft: &CheckInDraft) -> Option<Self> {
        let emotion = draft.emotion?;
        Some(Self {
            emotion: emotion.display_name().to_string(),
            intensity: draft.intensity,
            tags: draft.tags.clone(),
            notes: draft.notes.clone(),
            timestamp: Utc::now(),
        })
    }
}
