//! Static emotion catalog: the six selectable emotions with their
//! descriptive text and per-emotion tag vocabulary.

use serde::{Deserialize, Serialize};

/// Number of tags every catalog entry carries.
pub const TAGS_PER_EMOTION: usize = 6;

/// Catalog key for the six selectable emotions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionId {
    Angry,
    Happy,
    Sad,
    Anxious,
    Excited,
    Calm,
}

impl EmotionId {
    /// All catalog keys, in display order.
    pub const ALL: [EmotionId; 6] = [
        EmotionId::Angry,
        EmotionId::Happy,
        EmotionId::Sad,
        EmotionId::Anxious,
        EmotionId::Excited,
        EmotionId::Calm,
    ];

    /// Look up this emotion's catalog entry.
    pub fn definition(self) -> &'static EmotionDefinition {
        match self {
            EmotionId::Angry => &EMOTIONS[0],
            EmotionId::Happy => &EMOTIONS[1],
            EmotionId::Sad => &EMOTIONS[2],
            EmotionId::Anxious => &EMOTIONS[3],
            EmotionId::Excited => &EMOTIONS[4],
            EmotionId::Calm => &EMOTIONS[5],
        }
    }

    /// Display name submitted in the payload (not the catalog key).
    pub fn display_name(self) -> &'static str {
        self.definition().name
    }
}

/// One immutable catalog entry. The icon is an opaque asset reference; the
/// color is a style hint for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmotionDefinition {
    pub id: EmotionId,
    pub name: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub subtitle: &'static str,
    pub tags: [&'static str; TAGS_PER_EMOTION],
}

impl EmotionDefinition {
    /// Whether `tag` belongs to this emotion's vocabulary.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| *t == tag)
    }
}

/// The fixed six-emotion catalog, constructed once at build time.
pub const EMOTIONS: [EmotionDefinition; 6] = [
    EmotionDefinition {
        id: EmotionId::Angry,
        name: "Angry",
        color: "red",
        icon: "Anger.png",
        description: "Anger is a complex emotion",
        subtitle: "Identifying your emotions is the first step to releasing them",
        tags: ["Irritated", "Annoyed", "Frustrated", "Fed Up", "Grumpy", "Touchy"],
    },
    EmotionDefinition {
        id: EmotionId::Happy,
        name: "Happy",
        color: "yellow",
        icon: "Happy.png",
        description: "Happiness brings light to your day",
        subtitle: "Embracing joy helps spread positivity to others",
        tags: ["Excited", "Content", "Cheerful", "Elated", "Optimistic", "Grateful"],
    },
    EmotionDefinition {
        id: EmotionId::Sad,
        name: "Sad",
        color: "blue",
        icon: "Sad.png",
        description: "Sadness is a natural response",
        subtitle: "Acknowledging sadness is part of emotional healing",
        tags: ["Disappointed", "Melancholy", "Grief", "Lonely", "Dejected", "Heartbroken"],
    },
    EmotionDefinition {
        id: EmotionId::Anxious,
        name: "Awe",
        color: "purple",
        icon: "Awe.png",
        description: "Anxiety signals our concerns",
        subtitle: "Understanding anxiety helps us find calm",
        tags: ["Worried", "Nervous", "Stressed", "Overwhelmed", "Restless", "Tense"],
    },
    EmotionDefinition {
        id: EmotionId::Excited,
        name: "Excitement",
        color: "orange",
        icon: "Content.png",
        description: "Excitement energizes us",
        subtitle: "Channel this energy into positive action",
        tags: ["Thrilled", "Eager", "Enthusiastic", "Energetic", "Motivated", "Inspired"],
    },
    EmotionDefinition {
        id: EmotionId::Calm,
        name: "Neutral",
        color: "green",
        icon: "Neutral.png",
        description: "Calmness brings peace",
        subtitle: "Inner peace radiates outward to others",
        tags: ["Peaceful", "Relaxed", "Serene", "Balanced", "Centered", "Tranquil"],
    },
];
