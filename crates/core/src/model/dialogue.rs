use serde::{Deserialize, Serialize};

use crate::model::{Speaker, Step};

/// One fixed (speaker, text) record in the lesson script.
///
/// `reveal_at` is the explicit per-line step threshold: the line becomes
/// visible once the lesson step reaches it. Thresholds are per-line data
/// rather than "first N lines" so a script can hold a step back for pacing
/// (the built-in script reveals nothing new at step 1, where the video
/// appears instead).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueLine {
    speaker: Speaker,
    text: String,
    reveal_at: Step,
}

impl DialogueLine {
    #[must_use]
    pub fn new(speaker: Speaker, text: impl Into<String>, reveal_at: Step) -> Self {
        Self {
            speaker,
            text: text.into(),
            reveal_at,
        }
    }

    #[must_use]
    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn reveal_at(&self) -> Step {
        self.reveal_at
    }

    /// True once the given step has reached this line's threshold.
    #[must_use]
    pub fn visible_at(&self, step: Step) -> bool {
        step >= self.reveal_at
    }
}
