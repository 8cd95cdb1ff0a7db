use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two fixed roles in the lesson script.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Teacher,
    Student,
}

impl Speaker {
    /// The on-screen name for this role.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Speaker::Teacher => "교사",
            Speaker::Student => "학생",
        }
    }

    #[must_use]
    pub const fn is_teacher(self) -> bool {
        matches!(self, Speaker::Teacher)
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
