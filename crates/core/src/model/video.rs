use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use url::Url;

/// The lesson's default clip: the Top Gun: Maverick opening sequence.
pub const DEFAULT_VIDEO_ID: &str = "1EsqQHIMXZg";

const EMBED_BASE: &str = "https://www.youtube.com/embed/";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VideoIdError {
    #[error("video id is empty")]
    Empty,

    #[error("video id contains {ch:?}; only letters, digits, '-' and '_' are allowed")]
    InvalidChar { ch: char },
}

/// A validated YouTube video identifier.
///
/// Validation keeps the embed URL well-formed without any escaping: ids are
/// restricted to the URL-safe alphabet YouTube actually uses.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VideoId(String);

impl VideoId {
    /// # Errors
    ///
    /// Returns `VideoIdError::Empty` for an empty id and
    /// `VideoIdError::InvalidChar` for anything outside `[A-Za-z0-9_-]`.
    pub fn new(raw: impl Into<String>) -> Result<Self, VideoIdError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(VideoIdError::Empty);
        }
        if let Some(ch) = raw
            .chars()
            .find(|ch| !ch.is_ascii_alphanumeric() && *ch != '-' && *ch != '_')
        {
            return Err(VideoIdError::InvalidChar { ch });
        }
        Ok(Self(raw))
    }

    /// The built-in default clip id.
    #[must_use]
    pub fn default_clip() -> Self {
        Self::new(DEFAULT_VIDEO_ID).expect("default video id is valid")
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The parameterized embed URL for this clip.
    #[must_use]
    pub fn embed_url(&self) -> Url {
        let raw = format!("{EMBED_BASE}{}", self.0);
        Url::parse(&raw).expect("validated id forms a valid embed url")
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for VideoId {
    type Error = VideoIdError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<VideoId> for String {
    fn from(id: VideoId) -> Self {
        id.0
    }
}
