use serde::{Deserialize, Serialize};

/// One media source entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Source {
    /// Source URL, handed to the player unmodified
    pub src: String,
    /// MIME type, e.g. "video/mp4"
    pub media_type: String,
}

impl Source {
    pub fn new(src: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            media_type: media_type.into(),
        }
    }
}

/// Player configuration supplied by the host at mount time
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlayerOptions {
    /// Start playback as soon as the source can play
    #[serde(default)]
    pub autoplay: bool,
    /// Show the transport row under the seek bar
    #[serde(default)]
    pub controls: bool,
    /// Start muted (webviews refuse unmuted autoplay)
    #[serde(default)]
    pub muted: bool,
    /// Ordered source candidates; the first entry is loaded
    #[serde(default)]
    pub sources: Vec<Source>,
}

impl PlayerOptions {
    /// The source the player will actually load, if any
    pub fn primary_source(&self) -> Option<&Source> {
        self.sources.first()
    }
}
