/// Convenience result type used across reefguide.
pub type GuideResult<T> = Result<T, GuideError>;

/// Top-level error taxonomy.
///
/// Media and animation failures are reported by host collaborators. They are recorded and logged
/// but never abort a controller operation; only configuration errors are returned to callers.
#[derive(thiserror::Error, Debug)]
pub enum GuideError {
    /// Invalid configuration or caller-supplied data.
    #[error("validation error: {0}")]
    Validation(String),

    /// The media-playback collaborator failed to load its source.
    #[error("media load error: {0}")]
    MediaLoad(String),

    /// The vector-animation collaborator failed to play.
    #[error("animation playback error: {0}")]
    AnimationPlayback(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GuideError {
    /// Build a [`GuideError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GuideError::MediaLoad`] value.
    pub fn media_load(msg: impl Into<String>) -> Self {
        Self::MediaLoad(msg.into())
    }

    /// Build a [`GuideError::AnimationPlayback`] value.
    pub fn animation_playback(msg: impl Into<String>) -> Self {
        Self::AnimationPlayback(msg.into())
    }

    /// Build a [`GuideError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
