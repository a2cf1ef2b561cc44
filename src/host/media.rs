use crate::foundation::error::GuideError;

/// Properties handed to the media-playback widget.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct MediaProps {
    /// Video source.
    pub source_uri: String,
    /// Playback is held until the entrance delay expires.
    pub paused: bool,
    /// Restart at the end.
    pub looping: bool,
    /// Audio off.
    pub muted: bool,
}

/// Events reported by the media-playback widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaEvent {
    /// Source started loading.
    LoadStart,
    /// Source loaded and is ready to play.
    Loaded,
    /// Loading failed; carries the widget's error description.
    Error(String),
}

/// What the core remembers about the media widget: the loading spinner and the last failure.
#[derive(Debug)]
pub struct MediaState {
    loading: bool,
    last_error: Option<GuideError>,
}

impl Default for MediaState {
    fn default() -> Self {
        Self {
            loading: true,
            last_error: None,
        }
    }
}

impl MediaState {
    /// Spinner shown, no error yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `true` while the loading indicator should show.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Last reported load failure, if any.
    pub fn last_error(&self) -> Option<&GuideError> {
        self.last_error.as_ref()
    }

    /// Apply a widget event. Failures are logged and recorded, never retried.
    pub fn apply(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::LoadStart => self.loading = true,
            MediaEvent::Loaded => self.loading = false,
            MediaEvent::Error(info) => {
                tracing::warn!(error = %info, "video failed to load");
                self.last_error = Some(GuideError::media_load(info));
                self.loading = false;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/media.rs"]
mod tests;
