use crate::content::config::Show;
use crate::foundation::error::GuideError;
use crate::host::vector::VectorAnimation;

/// One "upcoming shows" card with a tap-to-toggle vector animation.
#[derive(Debug)]
pub struct ShowCard<V> {
    show: Show,
    playing: bool,
    player: V,
    last_error: Option<GuideError>,
}

impl<V: VectorAnimation> ShowCard<V> {
    /// Card for `show`, animation idle.
    pub fn new(show: Show, player: V) -> Self {
        Self {
            show,
            playing: false,
            player,
            last_error: None,
        }
    }

    /// Listing shown on the card.
    pub fn show(&self) -> &Show {
        &self.show
    }

    /// Return `true` while the animation is playing.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Borrow the animation widget.
    pub fn player(&self) -> &V {
        &self.player
    }

    /// Last reported playback failure.
    pub fn last_error(&self) -> Option<&GuideError> {
        self.last_error.as_ref()
    }

    /// Toggle: play when idle; rewind and pause when playing.
    pub fn tap(&mut self) {
        if self.playing {
            self.player.reset();
            self.player.pause();
        } else {
            self.player.play();
        }
        self.playing = !self.playing;
    }

    /// Record a failure from the widget; the card keeps its toggle state.
    pub fn on_failure(&mut self, info: impl Into<String>) {
        let info = info.into();
        tracing::warn!(show = self.show.id, error = %info, "show animation failed");
        self.last_error = Some(GuideError::animation_playback(info));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/screen/show_card.rs"]
mod tests;
