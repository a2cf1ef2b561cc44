use crate::content::config::{Exhibit, GuideConfig};
use crate::foundation::core::{HEADER_MAX_HEIGHT, Lifecycle, Millis};
use crate::foundation::error::{GuideError, GuideResult};
use crate::host::media::{MediaEvent, MediaProps, MediaState};
use crate::host::navigation::Navigator;
use crate::host::status_bar::StatusBarStyle;
use crate::motion::entrance::{EntranceFrame, EntranceSequencer, VideoGate};
use crate::motion::header::{HeaderFrame, HeaderInterpolator};
use crate::timing::scheduler::Scheduler;

/// Derived visual state of the exhibit screen at one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ExhibitFrame {
    /// Clock time this frame was sampled at.
    pub at: Millis,
    /// Last vertical scroll offset reported by the host.
    pub scroll_offset: f64,
    /// Collapsing header values.
    pub header: HeaderFrame,
    /// Content fade/slide values.
    pub content: EntranceFrame,
    /// Video gate state.
    pub video_gate: VideoGate,
    /// Properties for the media widget.
    pub media: MediaProps,
    /// Whether the loading indicator shows over the header.
    pub loading: bool,
    /// Status bar style requested by this screen.
    pub status_bar: StatusBarStyle,
}

/// Exhibit detail screen: parallax video header over scrolling, fading-in content.
#[derive(Debug)]
pub struct ExhibitScreen {
    exhibit: Exhibit,
    scheduler: Scheduler,
    header: HeaderInterpolator,
    entrance: EntranceSequencer,
    media: MediaState,
    scroll_offset: f64,
    lifecycle: Lifecycle,
}

impl ExhibitScreen {
    /// Build the screen from `config`.
    pub fn new(config: &GuideConfig) -> GuideResult<Self> {
        config.validate()?;
        Ok(Self {
            exhibit: config.exhibit.clone(),
            scheduler: Scheduler::default(),
            header: HeaderInterpolator::new(HEADER_MAX_HEIGHT, config.header_min_height())?,
            entrance: EntranceSequencer::new(config.entrance)?,
            media: MediaState::new(),
            scroll_offset: 0.0,
            lifecycle: Lifecycle::Unmounted,
        })
    }

    /// Static exhibit content.
    pub fn exhibit(&self) -> &Exhibit {
        &self.exhibit
    }

    /// Header interpolator in use.
    pub fn header(&self) -> &HeaderInterpolator {
        &self.header
    }

    /// Media widget state.
    pub fn media(&self) -> &MediaState {
        &self.media
    }

    /// Return `true` while mounted.
    pub fn is_mounted(&self) -> bool {
        self.lifecycle.is_mounted()
    }

    /// Light over the video header while mounted; dark once torn down.
    pub fn status_bar(&self) -> StatusBarStyle {
        if self.lifecycle.is_mounted() {
            StatusBarStyle::Light
        } else {
            StatusBarStyle::Dark
        }
    }

    /// Number of live timers owned by this screen.
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Mount at `now`: start the entrance animation and the video delay.
    #[tracing::instrument(skip(self))]
    pub fn mount(&mut self, now: Millis) -> GuideResult<()> {
        if self.lifecycle.is_mounted() {
            return Err(GuideError::validation("exhibit screen is already mounted"));
        }
        self.scheduler = Scheduler::new(now);
        self.entrance.mount(&mut self.scheduler);
        self.media = MediaState::new();
        self.scroll_offset = 0.0;
        self.lifecycle = Lifecycle::Mounted;
        tracing::info!(exhibit = %self.exhibit.title, "exhibit screen mounted");
        Ok(())
    }

    /// Advance the clock to `now`, applying every timer that expires on the way.
    pub fn advance_to(&mut self, now: Millis) {
        for f in self.scheduler.advance_to(now) {
            self.entrance.on_timer(f);
        }
    }

    /// The content scrolled to vertical `offset`.
    pub fn on_scroll(&mut self, offset: f64) {
        if self.lifecycle.is_mounted() && offset.is_finite() {
            self.scroll_offset = offset;
        }
    }

    /// Apply an event reported by the media widget. Late events after unmount are dropped.
    pub fn on_media_event(&mut self, event: MediaEvent) {
        if !self.lifecycle.is_mounted() {
            tracing::debug!(?event, "media event after unmount dropped");
            return;
        }
        self.media.apply(event);
    }

    /// The close button: pop this screen. Returns `true` if the navigator went back.
    pub fn close(&mut self, nav: &mut dyn Navigator) -> bool {
        self.lifecycle.is_mounted() && nav.go_back()
    }

    /// Sample derived visual state at `now`.
    pub fn frame(&self, now: Millis) -> ExhibitFrame {
        ExhibitFrame {
            at: now,
            scroll_offset: self.scroll_offset,
            header: self.header.frame(self.scroll_offset),
            content: self.entrance.sample(now),
            video_gate: self.entrance.gate(),
            media: MediaProps {
                source_uri: self.exhibit.video_uri.clone(),
                paused: !self.entrance.video_playback_enabled(),
                looping: true,
                muted: true,
            },
            loading: self.media.is_loading(),
            status_bar: self.status_bar(),
        }
    }

    /// Tear down at `now`: cancel the delay timer and halt the entrance animation.
    pub fn unmount(&mut self, now: Millis) {
        self.entrance.teardown(&mut self.scheduler, now);
        self.scheduler.clear_all();
        if self.lifecycle.is_mounted() {
            tracing::info!(at = now.0, "exhibit screen unmounted");
        }
        self.lifecycle = Lifecycle::Unmounted;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/screen/exhibit.rs"]
mod tests;
