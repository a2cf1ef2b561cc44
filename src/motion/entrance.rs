use crate::animation::anim::{Anim, Lockstep};
use crate::animation::ease::Ease;
use crate::foundation::core::{Lifecycle, Millis};
use crate::foundation::error::{GuideError, GuideResult};
use crate::timing::scheduler::{Fired, Scheduler, TimerId};

/// Timing of the exhibit screen's entrance.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EntranceStyle {
    /// Fade/slide duration.
    pub duration_ms: u64,
    /// Starting downward offset of the content, in points.
    pub offset_px: f64,
    /// Delay before background video playback is enabled.
    pub video_delay_ms: u64,
    /// Easing shared by both channels.
    #[serde(default)]
    pub ease: Ease,
}

impl EntranceStyle {
    /// Reject a zero duration or a negative or non-finite offset.
    pub fn validate(&self) -> GuideResult<()> {
        if self.duration_ms == 0 {
            return Err(GuideError::validation("entrance duration must be > 0"));
        }
        if !(self.offset_px.is_finite() && self.offset_px >= 0.0) {
            return Err(GuideError::validation("entrance offset must be >= 0"));
        }
        Ok(())
    }
}

impl Default for EntranceStyle {
    fn default() -> Self {
        Self {
            duration_ms: 800,
            offset_px: 40.0,
            video_delay_ms: 2000,
            ease: Ease::EaseInOut,
        }
    }
}

/// Whether the header video may play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoGate {
    /// Delay still running; video stays paused.
    #[default]
    Waiting,
    /// Delay expired. Terminal for the lifetime of the screen.
    Enabled,
}

/// Content fade/slide values at one instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct EntranceFrame {
    /// Content opacity in `[0, 1]`.
    pub opacity: f64,
    /// Downward content offset in `[0, offset_px]`.
    pub vertical_offset: f64,
}

/// One-shot fade-in/slide-up plus a delayed video-enable trigger.
#[derive(Debug)]
pub struct EntranceSequencer {
    style: EntranceStyle,
    channels: Lockstep<f64, f64>,
    started_at: Option<Millis>,
    frozen: Option<(f64, f64)>,
    delay_timer: Option<TimerId>,
    gate: VideoGate,
    lifecycle: Lifecycle,
}

impl EntranceSequencer {
    /// Build the opacity/offset pair for `style`.
    pub fn new(style: EntranceStyle) -> GuideResult<Self> {
        style.validate()?;
        let channels = Lockstep::new(
            Anim::tween(0.0, 1.0, style.duration_ms, style.ease)?,
            Anim::tween(style.offset_px, 0.0, style.duration_ms, style.ease)?,
        )?;
        Ok(Self {
            style,
            channels,
            started_at: None,
            frozen: None,
            delay_timer: None,
            gate: VideoGate::Waiting,
            lifecycle: Lifecycle::Unmounted,
        })
    }

    /// Start both channels and the video delay at the scheduler's current time.
    pub fn mount(&mut self, sched: &mut Scheduler) {
        if let Some(old) = self.delay_timer.take() {
            sched.clear(old);
        }
        self.started_at = Some(sched.now());
        self.frozen = None;
        self.gate = VideoGate::Waiting;
        self.delay_timer = Some(sched.set_timeout(self.style.video_delay_ms));
        self.lifecycle = Lifecycle::Mounted;
    }

    /// Apply a timer expiry. Returns `true` when it enabled video playback.
    pub fn on_timer(&mut self, fired: Fired) -> bool {
        if !self.lifecycle.is_mounted() || self.delay_timer != Some(fired.id) {
            return false;
        }
        self.delay_timer = None;
        self.gate = VideoGate::Enabled;
        tracing::info!(at = fired.at.0, "video playback enabled");
        true
    }

    /// Current video gate.
    pub fn gate(&self) -> VideoGate {
        self.gate
    }

    /// Return `true` once the delay has expired.
    pub fn video_playback_enabled(&self) -> bool {
        self.gate == VideoGate::Enabled
    }

    /// Return `true` once both channels reached their final values.
    pub fn is_complete(&self, now: Millis) -> bool {
        match (self.frozen, self.started_at) {
            (Some(_), _) => false,
            (None, Some(t0)) => self.channels.is_finished(now.since(t0)),
            (None, None) => false,
        }
    }

    /// Sample the content fade/slide at `now`.
    pub fn sample(&self, now: Millis) -> EntranceFrame {
        let (opacity, vertical_offset) = match (self.frozen, self.started_at) {
            (Some(v), _) => v,
            (None, Some(t0)) => self.channels.sample(now.since(t0)),
            (None, None) => (0.0, self.style.offset_px),
        };
        EntranceFrame {
            opacity,
            vertical_offset,
        }
    }

    /// Cancel the delay timer and halt both channels at `now`. Safe to call more than once.
    pub fn teardown(&mut self, sched: &mut Scheduler, now: Millis) {
        if let Some(id) = self.delay_timer.take() {
            sched.clear(id);
        }
        if self.lifecycle.is_mounted() {
            let f = self.sample(now);
            self.frozen = Some((f.opacity, f.vertical_offset));
            self.lifecycle = Lifecycle::Unmounted;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/entrance.rs"]
mod tests;
