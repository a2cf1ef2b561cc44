use crate::animation::anim::{Anim, Keyframe, Keyframes, Lerp, Lockstep};
use crate::animation::ease::Ease;
use crate::foundation::core::{Lifecycle, Millis, Rgba8};
use crate::foundation::error::{GuideError, GuideResult};
use crate::foundation::math::unlerp_clamped;

/// Baseline (resting) intensity.
pub const INTENSITY_REST: f64 = 1.0;
/// Intensity at the peak of a pulse.
pub const INTENSITY_PEAK: f64 = 0.6;
/// Baseline scale.
pub const SCALE_REST: f64 = 1.0;
/// Scale at the peak of a pulse.
pub const SCALE_PEAK: f64 = 1.2;

/// Timing and colors of the attention pulse.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PulseStyle {
    /// Duration of each ramp (out and back).
    pub ramp_ms: u64,
    /// Pause after the ramps before the next cycle.
    pub hold_ms: u64,
    /// Label color at peak intensity.
    pub peak_color: Rgba8,
    /// Label color at rest.
    pub rest_color: Rgba8,
    /// Easing of both ramps.
    #[serde(default)]
    pub ease: Ease,
}

impl Default for PulseStyle {
    fn default() -> Self {
        Self {
            ramp_ms: 600,
            hold_ms: 1000,
            peak_color: Rgba8::rgb(0x00, 0x7a, 0xff),
            rest_color: Rgba8::rgb(0x66, 0x66, 0x66),
            ease: Ease::EaseInOut,
        }
    }
}

impl PulseStyle {
    /// Length of one full cycle: ramp out, ramp back, hold. Saturates instead of overflowing;
    /// [`Self::validate`] rejects styles where that would happen.
    pub fn period_ms(&self) -> u64 {
        self.checked_period_ms().unwrap_or(u64::MAX)
    }

    /// Reject a zero ramp or a cycle too long for the millisecond clock.
    pub fn validate(&self) -> GuideResult<()> {
        if self.ramp_ms == 0 {
            return Err(GuideError::validation("pulse ramp must be > 0"));
        }
        if self.checked_period_ms().is_none() {
            return Err(GuideError::validation(format!(
                "pulse cycle overflows: ramp {}ms, hold {}ms",
                self.ramp_ms, self.hold_ms
            )));
        }
        Ok(())
    }

    fn checked_period_ms(&self) -> Option<u64> {
        self.ramp_ms.checked_mul(2)?.checked_add(self.hold_ms)
    }
}

/// Derived visual parameters of the pulsing icon at one instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PulseSample {
    /// In `[0.6, 1.0]`; drives the label color.
    pub intensity: f64,
    /// In `[1.0, 1.2]`; applied to both icon and label.
    pub scale: f64,
    /// Label color interpolated from `intensity`.
    pub color: Rgba8,
}

/// Endless pulse: intensity and scale ramp out together, ramp back, then hold.
#[derive(Debug)]
pub struct PulseSequencer {
    style: PulseStyle,
    channels: Lockstep<f64, f64>,
    started_at: Option<Millis>,
    frozen: Option<(f64, f64)>,
    lifecycle: Lifecycle,
}

impl PulseSequencer {
    /// Build the looping channel pair for `style`.
    pub fn new(style: PulseStyle) -> GuideResult<Self> {
        style.validate()?;
        let r = style.ramp_ms;
        let period = style.period_ms();
        let channel = |rest: f64, peak: f64| -> GuideResult<Anim<f64>> {
            let kf = Keyframes::new(vec![
                Keyframe::new(0, rest, style.ease),
                Keyframe::new(r, peak, style.ease),
                Keyframe::new(2 * r, rest, style.ease),
            ])?;
            Anim::looped(kf, period)
        };
        let channels = Lockstep::new(
            channel(INTENSITY_REST, INTENSITY_PEAK)?,
            channel(SCALE_REST, SCALE_PEAK)?,
        )?;
        Ok(Self {
            style,
            channels,
            started_at: None,
            frozen: None,
            lifecycle: Lifecycle::Unmounted,
        })
    }

    /// Cycle length in milliseconds.
    pub fn period_ms(&self) -> u64 {
        self.style.period_ms()
    }

    /// Return `true` between [`Self::start`] and [`Self::stop`].
    pub fn is_running(&self) -> bool {
        self.lifecycle.is_mounted()
    }

    /// Begin the loop at `now`.
    pub fn start(&mut self, now: Millis) {
        self.started_at = Some(now);
        self.frozen = None;
        self.lifecycle = Lifecycle::Mounted;
    }

    /// Halt both channels at their values at `now`. Safe to call more than once.
    pub fn stop(&mut self, now: Millis) {
        if self.lifecycle.is_mounted() {
            self.frozen = Some(self.channel_values(now));
            self.lifecycle = Lifecycle::Unmounted;
        }
    }

    /// Sample the pulse at `now`.
    pub fn sample(&self, now: Millis) -> PulseSample {
        let (intensity, scale) = self.channel_values(now);
        PulseSample {
            intensity,
            scale,
            color: self.color_for(intensity),
        }
    }

    /// Label color for an intensity; peak color at 0.6, rest color at 1.0.
    pub fn color_for(&self, intensity: f64) -> Rgba8 {
        let t = unlerp_clamped(intensity, INTENSITY_PEAK, INTENSITY_REST);
        Rgba8::lerp(&self.style.peak_color, &self.style.rest_color, t)
    }

    fn channel_values(&self, now: Millis) -> (f64, f64) {
        if let Some(v) = self.frozen {
            return v;
        }
        match self.started_at {
            Some(t0) if self.lifecycle.is_mounted() => self.channels.sample(now.since(t0)),
            _ => (INTENSITY_REST, SCALE_REST),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/pulse.rs"]
mod tests;
