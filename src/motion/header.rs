use crate::foundation::core::{HEADER_MAX_HEIGHT, Platform};
use crate::foundation::error::{GuideError, GuideResult};
use crate::foundation::math::lerp_clamped;

/// Title scale when the header is fully collapsed.
pub const TITLE_MIN_SCALE: f64 = 0.8;

/// Header values derived from one scroll offset.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct HeaderFrame {
    /// Header height in points, from max (at rest) down to min (collapsed).
    pub height: f64,
    /// Opacity of the gradient overlay; reaches zero halfway through the collapse.
    pub overlay_opacity: f64,
    /// Title scale, from 1 down to [`TITLE_MIN_SCALE`].
    pub title_scale: f64,
}

/// Collapsing parallax header driven by the content's vertical scroll offset.
///
/// Stateless: every output is a pure function of the offset passed in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderInterpolator {
    max_height: f64,
    min_height: f64,
}

impl HeaderInterpolator {
    /// Header collapsing from `max_height` to `min_height`.
    pub fn new(max_height: f64, min_height: f64) -> GuideResult<Self> {
        if !(max_height.is_finite() && min_height.is_finite()) || min_height < 0.0 {
            return Err(GuideError::validation("header heights must be finite and >= 0"));
        }
        if max_height <= min_height {
            return Err(GuideError::validation(format!(
                "header max height {max_height} must exceed min height {min_height}"
            )));
        }
        Ok(Self {
            max_height,
            min_height,
        })
    }

    /// Reference header for `platform` (300 down to 90 on iOS, 70 on Android).
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            max_height: HEADER_MAX_HEIGHT,
            min_height: platform.header_min_height(),
        }
    }

    /// Expanded height.
    pub fn max_height(&self) -> f64 {
        self.max_height
    }

    /// Collapsed height.
    pub fn min_height(&self) -> f64 {
        self.min_height
    }

    /// Scroll distance over which the header collapses (`max - min`).
    pub fn scroll_distance(&self) -> f64 {
        self.max_height - self.min_height
    }

    /// Header height at `offset`.
    pub fn header_height(&self, offset: f64) -> f64 {
        lerp_clamped(
            offset,
            (0.0, self.scroll_distance()),
            (self.max_height, self.min_height),
        )
    }

    /// Overlay opacity at `offset`.
    pub fn overlay_opacity(&self, offset: f64) -> f64 {
        lerp_clamped(offset, (0.0, self.scroll_distance() / 2.0), (1.0, 0.0))
    }

    /// Title scale at `offset`.
    pub fn title_scale(&self, offset: f64) -> f64 {
        lerp_clamped(
            offset,
            (0.0, self.scroll_distance()),
            (1.0, TITLE_MIN_SCALE),
        )
    }

    /// All three values at `offset`.
    pub fn frame(&self, offset: f64) -> HeaderFrame {
        HeaderFrame {
            height: self.header_height(offset),
            overlay_opacity: self.overlay_opacity(offset),
            title_scale: self.title_scale(offset),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/header.rs"]
mod tests;
