use crate::foundation::core::Lifecycle;
use crate::foundation::error::{GuideError, GuideResult};
use crate::host::scroll::ScrollHost;
use crate::timing::scheduler::{Fired, Scheduler, TimerId};

/// Auto-advancing paged banner carousel.
///
/// The controller is the only writer of `active_index`. Writes come from its own interval timer,
/// from the host reporting where a drag settled, or from [`CarouselController::advance`].
/// While the user is touching the pager no timer-driven write can happen: touch-start cancels
/// the timer, and an expiry that was already collected by the host is rejected because its id
/// no longer matches.
#[derive(Debug)]
pub struct CarouselController {
    slide_count: usize,
    page_width: f64,
    interval_ms: u64,
    active_index: usize,
    timer: Option<TimerId>,
    lifecycle: Lifecycle,
}

impl CarouselController {
    /// Controller over `slide_count` pages of `page_width` points each.
    pub fn new(slide_count: usize, page_width: f64) -> GuideResult<Self> {
        if slide_count == 0 {
            return Err(GuideError::validation("carousel needs at least one slide"));
        }
        if !(page_width.is_finite() && page_width > 0.0) {
            return Err(GuideError::validation("carousel page width must be > 0"));
        }
        Ok(Self {
            slide_count,
            page_width,
            interval_ms: 0,
            active_index: 0,
            timer: None,
            lifecycle: Lifecycle::Unmounted,
        })
    }

    /// Currently displayed page.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Return `true` while an auto-advance timer is pending.
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Pagination dots: `true` exactly at the active page.
    pub fn pagination(&self) -> Vec<bool> {
        (0..self.slide_count)
            .map(|i| i == self.active_index)
            .collect()
    }

    /// Mount and begin auto-advancing every `interval_ms`.
    pub fn start(&mut self, sched: &mut Scheduler, interval_ms: u64) -> GuideResult<()> {
        if let Some(old) = self.timer.take() {
            sched.clear(old);
        }
        self.timer = Some(sched.set_interval(interval_ms)?);
        self.interval_ms = interval_ms;
        self.lifecycle = Lifecycle::Mounted;
        tracing::debug!(interval_ms, "carousel started");
        Ok(())
    }

    /// Cancel auto-advance because the user touched the pager. Idempotent.
    pub fn on_user_touch_start(&mut self, sched: &mut Scheduler) {
        if let Some(id) = self.timer.take() {
            sched.clear(id);
            tracing::debug!(active = self.active_index, "carousel paused by touch");
        }
    }

    /// Restart auto-advance from zero with the interval given to [`Self::start`].
    ///
    /// A partially elapsed interval from before the touch is not resumed.
    pub fn on_user_touch_end(&mut self, sched: &mut Scheduler) -> GuideResult<()> {
        if !self.lifecycle.is_mounted() {
            return Ok(());
        }
        if let Some(old) = self.timer.take() {
            sched.clear(old);
        }
        self.timer = Some(sched.set_interval(self.interval_ms)?);
        tracing::debug!(active = self.active_index, "carousel resumed");
        Ok(())
    }

    /// Record the page the pager settled on after a drag.
    ///
    /// The settled page always wins over whatever the timer last asked for.
    pub fn on_manual_scroll_settled(&mut self, page_offset: f64) {
        if !self.lifecycle.is_mounted() || !page_offset.is_finite() {
            return;
        }
        let page = (page_offset / self.page_width).round().max(0.0) as usize;
        let page = page.min(self.slide_count - 1);
        if page != self.active_index {
            tracing::debug!(from = self.active_index, to = page, "carousel settled");
        }
        self.active_index = page;
    }

    /// Apply a timer expiry. Returns `true` when it advanced the carousel.
    ///
    /// Expiries of cancelled or foreign timers, and any expiry after [`Self::stop`], are ignored.
    pub fn on_timer(&mut self, fired: Fired, host: &mut dyn ScrollHost) -> bool {
        if !self.lifecycle.is_mounted() || self.timer != Some(fired.id) {
            return false;
        }
        self.advance(host);
        true
    }

    /// Move to the next page, wrapping after the last, and ask the host to scroll there.
    pub fn advance(&mut self, host: &mut dyn ScrollHost) {
        if !self.lifecycle.is_mounted() {
            return;
        }
        self.active_index = (self.active_index + 1) % self.slide_count;
        host.scroll_to(self.active_index as f64 * self.page_width, true);
        tracing::debug!(active = self.active_index, "carousel advanced");
    }

    /// Cancel the timer and unmount. Safe to call more than once.
    pub fn stop(&mut self, sched: &mut Scheduler) {
        if let Some(id) = self.timer.take() {
            sched.clear(id);
        }
        if self.lifecycle.is_mounted() {
            tracing::debug!(active = self.active_index, "carousel stopped");
        }
        self.lifecycle = Lifecycle::Unmounted;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/carousel.rs"]
mod tests;
