use crate::content::config::{GuideConfig, NavItem, Show, Slide, TabItem, TicketSummary};
use crate::foundation::core::{Lifecycle, Millis};
use crate::foundation::error::{GuideError, GuideResult};
use crate::host::navigation::Navigator;
use crate::host::scroll::ScrollHost;
use crate::host::vector::{RecordingPlayer, VectorAnimation};
use crate::motion::carousel::CarouselController;
use crate::motion::pulse::{PulseSample, PulseSequencer};
use crate::screen::show_card::ShowCard;
use crate::timing::scheduler::{Fired, Scheduler};

/// Derived visual state of the home screen at one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct HomeFrame {
    /// Clock time this frame was sampled at.
    pub at: Millis,
    /// Carousel page on display.
    pub active_slide: usize,
    /// Pagination dots, `true` at the active page.
    pub pagination: Vec<bool>,
    /// Pulse applied to the pulsing navigation cell.
    pub pulse: PulseSample,
    /// Label of the pulsing navigation cell, if any.
    pub pulsing_label: Option<String>,
    /// Per show card: whether its animation is playing.
    pub shows_playing: Vec<bool>,
}

/// Home screen: carousel, navigation grid with a pulsing cell, tickets, shows, tab bar.
///
/// Owns its scheduler and every timer and animation it starts; [`HomeScreen::unmount`]
/// releases all of them.
#[derive(Debug)]
pub struct HomeScreen<V = RecordingPlayer> {
    slides: Vec<Slide>,
    nav: Vec<NavItem>,
    tabs: Vec<TabItem>,
    tickets: TicketSummary,
    interval_ms: u64,
    scheduler: Scheduler,
    carousel: CarouselController,
    pulse: PulseSequencer,
    cards: Vec<ShowCard<V>>,
    lifecycle: Lifecycle,
}

impl HomeScreen<RecordingPlayer> {
    /// Home screen whose show animations only record commands.
    pub fn headless(config: &GuideConfig) -> GuideResult<Self> {
        Self::new(config, |_| RecordingPlayer::new())
    }
}

impl<V: VectorAnimation> HomeScreen<V> {
    /// Build the screen from `config`, creating one animation widget per show.
    pub fn new(config: &GuideConfig, mut make_player: impl FnMut(&Show) -> V) -> GuideResult<Self> {
        config.validate()?;
        let cards = config
            .shows
            .iter()
            .map(|s| ShowCard::new(s.clone(), make_player(s)))
            .collect();
        Ok(Self {
            slides: config.slides.clone(),
            nav: config.nav.clone(),
            tabs: config.tabs.clone(),
            tickets: config.tickets.clone(),
            interval_ms: config.carousel_interval_ms,
            scheduler: Scheduler::default(),
            carousel: CarouselController::new(config.slides.len(), config.page_width)?,
            pulse: PulseSequencer::new(config.pulse)?,
            cards,
            lifecycle: Lifecycle::Unmounted,
        })
    }

    /// Carousel banners in display order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Navigation grid cells.
    pub fn nav(&self) -> &[NavItem] {
        &self.nav
    }

    /// Bottom tab bar.
    pub fn tabs(&self) -> &[TabItem] {
        &self.tabs
    }

    /// Tickets and park hours.
    pub fn tickets(&self) -> &TicketSummary {
        &self.tickets
    }

    /// Show cards in list order.
    pub fn show_cards(&self) -> &[ShowCard<V>] {
        &self.cards
    }

    /// Carousel controller, for inspection.
    pub fn carousel(&self) -> &CarouselController {
        &self.carousel
    }

    /// Return `true` while mounted.
    pub fn is_mounted(&self) -> bool {
        self.lifecycle.is_mounted()
    }

    /// Number of live timers owned by this screen.
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Due time of the next pending timer, if any.
    pub fn next_timer_due(&self) -> Option<Millis> {
        self.scheduler.next_due()
    }

    /// Mount at `now`: start the carousel timer and the pulse loop.
    #[tracing::instrument(skip(self))]
    pub fn mount(&mut self, now: Millis) -> GuideResult<()> {
        if self.lifecycle.is_mounted() {
            return Err(GuideError::validation("home screen is already mounted"));
        }
        self.scheduler = Scheduler::new(now);
        self.carousel.start(&mut self.scheduler, self.interval_ms)?;
        self.pulse.start(now);
        self.lifecycle = Lifecycle::Mounted;
        tracing::info!(slides = self.slides.len(), "home screen mounted");
        Ok(())
    }

    /// Advance the clock to `now`, applying every timer that expires on the way.
    ///
    /// Returns the number of carousel advances applied.
    pub fn advance_to(&mut self, now: Millis, host: &mut dyn ScrollHost) -> usize {
        let fired = self.scheduler.advance_to(now);
        self.dispatch(fired, host)
    }

    /// The user touched the carousel at `now`. Touch wins over a tick due at the same instant.
    pub fn touch_start(&mut self, now: Millis, host: &mut dyn ScrollHost) {
        let fired = self.scheduler.advance_before(now);
        self.dispatch(fired, host);
        self.carousel.on_user_touch_start(&mut self.scheduler);
    }

    /// The user lifted their finger at `now`; auto-advance restarts with a full interval.
    pub fn touch_end(&mut self, now: Millis, host: &mut dyn ScrollHost) -> GuideResult<()> {
        let fired = self.scheduler.advance_before(now);
        self.dispatch(fired, host);
        self.carousel.on_user_touch_end(&mut self.scheduler)
    }

    /// The pager settled at horizontal `offset` at `now`.
    pub fn scroll_settled(&mut self, now: Millis, offset: f64, host: &mut dyn ScrollHost) {
        let fired = self.scheduler.advance_before(now);
        self.dispatch(fired, host);
        self.carousel.on_manual_scroll_settled(offset);
    }

    /// Tap the navigation cell labelled `label`. Returns `true` if it navigated.
    pub fn tap_nav(&mut self, label: &str, nav: &mut dyn Navigator) -> bool {
        if !self.lifecycle.is_mounted() {
            return false;
        }
        let route = self
            .nav
            .iter()
            .find(|n| n.label == label)
            .and_then(|n| n.route);
        match route {
            Some(route) => {
                nav.navigate_to(route);
                true
            }
            None => false,
        }
    }

    /// Tap show card `index`, toggling its animation.
    pub fn tap_show(&mut self, index: usize) -> GuideResult<()> {
        let card = self
            .cards
            .get_mut(index)
            .ok_or_else(|| GuideError::validation(format!("no show card at index {index}")))?;
        card.tap();
        Ok(())
    }

    /// Forward an animation failure reported by show card `index`'s widget.
    pub fn show_failure(&mut self, index: usize, info: impl Into<String>) -> GuideResult<()> {
        let card = self
            .cards
            .get_mut(index)
            .ok_or_else(|| GuideError::validation(format!("no show card at index {index}")))?;
        card.on_failure(info);
        Ok(())
    }

    /// Sample derived visual state at `now`.
    pub fn frame(&self, now: Millis) -> HomeFrame {
        HomeFrame {
            at: now,
            active_slide: self.carousel.active_index(),
            pagination: self.carousel.pagination(),
            pulse: self.pulse.sample(now),
            pulsing_label: self
                .nav
                .iter()
                .find(|n| n.pulsing)
                .map(|n| n.label.clone()),
            shows_playing: self.cards.iter().map(ShowCard::is_playing).collect(),
        }
    }

    /// Tear down at `now`: stop the carousel and the pulse and drop every timer.
    pub fn unmount(&mut self, now: Millis) {
        self.carousel.stop(&mut self.scheduler);
        self.pulse.stop(now);
        self.scheduler.clear_all();
        if self.lifecycle.is_mounted() {
            tracing::info!(at = now.0, "home screen unmounted");
        }
        self.lifecycle = Lifecycle::Unmounted;
    }

    fn dispatch(&mut self, fired: Vec<Fired>, host: &mut dyn ScrollHost) -> usize {
        let mut applied = 0;
        for f in fired {
            if self.carousel.on_timer(f, &mut *host) {
                applied += 1;
            }
        }
        applied
    }
}

#[cfg(test)]
#[path = "../../tests/unit/screen/home.rs"]
mod tests;
