use crate::content::config::{GuideConfig, Show};
use crate::foundation::core::Millis;
use crate::foundation::error::GuideResult;
use crate::host::navigation::{Navigator, Route, StackNavigator};
use crate::host::scroll::ScrollHost;
use crate::host::status_bar::StatusBarStyle;
use crate::host::vector::{RecordingPlayer, VectorAnimation};
use crate::screen::exhibit::ExhibitScreen;
use crate::screen::home::HomeScreen;

/// The two-screen app: home at the stack root, exhibit detail pushed on top.
///
/// Screens are mounted when their route becomes part of the stack and unmounted (with every
/// timer released) when it is popped.
#[derive(Debug)]
pub struct GuideApp<V = RecordingPlayer> {
    config: GuideConfig,
    nav: StackNavigator,
    home: HomeScreen<V>,
    exhibit: Option<ExhibitScreen>,
}

impl GuideApp<RecordingPlayer> {
    /// App whose show animations only record commands.
    pub fn headless(config: GuideConfig) -> GuideResult<Self> {
        Self::new(config, |_| RecordingPlayer::new())
    }
}

impl<V: VectorAnimation> GuideApp<V> {
    /// Build the app; nothing is mounted until [`Self::start`].
    pub fn new(config: GuideConfig, make_player: impl FnMut(&Show) -> V) -> GuideResult<Self> {
        let home = HomeScreen::new(&config, make_player)?;
        Ok(Self {
            config,
            nav: StackNavigator::new(),
            home,
            exhibit: None,
        })
    }

    /// Mount the home screen at `now`.
    pub fn start(&mut self, now: Millis) -> GuideResult<()> {
        self.home.mount(now)
    }

    /// Route on top of the stack.
    pub fn current_route(&self) -> Route {
        self.nav.current()
    }

    /// Status bar style for whichever screen is on top.
    pub fn status_bar(&self) -> StatusBarStyle {
        self.exhibit
            .as_ref()
            .map_or(StatusBarStyle::Dark, ExhibitScreen::status_bar)
    }

    /// Home screen.
    pub fn home(&self) -> &HomeScreen<V> {
        &self.home
    }

    /// Home screen, for forwarding input.
    pub fn home_mut(&mut self) -> &mut HomeScreen<V> {
        &mut self.home
    }

    /// Exhibit screen while it is on the stack.
    pub fn exhibit(&self) -> Option<&ExhibitScreen> {
        self.exhibit.as_ref()
    }

    /// Exhibit screen, for forwarding input.
    pub fn exhibit_mut(&mut self) -> Option<&mut ExhibitScreen> {
        self.exhibit.as_mut()
    }

    /// Advance every mounted screen to `now`.
    pub fn advance_to(&mut self, now: Millis, host: &mut dyn ScrollHost) {
        self.home.advance_to(now, host);
        if let Some(ex) = self.exhibit.as_mut() {
            ex.advance_to(now);
        }
    }

    /// Tap a home navigation cell at `now`, mounting the destination if it navigated.
    pub fn tap_nav(&mut self, now: Millis, label: &str) -> GuideResult<bool> {
        let navigated = self.home.tap_nav(label, &mut self.nav);
        self.sync(now)?;
        Ok(navigated)
    }

    /// Press the exhibit close button at `now`, unmounting the exhibit screen.
    pub fn close_exhibit(&mut self, now: Millis) -> GuideResult<bool> {
        let closed = match self.exhibit.as_mut() {
            Some(ex) => ex.close(&mut self.nav),
            None => false,
        };
        self.sync(now)?;
        Ok(closed)
    }

    /// Unmount everything at `now`.
    pub fn unmount_all(&mut self, now: Millis) {
        if let Some(mut ex) = self.exhibit.take() {
            ex.unmount(now);
        }
        self.home.unmount(now);
        while self.nav.go_back() {}
    }

    fn sync(&mut self, now: Millis) -> GuideResult<()> {
        match (self.nav.current(), self.exhibit.is_some()) {
            (Route::ExhibitDetail, false) => {
                let mounted = ExhibitScreen::new(&self.config).and_then(|mut ex| {
                    ex.mount(now)?;
                    Ok(ex)
                });
                match mounted {
                    Ok(ex) => self.exhibit = Some(ex),
                    Err(e) => {
                        // The route must never outlive a screen that failed to come up.
                        self.nav.go_back();
                        tracing::warn!(error = %e, "exhibit screen failed to mount");
                        return Err(e);
                    }
                }
            }
            (Route::Home, true) => {
                if let Some(mut ex) = self.exhibit.take() {
                    ex.unmount(now);
                }
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/screen/app.rs"]
mod tests;
