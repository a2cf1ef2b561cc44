use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::{HEADER_MAX_HEIGHT, Platform, Rgba8};
use crate::foundation::error::{GuideError, GuideResult};
use crate::host::navigation::Route;
use crate::motion::entrance::EntranceStyle;
use crate::motion::pulse::PulseStyle;

/// One carousel banner. Order in [`GuideConfig::slides`] is carousel order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Slide {
    /// Unique, stable id.
    pub id: u32,
    /// Banner background.
    pub color: Rgba8,
    /// Banner text; may contain line breaks.
    pub caption: String,
}

/// One entry in the "upcoming shows" list.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Show {
    /// Unique id.
    pub id: u32,
    /// Display time, e.g. `2:30 PM`.
    pub time: String,
    /// Show title.
    pub title: String,
}

/// One cell of the home navigation grid.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NavItem {
    /// Label under the icon.
    pub label: String,
    /// Screen opened on tap; `None` for cells without a destination.
    #[serde(default)]
    pub route: Option<Route>,
    /// Whether this cell carries the attention pulse.
    #[serde(default)]
    pub pulsing: bool,
}

/// One bottom-tab-bar entry.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TabItem {
    /// Tab label.
    pub label: String,
    /// Highlighted tab.
    #[serde(default)]
    pub active: bool,
}

/// Ticket and park-hours summary boxes.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TicketSummary {
    /// Ticket box heading.
    pub tickets_title: String,
    /// Ticket box body.
    pub tickets_text: String,
    /// Ticket box link.
    pub tickets_link: String,
    /// Park-hours heading (today's date).
    pub hours_title: String,
    /// Opening hours.
    pub hours_text: String,
    /// Park-hours link.
    pub hours_link: String,
}

/// Static content of the exhibit detail screen.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Exhibit {
    /// Zone tag above the title.
    pub zone: String,
    /// Exhibit name; scaled by the header interpolator.
    pub title: String,
    /// Walking distance label.
    pub distance: String,
    /// Description paragraphs.
    pub paragraphs: Vec<String>,
    /// Header background video.
    pub video_uri: String,
}

/// Complete static configuration of the guide.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GuideConfig {
    /// Platform; selects the collapsed header height.
    #[serde(default)]
    pub platform: Platform,
    /// Carousel page width in points (the window width).
    pub page_width: f64,
    /// Carousel auto-advance period.
    pub carousel_interval_ms: u64,
    /// Carousel banners.
    pub slides: Vec<Slide>,
    /// Upcoming shows.
    pub shows: Vec<Show>,
    /// Navigation grid cells.
    pub nav: Vec<NavItem>,
    /// Bottom tab bar.
    pub tabs: Vec<TabItem>,
    /// Tickets and park hours.
    pub tickets: TicketSummary,
    /// Exhibit detail content.
    pub exhibit: Exhibit,
    /// Attention pulse on the navigation grid.
    #[serde(default)]
    pub pulse: PulseStyle,
    /// Exhibit entrance animation.
    #[serde(default)]
    pub entrance: EntranceStyle,
}

impl Default for GuideConfig {
    fn default() -> Self {
        let nav = |label: &str, route: Option<Route>, pulsing: bool| NavItem {
            label: label.to_owned(),
            route,
            pulsing,
        };
        let show = |id: u32| Show {
            id,
            time: "2:30 PM".to_owned(),
            title: "Dive Feeding @ Shipwreck".to_owned(),
        };
        let tab = |label: &str, active: bool| TabItem {
            label: label.to_owned(),
            active,
        };

        Self {
            platform: Platform::Ios,
            page_width: 390.0,
            carousel_interval_ms: 3000,
            slides: vec![
                Slide {
                    id: 1,
                    color: Rgba8::rgb(0x00, 0x66, 0xcc),
                    caption: "Don't miss our\ndaily Dive Feeding!".to_owned(),
                },
                Slide {
                    id: 2,
                    color: Rgba8::rgb(0x4c, 0xaf, 0x50),
                    caption: "Meet our\nNew Sharks!".to_owned(),
                },
                Slide {
                    id: 3,
                    color: Rgba8::rgb(0xff, 0x57, 0x22),
                    caption: "Special\nHoliday Events".to_owned(),
                },
            ],
            shows: vec![show(1), show(2), show(3)],
            nav: vec![
                nav("Map", None, false),
                nav("Inhabitants", Some(Route::ExhibitDetail), true),
                nav("Shows", None, false),
                nav("Shopping", None, false),
                nav("Dine", None, false),
                nav("Meet & Greets", None, false),
            ],
            tabs: vec![tab("Home", true), tab("Wallet", false), tab("More", false)],
            tickets: TicketSummary {
                tickets_title: "My e-tickets".to_owned(),
                tickets_text: "There aren't any yet.".to_owned(),
                tickets_link: "Retrieve here".to_owned(),
                hours_title: "Today, 13 Feb".to_owned(),
                hours_text: "10am - 5pm".to_owned(),
                hours_link: "Plan my visit".to_owned(),
            },
            exhibit: Exhibit {
                zone: "ZONE 1".to_owned(),
                title: "Alligator Gar".to_owned(),
                distance: "410m away".to_owned(),
                paragraphs: vec![
                    "With its wide, alligator-like snout and razor-sharp teeth, it's easy to see \
                     how this fish acquired its name. Despite its ferocious appearance, the \
                     alligator gar poses little threat to human beings."
                        .to_owned(),
                    "As the largest species in the gar family, the alligator gar can reach up to \
                     3 metres in length."
                        .to_owned(),
                ],
                video_uri: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/\
                            BigBuckBunny.mp4"
                    .to_owned(),
            },
            pulse: PulseStyle::default(),
            entrance: EntranceStyle::default(),
        }
    }
}

impl GuideConfig {
    /// Parse a configuration from a JSON reader. Does not validate.
    pub fn from_reader<R: std::io::Read>(r: R) -> GuideResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| GuideError::serde(format!("parse guide config JSON: {e}")))
    }

    /// Parse and validate a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> GuideResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            GuideError::validation(format!("open guide config '{}': {e}", path.display()))
        })?;
        let cfg = Self::from_reader(BufReader::new(f))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Pretty JSON form.
    pub fn to_json_pretty(&self) -> GuideResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GuideError::serde(format!("serialize guide config: {e}")))
    }

    /// Collapsed header height for the configured platform.
    pub fn header_min_height(&self) -> f64 {
        self.platform.header_min_height()
    }

    /// Check static invariants.
    pub fn validate(&self) -> GuideResult<()> {
        if self.slides.is_empty() {
            return Err(GuideError::validation("config needs at least one slide"));
        }
        let mut ids = BTreeSet::new();
        for s in &self.slides {
            if !ids.insert(s.id) {
                return Err(GuideError::validation(format!(
                    "duplicate slide id {}",
                    s.id
                )));
            }
        }
        if !(self.page_width.is_finite() && self.page_width > 0.0) {
            return Err(GuideError::validation("page_width must be > 0"));
        }
        if HEADER_MAX_HEIGHT <= self.header_min_height() {
            return Err(GuideError::validation(
                "header max height must exceed min height",
            ));
        }
        if self.carousel_interval_ms == 0 {
            return Err(GuideError::validation("carousel_interval_ms must be > 0"));
        }
        self.pulse.validate()?;
        self.entrance.validate()?;
        if self.nav.iter().filter(|n| n.pulsing).count() > 1 {
            return Err(GuideError::validation(
                "at most one navigation cell may pulse",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/config.rs"]
mod tests;
