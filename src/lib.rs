//! Reefguide is the motion core of an aquarium visitor guide.
//!
//! It owns every piece of time-driven UI behavior and leaves drawing to the host:
//!
//! - an auto-advancing banner [`CarouselController`] that yields to user drags
//! - a looping [`PulseSequencer`] that draws attention to one navigation cell
//! - a scroll-linked [`HeaderInterpolator`] for the exhibit's parallax header
//! - an [`EntranceSequencer`] that fades content in and gates video playback
//!
//! All timers run on a deterministic [`Scheduler`] over simulated [`Millis`], so a screen can
//! be driven frame by frame from tests or from the `reefguide` CLI.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Keyframed animation values.
pub mod animation;
/// Guide content and configuration.
pub mod content;
/// Shared primitives.
pub mod foundation;
/// Host toolkit seams.
pub mod host;
/// Motion controllers.
pub mod motion;
/// Screens and the app shell.
pub mod screen;
/// Timer scheduling.
pub mod timing;

pub use crate::animation::anim::{Anim, Keyframe, Keyframes, Lerp, Lockstep};
pub use crate::animation::ease::Ease;
pub use crate::content::config::GuideConfig;
pub use crate::foundation::core::{Lifecycle, Millis, Platform, Rgba8};
pub use crate::foundation::error::{GuideError, GuideResult};
pub use crate::host::navigation::{Navigator, Route, StackNavigator};
pub use crate::host::scroll::{ScrollCommand, ScrollHost, ScrollLog};
pub use crate::host::status_bar::StatusBarStyle;
pub use crate::motion::carousel::CarouselController;
pub use crate::motion::entrance::{EntranceSequencer, EntranceStyle, VideoGate};
pub use crate::motion::header::{HeaderFrame, HeaderInterpolator};
pub use crate::motion::pulse::{PulseSample, PulseSequencer, PulseStyle};
pub use crate::screen::app::GuideApp;
pub use crate::screen::exhibit::{ExhibitFrame, ExhibitScreen};
pub use crate::screen::home::{HomeFrame, HomeScreen};
pub use crate::timing::scheduler::{Fired, Scheduler, TimerId};
