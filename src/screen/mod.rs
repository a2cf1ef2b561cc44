//! Screens composed from the motion controllers, plus the two-screen app shell.

/// Home and exhibit screens behind a stack navigator.
pub mod app;
/// Exhibit detail screen.
pub mod exhibit;
/// Home screen.
pub mod home;
/// Show card with a tap-to-play animation.
pub mod show_card;
