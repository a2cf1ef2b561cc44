//! Seams to the host UI toolkit.
//!
//! Each trait is the narrow surface a controller needs from a platform widget. The recording
//! implementations back the headless screens and the tests.

/// Video widget properties and load events.
pub mod media;
/// Route stack navigation.
pub mod navigation;
/// Horizontal scroll commands for the carousel pager.
pub mod scroll;
/// System status bar style.
pub mod status_bar;
/// Vector animation playback control.
pub mod vector;
