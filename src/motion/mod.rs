//! Motion controllers driven by the scheduler and by host input.

/// Auto-advancing banner carousel.
pub mod carousel;
/// Exhibit content entrance and delayed video gate.
pub mod entrance;
/// Scroll-linked collapsing header.
pub mod header;
/// Looping attention pulse.
pub mod pulse;
