//! Shared primitives: simulated clock time, colors, platform metrics, errors and math helpers.

/// Clock, color and platform primitives.
pub mod core;
/// Error type used across the crate.
pub mod error;
/// Clamped interpolation helpers.
pub mod math;
