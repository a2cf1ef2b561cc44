//! Keyframed animation values sampled against elapsed milliseconds.

/// Keyframes, one-shot/looping animations and lockstep pairs.
pub mod anim;
/// Easing curves.
pub mod ease;
