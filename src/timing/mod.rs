//! Deterministic single-threaded timer scheduling.

/// Timeout/interval scheduler on a simulated clock.
pub mod scheduler;
