//! Static guide content and its JSON configuration boundary.

/// Guide configuration and reference content.
pub mod config;
