//! # scrubber-core
//!
//! Foundation crate for the scrubber PII sanitizer.
//! Defines the shared types, traits, errors, config, and constants.
//! The engine crate (`scrubber-privacy`) and the test fixtures depend on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ScrubberConfig;
pub use errors::{ScrubberError, ScrubberResult};
pub use models::{
    Detection, PiiCategory, ReplacementRecord, SanitizationEvent, SanitizationStats, StatsSummary,
};
