mod category;
mod detection;
mod event;
mod replacement;
mod stats;

pub use category::PiiCategory;
pub use detection::Detection;
pub use event::SanitizationEvent;
pub use replacement::ReplacementRecord;
pub use stats::{SanitizationStats, StatsSummary};
