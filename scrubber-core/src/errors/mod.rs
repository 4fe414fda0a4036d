mod config_error;
mod pattern_error;

pub use config_error::ConfigError;
pub use pattern_error::PatternError;

/// Top-level error for the scrubber workspace.
///
/// The sanitizer itself never surfaces these to its callers: pattern failures
/// are logged and skipped. They show up on the configuration path and on the
/// matcher seam, where an engine decides what to do with them.
#[derive(Debug, thiserror::Error)]
pub enum ScrubberError {
    #[error("pattern error: {0}")]
    PatternError(#[from] PatternError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type ScrubberResult<T> = Result<T, ScrubberError>;
