pub mod defaults;
mod observability_config;
mod privacy_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use observability_config::ObservabilityConfig;
pub use privacy_config::{CustomPatternConfig, PrivacyConfig};

use crate::errors::{ConfigError, ScrubberResult};

/// Top-level configuration, read from TOML by the composition root.
///
/// The sanitizer never reads files or the environment on its own; whoever
/// builds it passes this in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrubberConfig {
    pub privacy: PrivacyConfig,
    pub observability: ObservabilityConfig,
}

impl ScrubberConfig {
    /// Parse and validate a TOML document. Missing sections fall back to defaults.
    pub fn from_toml(content: &str) -> ScrubberResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.privacy.validate()?;
        Ok(config)
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> ScrubberResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&content)
    }
}
