//! Governor configuration loading.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use vignette_error::{RateLimitError, RateLimitErrorKind};

/// Rate governor configuration.
///
/// Defaults to 10 sequence starts per 60 second window per identifier.
/// Values can be layered from a TOML file and `VIGNETTE_RATE_*`
/// environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GovernorConfig {
    /// Maximum sequence starts per window
    pub max_requests: u32,
    /// Window length in seconds
    pub window_secs: u64,
}

impl Default for GovernorConfig {
    fn default() -> Self {
        Self {
            max_requests: 10,
            window_secs: 60,
        }
    }
}

impl GovernorConfig {
    /// The window length as a [`Duration`].
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }

    /// Load configuration from the default locations.
    ///
    /// Layering, lowest priority first: compiled defaults, then
    /// `<config dir>/vignette/rate_limit.toml` if present, then
    /// `VIGNETTE_RATE_MAX_REQUESTS` / `VIGNETTE_RATE_WINDOW_SECS`
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed.
    pub fn load() -> Result<Self, RateLimitError> {
        let mut builder = config::Config::builder()
            .set_default("max_requests", GovernorConfig::default().max_requests as u64)
            .map_err(|e| RateLimitErrorKind::Config(e.to_string()))?
            .set_default("window_secs", GovernorConfig::default().window_secs)
            .map_err(|e| RateLimitErrorKind::Config(e.to_string()))?;

        if let Some(config_dir) = dirs::config_dir() {
            let path = config_dir.join("vignette").join("rate_limit.toml");
            builder = builder.add_source(config::File::from(path).required(false));
        }

        builder = builder.add_source(config::Environment::with_prefix("VIGNETTE_RATE"));

        builder
            .build()
            .map_err(|e| RateLimitErrorKind::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| RateLimitErrorKind::Config(e.to_string()).into())
    }

    /// Load configuration from an explicit TOML file over the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or cannot be parsed.
    pub fn from_file(path: &Path) -> Result<Self, RateLimitError> {
        config::Config::builder()
            .set_default("max_requests", GovernorConfig::default().max_requests as u64)
            .map_err(|e| RateLimitErrorKind::Config(e.to_string()))?
            .set_default("window_secs", GovernorConfig::default().window_secs)
            .map_err(|e| RateLimitErrorKind::Config(e.to_string()))?
            .add_source(config::File::from(path.to_path_buf()))
            .build()
            .map_err(|e| RateLimitErrorKind::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| RateLimitErrorKind::Config(e.to_string()).into())
    }
}
