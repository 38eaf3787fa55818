use crate::error::ConfigError;
use crate::poll::DEFAULT_INTERVAL;
use crate::render::TextCanvas;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default monitor endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:9001/state";

/// Viewer settings, loadable from a TOML file.
///
/// ```toml
/// endpoint = "http://10.0.0.5:9001/state"
/// interval_ms = 500
/// show_previews = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    pub endpoint: String,
    pub interval_ms: u64,
    pub show_previews: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            interval_ms: DEFAULT_INTERVAL.as_millis() as u64,
            show_previews: true,
        }
    }
}

impl ViewerConfig {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml(&contents)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("endpoint must not be empty".to_string()));
        }
        if self.interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn canvas(&self) -> TextCanvas {
        TextCanvas {
            show_previews: self.show_previews,
        }
    }
}
