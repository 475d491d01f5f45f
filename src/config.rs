use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Settings shared by both frontends, read from a TOML file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hint shown in the text area while it is empty
    pub placeholder: String,

    /// Label for a history entry whose snapshot is the empty string
    pub empty_label: String,

    /// Maximum undo stack depth, unbounded when absent
    pub history_limit: Option<usize>,

    /// Event poll interval of the terminal frontend
    pub tick_rate_ms: u64,

    pub animation: AnimationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub enabled: bool,

    /// Duration of the panel slide-in on startup
    pub entrance_ms: u64,

    /// Duration of the button highlight after undo/redo
    pub flash_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            placeholder: "Start typing...".to_string(),
            empty_label: "(empty state)".to_string(),
            history_limit: None,
            tick_rate_ms: 100,
            animation: AnimationConfig::default(),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            entrance_ms: 400,
            flash_ms: 250,
        }
    }
}

impl Config {
    pub fn from_toml(path: &Path, source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(path, &source)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `path` if given, otherwise fall back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                tracing::debug!("no config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl AnimationConfig {
    pub fn entrance(&self) -> Duration {
        if self.enabled {
            Duration::from_millis(self.entrance_ms)
        } else {
            Duration::ZERO
        }
    }

    pub fn flash(&self) -> Duration {
        if self.enabled {
            Duration::from_millis(self.flash_ms)
        } else {
            Duration::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = Config::from_toml(
            Path::new("stackpad.toml"),
            "history_limit = 3\n[animation]\nenabled = false\n",
        )
        .unwrap();

        assert_eq!(config.history_limit, Some(3));
        assert_eq!(config.placeholder, "Start typing...");
        assert!(!config.animation.enabled);
        assert_eq!(config.animation.entrance(), Duration::ZERO);
    }

    #[test]
    fn bad_toml_is_a_parse_error() {
        let err = Config::from_toml(Path::new("bad.toml"), "tick_rate_ms = \"fast\"").unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }
}
