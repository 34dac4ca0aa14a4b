//! TOML-based slider configuration.
//!
//! A configuration is fixed for the lifetime of one engine. It is validated
//! when the engine is built and whenever it is loaded from disk:
//! - `cycle` needs a `total` to wrap around
//! - `auto_play` needs a `duration_ms` to tick with
//!
//! The default file lives at `~/.config/slidestep/slider.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::step::StepBounds;

/// Slider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Number of steps. 0 leaves the sequence unbounded.
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub default_step: i64,
    #[serde(default)]
    pub cycle: bool,
    #[serde(default = "default_step_interval")]
    pub step_interval: i64,
    #[serde(default)]
    pub auto_play: bool,
    /// Playback tick interval. 0 disables playback entirely.
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub vertical: bool,
    /// Swipe gestures enabled.
    #[serde(default = "default_true")]
    pub swipe: bool,
    /// Mouse drags count as swipes.
    #[serde(default = "default_true")]
    pub draggable: bool,
    #[serde(default = "default_true")]
    pub pause_on_hover: bool,
    /// The minimum swipe is `target extent / touch_threshold`.
    #[serde(default = "default_touch_threshold")]
    pub touch_threshold: f64,
    /// Every accepted swipe advances, whatever its direction.
    #[serde(default)]
    pub swipe_iterate_only: bool,
    /// Delay between a step request and its commit. 0 commits immediately.
    #[serde(default)]
    pub animation_speed_ms: u64,
}

fn default_step_interval() -> i64 {
    1
}
fn default_true() -> bool {
    true
}
fn default_touch_threshold() -> f64 {
    5.0
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            total: 0,
            default_step: 0,
            cycle: false,
            step_interval: default_step_interval(),
            auto_play: false,
            duration_ms: 0,
            vertical: false,
            swipe: true,
            draggable: true,
            pause_on_hover: true,
            touch_threshold: default_touch_threshold(),
            swipe_iterate_only: false,
            animation_speed_ms: 0,
        }
    }
}

impl SliderConfig {
    /// Check the construction-time invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStepInterval`],
    /// [`ConfigError::CycleWithoutTotal`] or
    /// [`ConfigError::AutoPlayWithoutDuration`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step_interval < 1 {
            return Err(ConfigError::InvalidStepInterval(self.step_interval));
        }
        if self.cycle && self.total == 0 {
            return Err(ConfigError::CycleWithoutTotal);
        }
        if self.auto_play && self.duration_ms == 0 {
            return Err(ConfigError::AutoPlayWithoutDuration);
        }
        Ok(())
    }

    pub fn bounds(&self) -> StepBounds {
        StepBounds::new(self.total, self.step_interval, self.cycle)
    }

    pub fn has_playback(&self) -> bool {
        self.duration_ms > 0
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not parse or is invalid.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let cfg: SliderConfig = toml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load and validate a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not parse, or is invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Load from `path`, or from the default location when `path` is `None`.
    ///
    /// A missing default file yields the default configuration; an explicit
    /// path must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be loaded.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => match default_path() {
                Some(path) if path.exists() => Self::load(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Get a config value as string by key.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let json = serde_json::to_value(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        match json.get(key) {
            Some(serde_json::Value::String(s)) => Ok(s.clone()),
            Some(other) => Ok(other.to_string()),
            None => Err(ConfigError::UnknownKey(key.to_string())),
        }
    }
}

/// Returns `~/.config/slidestep[-dev]/slider.toml` based on SLIDESTEP_ENV.
///
/// Set SLIDESTEP_ENV=dev to use the development directory.
pub fn default_path() -> Option<PathBuf> {
    let base_dir = dirs::config_dir()?;
    let env = std::env::var("SLIDESTEP_ENV").unwrap_or_else(|_| "production".to_string());
    let dir = if env == "dev" {
        base_dir.join("slidestep-dev")
    } else {
        base_dir.join("slidestep")
    };
    Some(dir.join("slider.toml"))
}
