//! Launcher configuration: arc factor plus calibration table.
//!
//! Values come from a TOML file when one is given, then from the environment:
//!
//! ```toml
//! arc_factor = 1.4
//!
//! [constants]
//! gravity = 19.8347
//! lateral_constant = 13.63
//! vertical_constant = 21.81817
//! ```

use crate::constants::{PhysicsConstants, DEFAULT_ARC_FACTOR};
use crate::trajectory_solver::{ArcFactor, TrajectorySolver};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the arc factor
pub const ARC_FACTOR_ENV: &str = "ARC_LAUNCHER_ARC_FACTOR";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherConfig {
    pub arc_factor: f64,
    pub constants: PhysicsConstants,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            arc_factor: DEFAULT_ARC_FACTOR,
            constants: PhysicsConstants::default(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config file {path}: {message}")]
    Io { path: PathBuf, message: String },

    /// Config file is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// A value parsed but is out of range.
    #[error("invalid config value: {0}")]
    Invalid(String),
}

impl LauncherConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: LauncherConfig =
            toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), arc_factor = config.arc_factor, "loaded launcher config");
        Ok(config)
    }

    /// Apply `ARC_LAUNCHER_ARC_FACTOR` if it is set and parses as a number.
    pub fn with_env_overrides(self) -> Self {
        self.with_arc_factor_override(env::var(ARC_FACTOR_ENV).ok().as_deref())
    }

    fn with_arc_factor_override(mut self, raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return self;
        };
        match raw.trim().parse::<f64>() {
            Ok(value) => self.arc_factor = value,
            Err(_) => tracing::warn!(value = raw, "ignoring unparseable {}", ARC_FACTOR_ENV),
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.arc_factor) {
            return Err(ConfigError::Invalid(format!(
                "arc_factor must be a positive number, got {}",
                self.arc_factor
            )));
        }
        let c = &self.constants;
        for (name, value) in [
            ("gravity", c.gravity),
            ("lateral_constant", c.lateral_constant),
            ("vertical_constant", c.vertical_constant),
        ] {
            if !positive(value) {
                return Err(ConfigError::Invalid(format!(
                    "constants.{name} must be a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }

    pub fn solver(&self) -> Result<TrajectorySolver, ConfigError> {
        self.validate()?;
        let arc_factor =
            ArcFactor::new(self.arc_factor).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(TrajectorySolver::new(self.constants, arc_factor))
    }
}
