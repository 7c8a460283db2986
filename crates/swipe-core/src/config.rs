//! Interaction tuning loaded from TOML.
//!
//! Every field is optional in the file; missing values fall back to the
//! constants in [`crate::constants`].
//!
//! ```toml
//! accept_threshold = 140.0
//! exit_duration_ms = 300
//!
//! [spring]
//! stiffness = 180.0
//! ```

use crate::constants::*;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config value `{field}` must be {requirement}, got {value}")]
    OutOfRange {
        field: &'static str,
        requirement: &'static str,
        value: f64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    pub rest_displacement: f32,
    pub rest_speed: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            mass: SPRING_MASS,
            rest_displacement: SPRING_REST_DISPLACEMENT,
            rest_speed: SPRING_REST_SPEED,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    pub accept_threshold: f32,
    pub max_rotation_deg: f32,
    pub exit_overshoot: f32,
    pub exit_duration_ms: u64,
    pub spring: SpringConfig,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            accept_threshold: ACCEPT_THRESHOLD,
            max_rotation_deg: MAX_ROTATION_DEG,
            exit_overshoot: EXIT_OVERSHOOT,
            exit_duration_ms: EXIT_DURATION_MS,
            spring: SpringConfig::default(),
        }
    }
}

impl SwipeConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn exit_duration(&self) -> Duration {
        Duration::from_millis(self.exit_duration_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("accept_threshold", self.accept_threshold)?;
        non_negative("max_rotation_deg", self.max_rotation_deg)?;
        non_negative("exit_overshoot", self.exit_overshoot)?;
        if self.exit_duration_ms == 0 {
            return Err(ConfigError::OutOfRange {
                field: "exit_duration_ms",
                requirement: "greater than zero",
                value: 0.0,
            });
        }
        positive("spring.stiffness", self.spring.stiffness)?;
        positive("spring.damping", self.spring.damping)?;
        positive("spring.mass", self.spring.mass)?;
        positive("spring.rest_displacement", self.spring.rest_displacement)?;
        positive("spring.rest_speed", self.spring.rest_speed)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            requirement: "a finite value greater than zero",
            value: value as f64,
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            requirement: "a finite, non-negative value",
            value: value as f64,
        })
    }
}
