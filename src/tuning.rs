//! Data-driven game balance
//!
//! Loaded from JSON; any missing field falls back to the compiled defaults.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a [`RoundConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Balance values for one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Countdown length (seconds)
    pub time_limit: f32,
    /// Score needed for a CLEAR result
    pub clear_score: u32,
    /// Initial pause between glows (seconds)
    pub wait_time: f32,
    /// Initial glow window (seconds)
    pub glow_time: f32,
    /// Amount shaved off both durations per successful tap
    pub speed_up_rate: f32,
    pub min_wait_time: f32,
    pub min_glow_time: f32,
    /// Target placement rectangle
    pub min_pos: Vec2,
    pub max_pos: Vec2,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            time_limit: TIME_LIMIT,
            clear_score: CLEAR_SCORE,
            wait_time: WAIT_TIME,
            glow_time: GLOW_TIME,
            speed_up_rate: SPEED_UP_RATE,
            min_wait_time: MIN_WAIT_TIME,
            min_glow_time: MIN_GLOW_TIME,
            min_pos: Vec2::new(MIN_POS.0, MIN_POS.1),
            max_pos: Vec2::new(MAX_POS.0, MAX_POS.1),
        }
    }
}

impl RoundConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded round config from {}", path.display());
        Ok(config)
    }

    /// Check the invariants the round simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("time_limit", self.time_limit),
            ("wait_time", self.wait_time),
            ("glow_time", self.glow_time),
            ("speed_up_rate", self.speed_up_rate),
            ("min_wait_time", self.min_wait_time),
            ("min_glow_time", self.min_glow_time),
            ("min_pos.x", self.min_pos.x),
            ("min_pos.y", self.min_pos.y),
            ("max_pos.x", self.max_pos.x),
            ("max_pos.y", self.max_pos.y),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(invalid(field, format!("{value} is not finite")));
            }
        }

        if self.time_limit <= 0.0 {
            return Err(invalid("time_limit", "must be positive"));
        }
        if self.min_glow_time <= 0.0 {
            return Err(invalid("min_glow_time", "must be positive"));
        }
        if self.min_wait_time < 0.0 {
            return Err(invalid("min_wait_time", "must not be negative"));
        }
        if self.speed_up_rate < 0.0 {
            return Err(invalid("speed_up_rate", "must not be negative"));
        }
        if self.wait_time < self.min_wait_time {
            return Err(invalid(
                "wait_time",
                format!("{} is below min_wait_time {}", self.wait_time, self.min_wait_time),
            ));
        }
        if self.glow_time < self.min_glow_time {
            return Err(invalid(
                "glow_time",
                format!("{} is below min_glow_time {}", self.glow_time, self.min_glow_time),
            ));
        }
        if self.min_pos.x > self.max_pos.x || self.min_pos.y > self.max_pos.y {
            return Err(invalid(
                "min_pos",
                format!("{} exceeds max_pos {}", self.min_pos, self.max_pos),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}
