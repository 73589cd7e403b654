//! Engine configuration.
//!
//! Defaults reproduce the stock app: 100-unit drag thresholds, a 1000-unit
//! exit fling over 300 ms, and 50% / 70% match chances for accept and
//! super-like. Any subset of fields may be overridden from JSON:
//!
//! ```json
//! { "gesture": { "horizontalThreshold": 80 }, "matching": { "acceptThreshold": 0.6 } }
//! ```

use crate::error::EngineConfigError;
use crate::gesture::GestureConfig;
use crate::matching::MatchPolicy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub gesture: GestureConfig,
    pub matching: MatchPolicy,
}

impl EngineConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: EngineConfig =
            serde_json::from_str(content).context("Failed to parse engine configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read engine configuration {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Invalid engine configuration {}", path.display()))
    }

    pub fn validate(&self) -> std::result::Result<(), EngineConfigError> {
        let distances = [
            ("horizontal threshold", self.gesture.horizontal_threshold),
            ("vertical threshold", self.gesture.vertical_threshold),
            ("exit distance", self.gesture.exit_distance),
        ];
        for (name, value) in distances {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineConfigError::InvalidThreshold {
                    name,
                    value: value.into(),
                });
            }
        }

        let probabilities = [
            ("accept threshold", self.matching.accept_threshold),
            ("super-like threshold", self.matching.super_like_threshold),
        ];
        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(EngineConfigError::InvalidProbability { name, value });
            }
        }
        Ok(())
    }
}
