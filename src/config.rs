//! Startup configuration
//!
//! Everything here is fixed when the session is constructed; there is no
//! runtime reconfiguration. Hosts may override the defaults from a JSON
//! snippet (all fields optional).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::SAFE_SPAWN_DISTANCE;

/// Field-level knobs for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Field width in units
    pub field_width: f32,
    /// Field height in units
    pub field_height: f32,
    /// Obstacle population cap
    pub max_rocks: usize,
    /// Ticks between rock spawn attempts
    pub spawn_interval: u32,
    /// Lives granted on session start
    pub starting_lives: u32,
    /// Score awarded per destroyed rock
    pub score_per_kill: u64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            field_width: 800.0,
            field_height: 600.0,
            max_rocks: 12,
            spawn_interval: 60,
            starting_lives: 5,
            score_per_kill: 10,
        }
    }
}

impl FieldConfig {
    /// Parse a config from JSON; missing fields fall back to defaults.
    /// Values the simulation cannot run on are rejected.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        config.validate().map_err(serde::de::Error::custom)?;
        Ok(config)
    }

    /// Check that the simulation can run on these values.
    ///
    /// Field dimensions must be positive and finite, the spawn interval
    /// nonzero, and the field large enough that the spawner can find a
    /// position clear of the ship. The ship at the field center is the worst
    /// case for that, so the half-diagonal must exceed the spawn clearance.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.field_width.is_finite() && self.field_width > 0.0)
            || !(self.field_height.is_finite() && self.field_height > 0.0)
        {
            return Err(format!(
                "field dimensions must be positive and finite, got {}x{}",
                self.field_width, self.field_height
            ));
        }
        if self.field_width.hypot(self.field_height) / 2.0 <= SAFE_SPAWN_DISTANCE {
            return Err(format!(
                "field {}x{} leaves no spawn position clear of the ship \
                 (half-diagonal must exceed {SAFE_SPAWN_DISTANCE})",
                self.field_width, self.field_height
            ));
        }
        if self.spawn_interval == 0 {
            return Err("spawn_interval must be at least 1".into());
        }
        Ok(())
    }

    /// Center of the field (initial ship placement)
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FieldConfig::default();
        assert_eq!(config.max_rocks, 12);
        assert_eq!(config.spawn_interval, 60);
        assert_eq!(config.starting_lives, 5);
        assert_eq!(config.score_per_kill, 10);
        assert_eq!(config.center(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_partial_json_override() {
        let config = FieldConfig::from_json(r#"{"field_width": 1024.0, "max_rocks": 20}"#).unwrap();
        assert_eq!(config.field_width, 1024.0);
        assert_eq!(config.max_rocks, 20);
        // Untouched fields keep their defaults
        assert_eq!(config.field_height, 600.0);
        assert_eq!(config.starting_lives, 5);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(FieldConfig::from_json("{not json").is_err());
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        assert!(FieldConfig::from_json(r#"{"field_width": 0.0}"#).is_err());
        assert!(FieldConfig::from_json(r#"{"field_height": -600.0}"#).is_err());
        assert!(FieldConfig::from_json(r#"{"field_width": 1e999}"#).is_err());
    }

    #[test]
    fn test_rejects_field_without_spawn_clearance() {
        // 120x120: every point lies within the spawn clearance of the center
        assert!(
            FieldConfig::from_json(r#"{"field_width": 120.0, "field_height": 120.0}"#).is_err()
        );
        let config = FieldConfig {
            field_width: 120.0,
            field_height: 120.0,
            ..FieldConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_spawn_interval() {
        assert!(FieldConfig::from_json(r#"{"spawn_interval": 0}"#).is_err());
    }

    #[test]
    fn test_default_config_validates() {
        assert!(FieldConfig::default().validate().is_ok());
    }
}
