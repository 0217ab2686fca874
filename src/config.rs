//! Agent configuration.
//!
//! Tunable thresholds and placement layouts. Every field has a default
//! matching the standard 30x15 map, so a partial JSON file is enough to
//! override a single value.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::board::Position;

/// Errors that can occur while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("team_size must be at least 1")]
    EmptyTeam,
}

/// Configuration for the decision core and the turn driver.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Robots per team. Entity ids map to roster slots modulo this value.
    pub team_size: u32,
    /// A radar may be requested while the radar cooldown is below this.
    pub radar_cooldown_limit: u32,
    /// No radar is requested once this much ore is already known.
    pub ore_saturation: u32,
    /// Trap cooldown value at which a trap may be requested.
    pub trap_cooldown_ready: u32,
    /// Fixed radar placement grid, as `[x, y]` pairs.
    pub radar_layout: Vec<(i32, i32)>,
    /// Column of trap spots guarding the home edge.
    pub trap_column: i32,
    /// Rows of interior trap spots.
    pub trap_rows: Vec<i32>,
    /// Where equipment is dug when no placement spot remains.
    pub fallback_deposit: (i32, i32),
    /// Fixed seed for the random source; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            team_size: 5,
            radar_cooldown_limit: 2,
            ore_saturation: 16,
            trap_cooldown_ready: 0,
            radar_layout: vec![
                (10, 7),
                (5, 3),
                (5, 11),
                (14, 2),
                (14, 12),
                (18, 7),
                (20, 0),
                (20, 14),
                (24, 4),
                (24, 10),
                (29, 0),
                (29, 7),
                (29, 14),
            ],
            trap_column: 1,
            trap_rows: vec![1, 4, 7, 10, 13],
            fallback_deposit: (15, 7),
            seed: None,
        }
    }
}

impl AgentConfig {
    /// Loads a configuration from a JSON file. Missing fields keep their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parses a configuration from a JSON string.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: AgentConfig = serde_json::from_str(text)?;
        if config.team_size == 0 {
            return Err(ConfigError::EmptyTeam);
        }
        Ok(config)
    }

    pub fn fallback_deposit(&self) -> Position {
        Position::new(self.fallback_deposit.0, self.fallback_deposit.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_standard_map() {
        let config = AgentConfig::default();
        assert_eq!(config.team_size, 5);
        assert_eq!(config.radar_layout.len(), 13);
        assert_eq!(config.ore_saturation, 16);
        assert_eq!(config.fallback_deposit(), Position::new(15, 7));
        assert!(config.seed.is_none());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = AgentConfig::from_json(r#"{"seed": 42, "ore_saturation": 20}"#).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.ore_saturation, 20);
        assert_eq!(config.team_size, 5);
        assert_eq!(config.trap_rows, vec![1, 4, 7, 10, 13]);
    }

    #[test]
    fn layout_pairs_parse_from_arrays() {
        let config = AgentConfig::from_json(r#"{"radar_layout": [[3, 4], [8, 9]]}"#).unwrap();
        assert_eq!(config.radar_layout, vec![(3, 4), (8, 9)]);
    }

    #[test]
    fn zero_team_size_rejected() {
        let result = AgentConfig::from_json(r#"{"team_size": 0}"#);
        assert!(matches!(result, Err(ConfigError::EmptyTeam)));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(
            AgentConfig::from_json("{not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = AgentConfig::from_path("/nonexistent/orebot.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
