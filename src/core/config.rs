//! Game configuration.
//!
//! `GameConfig` collects the numeric rules of a game: table size, hand limit,
//! win threshold and event magnitudes. Every field has a default, so a JSON
//! config only needs to name what it changes:
//!
//! ```
//! use round_table::core::GameConfig;
//!
//! let config = GameConfig::from_json_str(r#"{ "player_count": 3, "seed": 9 }"#).unwrap();
//! assert_eq!(config.player_count, 3);
//! assert_eq!(config.hand_limit, 12);
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;
/// Largest supported table.
pub const MAX_PLAYERS: usize = 8;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of seated players.
    pub player_count: usize,

    /// Maximum cards a hand may hold after any draw.
    pub hand_limit: usize,

    /// Adventure cards dealt to each player at setup.
    pub starting_hand_size: usize,

    /// Shields needed to win.
    pub shields_to_win: u32,

    /// Shields lost to a Plague.
    pub plague_shield_loss: u32,

    /// Cards drawn for Queen's Favor and, per player, for Prosperity.
    pub event_draw_count: u32,

    /// Keep shield counts at or above zero.
    pub clamp_shields_at_zero: bool,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            hand_limit: 12,
            starting_hand_size: 12,
            shields_to_win: 7,
            plague_shield_loss: 2,
            event_draw_count: 2,
            clamp_shields_at_zero: true,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a default configuration for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the hand limit.
    #[must_use]
    pub fn with_hand_limit(mut self, limit: usize) -> Self {
        self.hand_limit = limit;
        self
    }

    /// Set the starting hand size.
    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    /// Set the win threshold.
    #[must_use]
    pub fn with_shields_to_win(mut self, shields: u32) -> Self {
        self.shields_to_win = shields;
        self
    }

    /// Allow Plague to push shields below zero.
    #[must_use]
    pub fn allow_negative_shields(mut self) -> Self {
        self.clamp_shields_at_zero = false;
        self
    }

    /// Check every invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(ConfigError::PlayerCount {
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
                value: self.player_count,
            });
        }
        if self.hand_limit == 0 {
            return Err(ConfigError::MinViolation {
                field: "hand_limit",
                min: 1,
                value: 0,
            });
        }
        if self.shields_to_win == 0 {
            return Err(ConfigError::MinViolation {
                field: "shields_to_win",
                min: 1,
                value: 0,
            });
        }
        if self.starting_hand_size > self.hand_limit {
            return Err(ConfigError::StartingHandTooLarge {
                starting: self.starting_hand_size,
                limit: self.hand_limit,
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.player_count, 4);
        assert_eq!(config.hand_limit, 12);
        assert_eq!(config.shields_to_win, 7);
        assert!(config.clamp_shields_at_zero);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new(3)
            .with_seed(5)
            .with_hand_limit(8)
            .with_starting_hand_size(6)
            .with_shields_to_win(4)
            .allow_negative_shields();

        assert_eq!(config.player_count, 3);
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.hand_limit, 8);
        assert_eq!(config.starting_hand_size, 6);
        assert_eq!(config.shields_to_win, 4);
        assert!(!config.clamp_shields_at_zero);
    }

    #[test]
    fn test_invalid_player_count() {
        let err = GameConfig::new(1).validate().unwrap_err();
        assert!(matches!(err, ConfigError::PlayerCount { value: 1, .. }));
        assert!(GameConfig::new(9).validate().is_err());
    }

    #[test]
    fn test_starting_hand_exceeds_limit() {
        let config = GameConfig::new(4).with_hand_limit(5);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::StartingHandTooLarge { starting: 12, limit: 5 })
        ));
    }

    #[test]
    fn test_json_partial() {
        let config = GameConfig::from_json_str(r#"{ "shields_to_win": 5 }"#).unwrap();
        assert_eq!(config.shields_to_win, 5);
        assert_eq!(config.player_count, 4);
    }

    #[test]
    fn test_json_rejects_invalid() {
        assert!(matches!(
            GameConfig::from_json_str(r#"{ "player_count": 12 }"#),
            Err(ConfigError::PlayerCount { .. })
        ));
        assert!(matches!(
            GameConfig::from_json_str("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let config = GameConfig::new(5).with_seed(11);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(GameConfig::from_json_str(&json).unwrap(), config);
    }
}
