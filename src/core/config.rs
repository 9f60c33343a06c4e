//! Rule constants and construction errors.
//!
//! `RulesConfig` carries every number the scoring rules use. The defaults are
//! the standard Yahtzee values; a partial JSON document can override any of
//! them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while configuring or constructing a game.
///
/// Rule violations during play are never errors; they are silently ignored.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("a game needs at least 1 player")]
    NoPlayers,
    #[error("at most 255 players supported, got {count}")]
    TooManyPlayers { count: usize },
    #[error("rolls_per_turn must be at least 1")]
    ZeroRollsPerTurn,
    #[error("failed to parse rules config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Scoring and turn constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Rolls a player may take per turn.
    pub rolls_per_turn: u32,
    /// Upper-section total needed for the bonus.
    pub upper_bonus_threshold: u32,
    /// Points added to the total once the upper threshold is reached.
    pub upper_bonus: u32,
    pub full_house_score: u32,
    pub small_straight_score: u32,
    pub large_straight_score: u32,
    pub yahtzee_score: u32,
    /// Added to the Yahtzee Bonus accumulator per extra Yahtzee.
    pub yahtzee_bonus_score: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            rolls_per_turn: 3,
            upper_bonus_threshold: 63,
            upper_bonus: 35,
            full_house_score: 25,
            small_straight_score: 30,
            large_straight_score: 40,
            yahtzee_score: 50,
            yahtzee_bonus_score: 150,
        }
    }
}

impl RulesConfig {
    /// Parse from JSON. Missing fields keep their default value.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: RulesConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the constants describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rolls_per_turn == 0 {
            return Err(ConfigError::ZeroRollsPerTurn);
        }
        Ok(())
    }
}
