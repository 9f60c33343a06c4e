//! Builder for configuring a new game.

use crate::core::{ConfigError, FaceSource, GameRng, RulesConfig};

use super::engine::Game;

/// Largest supported table.
pub const MAX_PLAYERS: usize = u8::MAX as usize;

/// Builder for creating a `Game`.
///
/// ```
/// use yahtzee_engine::GameBuilder;
///
/// let game = GameBuilder::new().player_count(3).build(42).unwrap();
/// assert_eq!(game.player_count(), 3);
/// assert_eq!(game.current_player_number(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    player_count: usize,
    rules: RulesConfig,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            player_count: 1,
            rules: RulesConfig::default(),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    pub fn rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    /// Build a game whose dice come from a seeded `GameRng`.
    pub fn build(self, seed: u64) -> Result<Game<GameRng>, ConfigError> {
        self.build_with_source(GameRng::new(seed))
    }

    /// Build a game whose dice come from `source`.
    pub fn build_with_source<R: FaceSource>(self, source: R) -> Result<Game<R>, ConfigError> {
        if self.player_count == 0 {
            return Err(ConfigError::NoPlayers);
        }
        if self.player_count > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers {
                count: self.player_count,
            });
        }
        self.rules.validate()?;

        log::debug!(
            "new game: {} player(s), {} rolls per turn",
            self.player_count,
            self.rules.rolls_per_turn
        );
        Ok(Game::from_parts(self.rules, self.player_count, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedFaces;

    #[test]
    fn test_default_is_single_player() {
        let game = GameBuilder::new().build(1).unwrap();
        assert_eq!(game.player_count(), 1);
        assert_eq!(*game.rules(), RulesConfig::default());
    }

    #[test]
    fn test_zero_players_rejected() {
        let result = GameBuilder::new().player_count(0).build(1);
        assert!(matches!(result, Err(ConfigError::NoPlayers)));
    }

    #[test]
    fn test_too_many_players_rejected() {
        let result = GameBuilder::new().player_count(256).build(1);
        assert!(matches!(
            result,
            Err(ConfigError::TooManyPlayers { count: 256 })
        ));
        assert!(GameBuilder::new().player_count(255).build(1).is_ok());
    }

    #[test]
    fn test_invalid_rules_rejected() {
        let rules = RulesConfig {
            rolls_per_turn: 0,
            ..RulesConfig::default()
        };
        let result = GameBuilder::new()
            .rules(rules)
            .build_with_source(ScriptedFaces::new(vec![1]));
        assert!(matches!(result, Err(ConfigError::ZeroRollsPerTurn)));
    }

    #[test]
    fn test_rules_reach_players() {
        let rules = RulesConfig {
            rolls_per_turn: 5,
            ..RulesConfig::default()
        };
        let game = GameBuilder::new().rules(rules).build(3).unwrap();
        assert_eq!(game.rolls_remaining(), 5);
    }
}
