//! # yahtzee-engine
//!
//! A rules engine for turn-based Yahtzee with one or more players.
//!
//! ## Design Principles
//!
//! 1. **Silent rejection**: Rule-breaking actions are ignored, never errors.
//!    Every mutator has a `can_*` predicate so callers can tell in advance.
//!
//! 2. **Injectable dice**: Dice roll from a `FaceSource`. `GameRng` is seeded
//!    and deterministic; `ScriptedFaces` replays fixed faces for tests.
//!
//! 3. **Presentation-agnostic**: A UI forwards user actions and re-reads
//!    state (or a `GameSnapshot`) after each call.
//!
//! ## Modules
//!
//! - `core`: RNG, rules configuration, player identity, actions
//! - `dice`: Dice and the statistics scoring reads from them
//! - `scorecard`: Categories, slot contents, per-player scorecards
//! - `rules`: Category scoring decisions and game results
//! - `game`: The `Game` engine, builder, turn phase, and snapshots
//!
//! ## Example
//!
//! ```
//! use yahtzee_engine::{Category, Game, ScoreEntry, ScriptedFaces};
//!
//! let mut game = Game::with_source(1, ScriptedFaces::new(vec![3, 3, 3, 5, 5])).unwrap();
//! game.roll_dice();
//! assert!(game.can_full_house());
//!
//! game.score_full_house();
//! assert_eq!(game.current_player().score(Category::FullHouse), ScoreEntry::Points(25));
//! ```

pub mod core;
pub mod dice;
pub mod scorecard;
pub mod rules;
pub mod game;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, ConfigError, FaceSource, GameRng, GameRngState, PlayerId, RulesConfig,
    ScriptedFaces,
};

pub use crate::dice::{DiceValues, Die, DICE_COUNT, MAX_FACE};

pub use crate::scorecard::{Category, Player, ScoreEntry};

pub use crate::rules::{GameResult, ScoreOutcome};

pub use crate::game::{Game, GameBuilder, GameSnapshot, TurnPhase};
