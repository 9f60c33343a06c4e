//! The game engine and its construction.
//!
//! - `engine`: `Game`, the turn and scoring state machine
//! - `builder`: `GameBuilder` for player count, rules, and face source
//! - `phase`: `TurnPhase`
//! - `snapshot`: serializable view for re-rendering

pub mod builder;
pub mod engine;
pub mod phase;
pub mod snapshot;

pub use builder::{GameBuilder, MAX_PLAYERS};
pub use engine::Game;
pub use phase::TurnPhase;
pub use snapshot::{CategoryView, DieView, GameSnapshot, PlayerView};
