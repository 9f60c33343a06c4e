//! Core engine types: randomness, configuration, player identity, actions.
//!
//! These are the building blocks the dice, scorecard, and game modules share.

pub mod rng;
pub mod config;
pub mod player;
pub mod action;

pub use rng::{FaceSource, GameRng, GameRngState, ScriptedFaces};
pub use config::{ConfigError, RulesConfig};
pub use player::PlayerId;
pub use action::{Action, ActionRecord};
