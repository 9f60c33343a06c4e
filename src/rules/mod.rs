//! Scoring rules and game results.
//!
//! - `scoring`: what writing a category does with the current dice
//! - `result`: winner(s) once every scorecard is complete

pub mod result;
pub mod scoring;

pub use result::GameResult;
pub use scoring::{evaluate, is_eligible, ScoreOutcome};
