//! Dice on the table and the statistics scoring reads from them.
//!
//! - `die`: a single die with its held flag and roll counter
//! - `stats`: pure functions over the five face values

pub mod die;
pub mod stats;

pub use die::{Die, MAX_FACE};
pub use stats::{DiceValues, DICE_COUNT};
