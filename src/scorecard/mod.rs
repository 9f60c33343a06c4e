//! Scorecards: categories, slot contents, and per-player bookkeeping.

pub mod category;
pub mod entry;
pub mod player;

pub use category::Category;
pub use entry::ScoreEntry;
pub use player::Player;
