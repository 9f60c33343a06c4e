//! Outcome of a finished game.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single highest total.
    Winner(PlayerId),
    /// Several players share the highest total.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Build a result from `(player, total)` pairs.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn from_totals(totals: &[(PlayerId, u32)]) -> Option<Self> {
        let best = totals.iter().map(|&(_, total)| total).max()?;
        let mut leaders: Vec<PlayerId> = totals
            .iter()
            .filter(|&&(_, total)| total == best)
            .map(|&(player, _)| player)
            .collect();
        leaders.sort();

        Some(if leaders.len() == 1 {
            GameResult::Winner(leaders[0])
        } else {
            GameResult::Winners(leaders)
        })
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}
