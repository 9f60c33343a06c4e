//! Read-only view of the whole game for re-rendering.
//!
//! A presentation layer can serialize this after every action instead of
//! calling each accessor.

use serde::Serialize;

use super::engine::Game;
use super::phase::TurnPhase;
use crate::core::FaceSource;
use crate::scorecard::{Category, Player};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DieView {
    pub value: u8,
    pub held: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryView {
    pub name: &'static str,
    /// "--", "X", or the score.
    pub display: String,
    pub scored: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    /// 1-based seat number.
    pub number: usize,
    pub categories: Vec<CategoryView>,
    pub top_score: u32,
    pub has_bonus: bool,
    pub points_needed_for_bonus: u32,
    pub total_score: u32,
    pub finished: bool,
}

impl PlayerView {
    fn from_player(number: usize, player: &Player) -> Self {
        Self {
            number,
            categories: Category::ALL
                .iter()
                .map(|&category| CategoryView {
                    name: category.name(),
                    display: player.score(category).to_string(),
                    scored: player.is_scored(category),
                })
                .collect(),
            top_score: player.top_score(),
            has_bonus: player.has_bonus(),
            points_needed_for_bonus: player.points_needed_for_bonus(),
            total_score: player.total_score(),
            finished: player.is_finished(),
        }
    }
}

/// Everything a scoreboard needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// 1-based seat number of the player to act.
    pub current_player: usize,
    pub turn: u32,
    pub phase: TurnPhase,
    pub rolls_remaining: u32,
    pub dice: Vec<DieView>,
    pub players: Vec<PlayerView>,
    pub game_over: bool,
}

impl<R: FaceSource> Game<R> {
    /// Capture the current state for display.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            current_player: self.current_player_number(),
            turn: self.turn(),
            phase: self.phase(),
            rolls_remaining: self.rolls_remaining(),
            dice: self
                .dice()
                .iter()
                .map(|die| DieView {
                    value: die.value(),
                    held: die.is_held(),
                })
                .collect(),
            players: self
                .players()
                .iter()
                .enumerate()
                .map(|(i, player)| PlayerView::from_player(i + 1, player))
                .collect(),
            game_over: self.all_players_finished(),
        }
    }
}
