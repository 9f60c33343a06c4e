//! Player actions and the accepted-action log.
//!
//! An `Action` is what a presentation layer forwards when the user clicks
//! something. `Game::apply` runs it; only accepted actions are recorded.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::scorecard::Category;

/// A single user action against the current player's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Roll every die that is not held.
    Roll,
    /// Toggle the held flag of one die (0-based).
    ToggleHold(usize),
    /// Score a category with the current dice, scratching it if ineligible.
    Score(Category),
    /// Scratch a category outright.
    Scratch(Category),
    /// Hand the dice to the next player.
    NextTurn,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Roll => write!(f, "roll"),
            Action::ToggleHold(die) => write!(f, "toggle hold on die {}", die + 1),
            Action::Score(category) => write!(f, "score {}", category),
            Action::Scratch(category) => write!(f, "scratch {}", category),
            Action::NextTurn => write!(f, "next turn"),
        }
    }
}

/// Record of an accepted action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Player whose turn it was.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number (0-based, counts every handover).
    pub turn: u32,

    /// Global sequence number, unique and increasing within a game.
    pub sequence: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_display() {
        assert_eq!(Action::Roll.to_string(), "roll");
        assert_eq!(Action::ToggleHold(0).to_string(), "toggle hold on die 1");
        assert_eq!(
            Action::Score(Category::FullHouse).to_string(),
            "score Full House"
        );
        assert_eq!(Action::Scratch(Category::Chance).to_string(), "scratch Chance");
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord {
            player: PlayerId::new(1),
            action: Action::Score(Category::Yahtzee),
            turn: 4,
            sequence: 17,
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
