//! The fourteen scorecard categories.

use serde::{Deserialize, Serialize};

/// A scorecard slot.
///
/// Indices 0-5 are the upper (numeric) section, one per face. `YahtzeeBonus`
/// is an accumulator rather than a one-shot slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    ThreeOfAKind,
    FourOfAKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Chance,
    Yahtzee,
    YahtzeeBonus,
}

impl Category {
    /// Number of categories on a scorecard.
    pub const COUNT: usize = 14;

    /// Every category, in scorecard order.
    pub const ALL: [Category; Self::COUNT] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Chance,
        Category::Yahtzee,
        Category::YahtzeeBonus,
    ];

    /// The six numeric categories.
    pub const UPPER: [Category; 6] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
    ];

    /// Scorecard index (0-13).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Upper category for a face value (1-6).
    #[must_use]
    pub fn from_face(face: u8) -> Option<Self> {
        match face {
            1..=6 => Some(Self::UPPER[usize::from(face) - 1]),
            _ => None,
        }
    }

    /// The face an upper category counts.
    #[must_use]
    pub fn face(self) -> Option<u8> {
        if self.is_upper() {
            Some(self.index() as u8 + 1)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn is_upper(self) -> bool {
        (self as usize) < 6
    }

    /// Whether this category must be filled before a player is finished.
    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Category::YahtzeeBonus)
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Category::Ones => "Ones",
            Category::Twos => "Twos",
            Category::Threes => "Threes",
            Category::Fours => "Fours",
            Category::Fives => "Fives",
            Category::Sixes => "Sixes",
            Category::ThreeOfAKind => "3 of a Kind",
            Category::FourOfAKind => "4 of a Kind",
            Category::FullHouse => "Full House",
            Category::SmallStraight => "Small Straight",
            Category::LargeStraight => "Large Straight",
            Category::Chance => "Chance",
            Category::Yahtzee => "Yahtzee",
            Category::YahtzeeBonus => "Yahtzee Bonus",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
