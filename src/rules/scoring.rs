//! What scoring a category does with the current dice.
//!
//! Each category checks its eligibility against the dice and either yields a
//! score or a scratch. Upper categories and Chance have no gate. The Yahtzee
//! Bonus is special: without eligibility it does nothing at all.

use crate::core::RulesConfig;
use crate::dice::{stats, DiceValues};
use crate::scorecard::Category;

/// Effect of scoring one category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreOutcome {
    /// Write this many points.
    Points(u32),
    /// Dice do not qualify; scratch the category.
    Scratch,
    /// Add one Yahtzee bonus to the accumulator.
    YahtzeeBonus,
    /// Nothing happens.
    Ignore,
}

/// Whether the dice qualify for `category`.
///
/// `has_yahtzee` is the player's sticky flag, only read for the bonus.
#[must_use]
pub fn is_eligible(category: Category, dice: &DiceValues, has_yahtzee: bool) -> bool {
    match category {
        Category::Ones
        | Category::Twos
        | Category::Threes
        | Category::Fours
        | Category::Fives
        | Category::Sixes
        | Category::Chance => true,
        Category::ThreeOfAKind => stats::is_three_of_a_kind(dice),
        Category::FourOfAKind => stats::is_four_of_a_kind(dice),
        Category::FullHouse => stats::is_full_house(dice),
        Category::SmallStraight => stats::is_small_straight(dice),
        Category::LargeStraight => stats::is_large_straight(dice),
        Category::Yahtzee => stats::is_yahtzee(dice),
        Category::YahtzeeBonus => stats::is_yahtzee(dice) && has_yahtzee,
    }
}

/// Decide what scoring `category` writes.
#[must_use]
pub fn evaluate(
    category: Category,
    dice: &DiceValues,
    has_yahtzee: bool,
    rules: &RulesConfig,
) -> ScoreOutcome {
    if !is_eligible(category, dice, has_yahtzee) {
        return match category {
            Category::YahtzeeBonus => ScoreOutcome::Ignore,
            _ => ScoreOutcome::Scratch,
        };
    }

    match category {
        Category::Ones
        | Category::Twos
        | Category::Threes
        | Category::Fours
        | Category::Fives
        | Category::Sixes => {
            let face = category.face().unwrap_or(0);
            ScoreOutcome::Points(stats::count_of(dice, face) as u32 * u32::from(face))
        }
        Category::ThreeOfAKind | Category::FourOfAKind | Category::Chance => {
            ScoreOutcome::Points(stats::sum(dice))
        }
        Category::FullHouse => ScoreOutcome::Points(rules.full_house_score),
        Category::SmallStraight => ScoreOutcome::Points(rules.small_straight_score),
        Category::LargeStraight => ScoreOutcome::Points(rules.large_straight_score),
        Category::Yahtzee => ScoreOutcome::Points(rules.yahtzee_score),
        Category::YahtzeeBonus => ScoreOutcome::YahtzeeBonus,
    }
}
