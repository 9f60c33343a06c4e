//! Pure statistics and category-eligibility checks over five face values.
//!
//! All functions take the face values as shown on the table, where 0 marks an
//! unrolled die. None of them look at held flags.

use super::die::MAX_FACE;

/// Number of dice in play.
pub const DICE_COUNT: usize = 5;

/// Face values of the five dice.
pub type DiceValues = [u8; DICE_COUNT];

/// Sum of all five faces.
#[must_use]
pub fn sum(dice: &DiceValues) -> u32 {
    dice.iter().map(|&v| u32::from(v)).sum()
}

/// How many dice show `face`.
#[must_use]
pub fn count_of(dice: &DiceValues, face: u8) -> usize {
    dice.iter().filter(|&&v| v == face).count()
}

/// Consecutive-run length used by the straight checks.
///
/// Sorts the faces and adds one for every adjacent pair that differs by
/// exactly 1. Duplicates neither break nor extend the count, and a gap does
/// not reset it, so `[1, 2, 4, 5, 6]` counts 4.
#[must_use]
pub fn longest_consecutive_run(dice: &DiceValues) -> usize {
    let mut sorted = *dice;
    sorted.sort_unstable();

    1 + sorted
        .windows(2)
        .filter(|pair| i16::from(pair[1]) - i16::from(pair[0]) == 1)
        .count()
}

/// Some face appears at least `n` times.
#[must_use]
pub fn has_of_a_kind(dice: &DiceValues, n: usize) -> bool {
    (1..=MAX_FACE).any(|face| count_of(dice, face) >= n)
}

#[must_use]
pub fn is_three_of_a_kind(dice: &DiceValues) -> bool {
    has_of_a_kind(dice, 3)
}

#[must_use]
pub fn is_four_of_a_kind(dice: &DiceValues) -> bool {
    has_of_a_kind(dice, 4)
}

/// Three of one face and two of another.
///
/// The second value is the first die (scanning from the second) that differs
/// from the first die; if every die matches, the first die's face is compared
/// against itself.
#[must_use]
pub fn is_full_house(dice: &DiceValues) -> bool {
    let first = dice[0];
    let second = dice[1..]
        .iter()
        .copied()
        .find(|&v| v != first)
        .unwrap_or(dice[DICE_COUNT - 1]);

    let mut high = count_of(dice, first);
    let mut low = count_of(dice, second);
    if low > high {
        std::mem::swap(&mut high, &mut low);
    }

    high == 3 && low == 2
}

#[must_use]
pub fn is_small_straight(dice: &DiceValues) -> bool {
    longest_consecutive_run(dice) >= 4
}

#[must_use]
pub fn is_large_straight(dice: &DiceValues) -> bool {
    longest_consecutive_run(dice) == 5
}

/// All five dice show the same rolled face.
#[must_use]
pub fn is_yahtzee(dice: &DiceValues) -> bool {
    (1..=MAX_FACE).any(|face| count_of(dice, face) == DICE_COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_and_count() {
        let dice = [2, 2, 2, 5, 6];
        assert_eq!(sum(&dice), 17);
        assert_eq!(count_of(&dice, 2), 3);
        assert_eq!(count_of(&dice, 4), 0);
    }

    #[test]
    fn test_run_on_straights() {
        assert_eq!(longest_consecutive_run(&[1, 2, 3, 4, 5]), 5);
        assert_eq!(longest_consecutive_run(&[6, 5, 4, 3, 2]), 5);
        assert_eq!(longest_consecutive_run(&[1, 2, 3, 4, 6]), 4);
        assert_eq!(longest_consecutive_run(&[3, 4, 4, 5, 6]), 4);
    }

    #[test]
    fn test_run_counts_unit_gaps_across_breaks() {
        // True longest run is 3 (4-5-6); the gap-count reports 4.
        assert_eq!(longest_consecutive_run(&[1, 2, 4, 5, 6]), 4);
        assert!(is_small_straight(&[1, 2, 4, 5, 6]));
    }

    #[test]
    fn test_run_on_unrolled_dice() {
        assert_eq!(longest_consecutive_run(&[0; DICE_COUNT]), 1);
        assert_eq!(longest_consecutive_run(&[6; DICE_COUNT]), 1);
    }

    #[test]
    fn test_of_a_kind() {
        assert!(is_three_of_a_kind(&[2, 2, 2, 5, 6]));
        assert!(!is_four_of_a_kind(&[2, 2, 2, 5, 6]));
        assert!(is_four_of_a_kind(&[4, 1, 4, 4, 4]));
        assert!(is_three_of_a_kind(&[4, 4, 4, 4, 4]));
        assert!(!is_three_of_a_kind(&[0; DICE_COUNT]));
    }

    #[test]
    fn test_full_house() {
        assert!(is_full_house(&[3, 3, 3, 5, 5]));
        assert!(is_full_house(&[5, 3, 5, 3, 3]));
        assert!(!is_full_house(&[3, 3, 3, 3, 5]));
        assert!(!is_full_house(&[1, 2, 3, 4, 5]));
        assert!(!is_full_house(&[6, 6, 6, 6, 6]));
        assert!(!is_full_house(&[0; DICE_COUNT]));
    }

    #[test]
    fn test_two_pairs_is_not_full_house() {
        assert!(!is_full_house(&[1, 2, 2, 4, 4]));
        assert!(!is_full_house(&[4, 4, 2, 2, 1]));
    }

    #[test]
    fn test_straights() {
        assert!(is_small_straight(&[1, 2, 3, 4, 6]));
        assert!(!is_large_straight(&[1, 2, 3, 4, 6]));
        assert!(is_large_straight(&[2, 3, 4, 5, 6]));
        assert!(is_small_straight(&[2, 3, 4, 5, 6]));
        assert!(!is_small_straight(&[1, 1, 3, 4, 6]));
    }

    #[test]
    fn test_yahtzee() {
        assert!(is_yahtzee(&[6, 6, 6, 6, 6]));
        assert!(!is_yahtzee(&[6, 6, 6, 6, 5]));
        assert!(!is_yahtzee(&[0; DICE_COUNT]));
    }
}
