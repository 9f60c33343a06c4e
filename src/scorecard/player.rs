//! Per-player scorecard and turn bookkeeping.
//!
//! ## Write rules
//!
//! A category is written at most once per game and at most one category per
//! turn, and only after the player has rolled. Writes that break these rules
//! are silently ignored.
//!
//! Once a Yahtzee bonus has been taken this turn, the next write to any
//! category is recorded as a scratch regardless of the requested score, and
//! this forced write happens even if the category was already filled. The
//! regular write path is checked afterwards and can no longer fire, since the
//! forced write marks a selection.
//!
//! ## Yahtzee Bonus
//!
//! The Yahtzee Bonus slot accumulates. Adding to it neither marks the slot as
//! scored nor counts as the turn's selection, but it needs the selection to
//! still be open.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::entry::ScoreEntry;
use crate::core::RulesConfig;

/// One player's scorecard and turn state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    rules: RulesConfig,
    scores: [ScoreEntry; Category::COUNT],
    scored: [bool; Category::COUNT],
    selected_this_turn: bool,
    rolls_this_turn: u32,
    has_yahtzee: bool,
    yahtzee_bonus_this_turn: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(RulesConfig::default())
    }
}

impl Player {
    /// A blank scorecard.
    #[must_use]
    pub fn new(rules: RulesConfig) -> Self {
        Self {
            rules,
            scores: [ScoreEntry::Unset; Category::COUNT],
            scored: [false; Category::COUNT],
            selected_this_turn: false,
            rolls_this_turn: 0,
            has_yahtzee: false,
            yahtzee_bonus_this_turn: false,
        }
    }

    // === Scorecard ===

    #[must_use]
    pub fn score(&self, category: Category) -> ScoreEntry {
        self.scores[category.index()]
    }

    /// All fourteen entries in scorecard order.
    #[must_use]
    pub fn scores(&self) -> &[ScoreEntry; Category::COUNT] {
        &self.scores
    }

    /// Whether a category has been written (a scratch counts).
    #[must_use]
    pub fn is_scored(&self, category: Category) -> bool {
        self.scored[category.index()]
    }

    /// Whether `set_score`/`scratch` on `category` would write anything.
    #[must_use]
    pub fn can_set_score(&self, category: Category) -> bool {
        self.yahtzee_bonus_this_turn
            || (!self.selected_this_turn && !self.is_scored(category) && self.rolls_this_turn > 0)
    }

    /// Write a numeric score.
    pub fn set_score(&mut self, category: Category, points: u32) {
        self.write(category, ScoreEntry::Points(points));
    }

    /// Mark a category as used with no score.
    pub fn scratch(&mut self, category: Category) {
        self.write(category, ScoreEntry::Scratched);
    }

    fn write(&mut self, category: Category, entry: ScoreEntry) {
        let idx = category.index();

        if self.yahtzee_bonus_this_turn {
            self.scores[idx] = ScoreEntry::Scratched;
            self.scored[idx] = true;
            self.selected_this_turn = true;
            debug!("{} forced to scratch after yahtzee bonus", category);
        }

        if !self.selected_this_turn
            && !self.scored[idx]
            && self.rolls_this_turn > 0
            && !self.yahtzee_bonus_this_turn
        {
            self.scores[idx] = entry;
            self.scored[idx] = true;
            self.selected_this_turn = true;
            debug!("{} set to {}", category, entry);
        } else if !self.yahtzee_bonus_this_turn {
            trace!(
                "write to {} ignored (selected={}, scored={}, rolls={})",
                category,
                self.selected_this_turn,
                self.scored[idx],
                self.rolls_this_turn
            );
        }
    }

    // === Yahtzee bonus ===

    /// Whether `yahtzee_bonus` would add to the accumulator.
    #[must_use]
    pub fn can_apply_yahtzee_bonus(&self) -> bool {
        !self.selected_this_turn && !self.yahtzee_bonus_this_turn && self.rolls_this_turn > 0
    }

    /// Add one Yahtzee bonus to the accumulator slot.
    pub fn yahtzee_bonus(&mut self) {
        if !self.can_apply_yahtzee_bonus() {
            trace!("yahtzee bonus ignored");
            return;
        }

        let idx = Category::YahtzeeBonus.index();
        let total = self.scores[idx]
            .value()
            .saturating_add(self.rules.yahtzee_bonus_score);
        self.scores[idx] = ScoreEntry::Points(total);
        self.yahtzee_bonus_this_turn = true;
        debug!("yahtzee bonus applied, accumulator now {}", total);
    }

    /// Record that a Yahtzee was made. Sticky for the rest of the game.
    pub fn mark_yahtzee(&mut self) {
        self.has_yahtzee = true;
    }

    #[must_use]
    pub fn has_yahtzee(&self) -> bool {
        self.has_yahtzee
    }

    #[must_use]
    pub fn yahtzee_bonus_this_turn(&self) -> bool {
        self.yahtzee_bonus_this_turn
    }

    // === Totals ===

    /// Sum of the six numeric categories.
    #[must_use]
    pub fn top_score(&self) -> u32 {
        Category::UPPER
            .iter()
            .map(|&c| self.score(c).value())
            .fold(0, u32::saturating_add)
    }

    #[must_use]
    pub fn has_bonus(&self) -> bool {
        self.top_score() >= self.rules.upper_bonus_threshold
    }

    /// Upper-section points still missing for the bonus.
    #[must_use]
    pub fn points_needed_for_bonus(&self) -> u32 {
        self.rules
            .upper_bonus_threshold
            .saturating_sub(self.top_score())
    }

    /// Every numeric entry, plus the upper bonus when earned.
    ///
    /// Saturates at `u32::MAX` rather than wrapping.
    #[must_use]
    pub fn total_score(&self) -> u32 {
        let sum = self
            .scores
            .iter()
            .map(|e| e.value())
            .fold(0, u32::saturating_add);
        if self.has_bonus() {
            sum.saturating_add(self.rules.upper_bonus)
        } else {
            sum
        }
    }

    /// All categories except the Yahtzee Bonus have been written.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        Category::ALL
            .iter()
            .filter(|c| c.is_required())
            .all(|&c| self.is_scored(c))
    }

    // === Turn state ===

    #[must_use]
    pub fn can_roll(&self) -> bool {
        self.rolls_this_turn < self.rules.rolls_per_turn && !self.selected_this_turn
    }

    /// Count a roll attempt.
    pub fn record_roll(&mut self) {
        self.rolls_this_turn += 1;
    }

    #[must_use]
    pub fn rolls_this_turn(&self) -> u32 {
        self.rolls_this_turn
    }

    /// Rolls left this turn.
    #[must_use]
    pub fn rolls_remaining(&self) -> u32 {
        self.rules.rolls_per_turn.saturating_sub(self.rolls_this_turn)
    }

    #[must_use]
    pub fn has_selected_this_turn(&self) -> bool {
        self.selected_this_turn
    }

    /// Start a new turn. The scorecard is kept.
    pub fn reset(&mut self) {
        self.selected_this_turn = false;
        self.rolls_this_turn = 0;
        self.yahtzee_bonus_this_turn = false;
    }
}
