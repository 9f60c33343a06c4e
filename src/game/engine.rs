//! The game: seats, shared dice, turn transitions, and category scoring.
//!
//! Every mutator is total. An action that breaks a rule is ignored rather than
//! reported, so callers re-read state after each call. Each mutator has a
//! `can_*` predicate that says in advance whether it would be accepted.
//!
//! Rolling is the one mutator with a side effect when rejected: the player's
//! roll counter still advances, while the dice keep their faces.

use log::{debug, info, trace};

use super::builder::GameBuilder;
use super::phase::TurnPhase;
use crate::core::{Action, ActionRecord, ConfigError, FaceSource, GameRng, PlayerId, RulesConfig};
use crate::dice::{stats, DiceValues, Die, DICE_COUNT};
use crate::rules::{scoring, GameResult, ScoreOutcome};
use crate::scorecard::{Category, Player};

/// A Yahtzee game for one or more players.
///
/// Owns the players, the five dice, and the face source the dice roll from.
#[derive(Clone, Debug)]
pub struct Game<R = GameRng> {
    rules: RulesConfig,
    players: Vec<Player>,
    current: usize,
    dice: [Die; DICE_COUNT],
    source: R,
    turn: u32,
    history: Vec<ActionRecord>,
}

impl Game<GameRng> {
    /// New game with default rules and a seeded RNG.
    pub fn new(player_count: usize, seed: u64) -> Result<Self, ConfigError> {
        GameBuilder::new().player_count(player_count).build(seed)
    }
}

impl<R: FaceSource> Game<R> {
    /// New game with default rules, rolling from `source`.
    pub fn with_source(player_count: usize, source: R) -> Result<Self, ConfigError> {
        GameBuilder::new()
            .player_count(player_count)
            .build_with_source(source)
    }

    pub(crate) fn from_parts(rules: RulesConfig, player_count: usize, source: R) -> Self {
        Self {
            rules,
            players: (0..player_count).map(|_| Player::new(rules)).collect(),
            current: 0,
            dice: [Die::new(); DICE_COUNT],
            source,
            turn: 0,
            history: Vec::new(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Player by 0-based seat.
    #[must_use]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// 0-based seat of the player to act.
    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current
    }

    /// 1-based seat number of the player to act, for display.
    #[must_use]
    pub fn current_player_number(&self) -> usize {
        self.current + 1
    }

    #[must_use]
    pub fn current_player_id(&self) -> PlayerId {
        PlayerId::new(self.current as u8)
    }

    /// Die by 0-based slot.
    #[must_use]
    pub fn die(&self, index: usize) -> Option<&Die> {
        self.dice.get(index)
    }

    #[must_use]
    pub fn dice(&self) -> &[Die; DICE_COUNT] {
        &self.dice
    }

    /// Faces currently showing (0 for unrolled dice).
    #[must_use]
    pub fn dice_values(&self) -> DiceValues {
        self.dice.map(|die| die.value())
    }

    /// Number of completed handovers.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Accepted actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    #[must_use]
    pub fn rolls_remaining(&self) -> u32 {
        self.current_player().rolls_remaining()
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        let player = self.current_player();
        if player.has_selected_this_turn() {
            TurnPhase::TurnComplete
        } else if player.can_roll() {
            TurnPhase::Rolling
        } else {
            TurnPhase::Deciding
        }
    }

    /// The face source, e.g. to reseed it.
    pub fn source_mut(&mut self) -> &mut R {
        &mut self.source
    }

    // === Dice statistics ===

    #[must_use]
    pub fn sum_all_dice(&self) -> u32 {
        stats::sum(&self.dice_values())
    }

    #[must_use]
    pub fn count_of_value(&self, face: u8) -> usize {
        stats::count_of(&self.dice_values(), face)
    }

    #[must_use]
    pub fn longest_consecutive_run(&self) -> usize {
        stats::longest_consecutive_run(&self.dice_values())
    }

    // === Category eligibility ===

    #[must_use]
    pub fn can_three_of_a_kind(&self) -> bool {
        stats::is_three_of_a_kind(&self.dice_values())
    }

    #[must_use]
    pub fn can_four_of_a_kind(&self) -> bool {
        stats::is_four_of_a_kind(&self.dice_values())
    }

    #[must_use]
    pub fn can_full_house(&self) -> bool {
        stats::is_full_house(&self.dice_values())
    }

    #[must_use]
    pub fn can_small_straight(&self) -> bool {
        stats::is_small_straight(&self.dice_values())
    }

    #[must_use]
    pub fn can_large_straight(&self) -> bool {
        stats::is_large_straight(&self.dice_values())
    }

    #[must_use]
    pub fn can_yahtzee(&self) -> bool {
        stats::is_yahtzee(&self.dice_values())
    }

    /// A Yahtzee on the table and a Yahtzee already scored this game.
    #[must_use]
    pub fn can_yahtzee_bonus(&self) -> bool {
        self.can_yahtzee() && self.current_player().has_yahtzee()
    }

    // === Action predicates ===

    #[must_use]
    pub fn can_roll_dice(&self) -> bool {
        self.current_player().can_roll()
    }

    #[must_use]
    pub fn can_toggle_held(&self, index: usize) -> bool {
        self.dice.get(index).is_some_and(Die::can_toggle_held)
    }

    #[must_use]
    pub fn can_next_turn(&self) -> bool {
        self.current_player().has_selected_this_turn()
    }

    /// Whether `score(category)` would change the scorecard.
    ///
    /// Scoring Yahtzee on five of a kind sets the sticky Yahtzee flag even
    /// when this returns false.
    #[must_use]
    pub fn can_score(&self, category: Category) -> bool {
        let player = self.current_player();
        match category {
            Category::YahtzeeBonus => self.can_yahtzee_bonus() && player.can_apply_yahtzee_bonus(),
            _ => player.can_set_score(category),
        }
    }

    #[must_use]
    pub fn can_scratch(&self, category: Category) -> bool {
        self.current_player().can_set_score(category)
    }

    #[must_use]
    pub fn can_apply(&self, action: &Action) -> bool {
        match *action {
            Action::Roll => self.can_roll_dice(),
            Action::ToggleHold(index) => self.can_toggle_held(index),
            Action::Score(category) => self.can_score(category),
            Action::Scratch(category) => self.can_scratch(category),
            Action::NextTurn => self.can_next_turn(),
        }
    }

    /// Every action the current state would accept.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();

        if self.can_roll_dice() {
            actions.push(Action::Roll);
        }
        actions.extend(
            (0..DICE_COUNT)
                .filter(|&i| self.can_toggle_held(i))
                .map(Action::ToggleHold),
        );
        actions.extend(
            Category::ALL
                .iter()
                .filter(|&&c| self.can_score(c))
                .map(|&c| Action::Score(c)),
        );
        actions.extend(
            Category::ALL
                .iter()
                .filter(|&&c| self.can_scratch(c))
                .map(|&c| Action::Scratch(c)),
        );
        if self.can_next_turn() {
            actions.push(Action::NextTurn);
        }

        actions
    }

    // === Mutators ===

    /// Run an action. Returns whether it was accepted.
    ///
    /// A rejected action leaves the scorecards and dice as they were, with two
    /// exceptions: a rejected roll still advances the roll counter, and a
    /// rejected `Score(Yahtzee)` on five of a kind still sets the sticky
    /// Yahtzee flag.
    pub fn apply(&mut self, action: Action) -> bool {
        let accepted = self.can_apply(&action);
        match action {
            Action::Roll => self.roll_dice(),
            Action::ToggleHold(index) => self.toggle_held(index),
            Action::Score(category) => self.score(category),
            Action::Scratch(category) => self.scratch(category),
            Action::NextTurn => self.next_turn(),
        }
        accepted
    }

    /// Roll every die that is not held.
    ///
    /// The roll counter advances even when the roll itself is refused.
    pub fn roll_dice(&mut self) {
        let player = self.current_player_id();
        let accepted = self.can_roll_dice();

        if accepted {
            for die in self.dice.iter_mut().filter(|die| !die.is_held()) {
                die.roll(&mut self.source);
            }
        }
        self.players[self.current].record_roll();

        if accepted {
            debug!("{} rolled {:?}", player, self.dice_values());
        }
        self.finish(player, Action::Roll, accepted);
    }

    /// Toggle the held flag of one die. Unrolled dice cannot be held.
    pub fn toggle_held(&mut self, index: usize) {
        let player = self.current_player_id();
        let accepted = self.can_toggle_held(index);

        if let Some(die) = self.dice.get_mut(index) {
            die.toggle_held();
        }
        self.finish(player, Action::ToggleHold(index), accepted);
    }

    /// Hand the dice to the next player once a category was written.
    pub fn next_turn(&mut self) {
        let player = self.current_player_id();
        if !self.can_next_turn() {
            self.finish(player, Action::NextTurn, false);
            return;
        }

        self.finish(player, Action::NextTurn, true);
        self.current = (self.current + 1) % self.players.len();
        self.players[self.current].reset();
        for die in &mut self.dice {
            die.reset();
        }
        self.turn += 1;

        if self.all_players_finished() {
            info!("game over after {} turns", self.turn);
        } else {
            debug!("turn {}: {} to play", self.turn, self.current_player_id());
        }
    }

    /// Score a category with the current dice.
    ///
    /// Upper categories and Chance always score. The other lower categories
    /// scratch when the dice do not qualify. The Yahtzee Bonus adds to its
    /// accumulator when eligible and is otherwise ignored.
    pub fn score(&mut self, category: Category) {
        let player_id = self.current_player_id();
        let accepted = self.can_score(category);

        let player = &self.players[self.current];
        let outcome = scoring::evaluate(
            category,
            &self.dice_values(),
            player.has_yahtzee(),
            &self.rules,
        );

        let player = &mut self.players[self.current];
        match outcome {
            ScoreOutcome::Points(points) => player.set_score(category, points),
            ScoreOutcome::Scratch => player.scratch(category),
            ScoreOutcome::YahtzeeBonus => player.yahtzee_bonus(),
            ScoreOutcome::Ignore => {}
        }
        // Sticky even when the write itself was refused.
        if category == Category::Yahtzee && matches!(outcome, ScoreOutcome::Points(_)) {
            player.mark_yahtzee();
        }

        self.finish(player_id, Action::Score(category), accepted);
    }

    /// Score an upper category by its 0-based index (0 = Ones ... 5 = Sixes).
    pub fn score_numeric(&mut self, index: usize) {
        match Category::from_index(index).filter(|c| c.is_upper()) {
            Some(category) => self.score(category),
            None => trace!("score_numeric({}) ignored: not an upper category", index),
        }
    }

    pub fn score_three_of_a_kind(&mut self) {
        self.score(Category::ThreeOfAKind);
    }

    pub fn score_four_of_a_kind(&mut self) {
        self.score(Category::FourOfAKind);
    }

    pub fn score_full_house(&mut self) {
        self.score(Category::FullHouse);
    }

    pub fn score_small_straight(&mut self) {
        self.score(Category::SmallStraight);
    }

    pub fn score_large_straight(&mut self) {
        self.score(Category::LargeStraight);
    }

    pub fn score_chance(&mut self) {
        self.score(Category::Chance);
    }

    pub fn score_yahtzee(&mut self) {
        self.score(Category::Yahtzee);
    }

    pub fn score_yahtzee_bonus(&mut self) {
        self.score(Category::YahtzeeBonus);
    }

    /// Use up a category with no score.
    pub fn scratch(&mut self, category: Category) {
        let player = self.current_player_id();
        let accepted = self.can_scratch(category);
        self.players[self.current].scratch(category);
        self.finish(player, Action::Scratch(category), accepted);
    }

    /// Start over with blank scorecards for the same seats.
    ///
    /// The face source carries on where it was.
    pub fn restart(&mut self) {
        let count = self.players.len();
        self.players = (0..count).map(|_| Player::new(self.rules)).collect();
        self.current = 0;
        for die in &mut self.dice {
            die.reset();
        }
        self.turn = 0;
        self.history.clear();
        info!("game restarted with {} player(s)", count);
    }

    fn finish(&mut self, player: PlayerId, action: Action, accepted: bool) {
        if !accepted {
            trace!("{}: {} ignored", player, action);
            return;
        }

        debug!("{}: {}", player, action);
        self.history.push(ActionRecord {
            player,
            action,
            turn: self.turn,
            sequence: self.history.len() as u32,
        });
    }

    // === End of game ===

    #[must_use]
    pub fn all_players_finished(&self) -> bool {
        self.players.iter().all(Player::is_finished)
    }

    /// Totals for every seat, highest first. Ties keep seat order.
    #[must_use]
    pub fn standings(&self) -> Vec<(PlayerId, u32)> {
        let mut standings: Vec<_> = self
            .players
            .iter()
            .enumerate()
            .map(|(i, p)| (PlayerId::new(i as u8), p.total_score()))
            .collect();
        standings.sort_by(|a, b| b.1.cmp(&a.1));
        standings
    }

    /// Winner(s), once every player is finished.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.all_players_finished() {
            return None;
        }
        GameResult::from_totals(&self.standings())
    }
}
