//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{ConfigError, GameRng};
use crate::game::Game;
use crate::scorecard::Category;

fn to_py_err(err: ConfigError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn category(index: usize) -> PyResult<Category> {
    Category::from_index(index)
        .ok_or_else(|| PyValueError::new_err(format!("no category at index {}", index)))
}

/// Python wrapper for a Yahtzee game.
///
/// Mutators never raise on a rule violation; they return whether the action
/// was accepted.
#[pyclass(name = "Yahtzee")]
pub struct PyYahtzee {
    game: Game<GameRng>,
}

#[pymethods]
impl PyYahtzee {
    /// Create a new game.
    ///
    /// # Arguments
    /// - player_count: Number of players (1-255)
    /// - seed: RNG seed for deterministic dice
    #[new]
    #[pyo3(signature = (player_count = 1, seed = 42))]
    fn new(player_count: usize, seed: u64) -> PyResult<Self> {
        let game = Game::new(player_count, seed).map_err(to_py_err)?;
        Ok(Self { game })
    }

    fn roll_dice(&mut self) -> bool {
        let accepted = self.game.can_roll_dice();
        self.game.roll_dice();
        accepted
    }

    fn toggle_held(&mut self, die: usize) -> bool {
        let accepted = self.game.can_toggle_held(die);
        self.game.toggle_held(die);
        accepted
    }

    fn next_turn(&mut self) -> bool {
        let accepted = self.game.can_next_turn();
        self.game.next_turn();
        accepted
    }

    /// Score a category (0-13) with the current dice.
    fn score(&mut self, index: usize) -> PyResult<bool> {
        let category = category(index)?;
        let accepted = self.game.can_score(category);
        self.game.score(category);
        Ok(accepted)
    }

    fn scratch(&mut self, index: usize) -> PyResult<bool> {
        let category = category(index)?;
        let accepted = self.game.can_scratch(category);
        self.game.scratch(category);
        Ok(accepted)
    }

    fn can_roll_dice(&self) -> bool {
        self.game.can_roll_dice()
    }

    fn can_toggle_held(&self, die: usize) -> bool {
        self.game.can_toggle_held(die)
    }

    fn can_score(&self, index: usize) -> PyResult<bool> {
        Ok(self.game.can_score(category(index)?))
    }

    fn can_scratch(&self, index: usize) -> PyResult<bool> {
        Ok(self.game.can_scratch(category(index)?))
    }

    fn can_next_turn(&self) -> bool {
        self.game.can_next_turn()
    }

    /// Face values (0 = not rolled yet).
    #[getter]
    fn dice(&self) -> Vec<u8> {
        self.game.dice_values().to_vec()
    }

    #[getter]
    fn held(&self) -> Vec<bool> {
        self.game.dice().iter().map(|d| d.is_held()).collect()
    }

    /// 1-based number of the player to act.
    #[getter]
    fn current_player(&self) -> usize {
        self.game.current_player_number()
    }

    #[getter]
    fn player_count(&self) -> usize {
        self.game.player_count()
    }

    #[getter]
    fn rolls_remaining(&self) -> u32 {
        self.game.rolls_remaining()
    }

    /// Display string of a category for a 0-based player.
    fn score_display(&self, player: usize, index: usize) -> PyResult<String> {
        let category = category(index)?;
        let player = self.player(player)?;
        Ok(player.score(category).to_string())
    }

    fn total_score(&self, player: usize) -> PyResult<u32> {
        Ok(self.player(player)?.total_score())
    }

    fn has_bonus(&self, player: usize) -> PyResult<bool> {
        Ok(self.player(player)?.has_bonus())
    }

    fn is_finished(&self, player: usize) -> PyResult<bool> {
        Ok(self.player(player)?.is_finished())
    }

    fn all_players_finished(&self) -> bool {
        self.game.all_players_finished()
    }

    fn restart(&mut self) {
        self.game.restart();
    }

    /// The full state as a JSON document.
    fn snapshot_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.game.snapshot())
            .map_err(|e| PyValueError::new_err(format!("{}", e)))
    }

    fn __repr__(&self) -> String {
        format!(
            "Yahtzee(players={}, current=P{}, phase={})",
            self.game.player_count(),
            self.game.current_player_number(),
            self.game.phase()
        )
    }
}

impl PyYahtzee {
    fn player(&self, index: usize) -> PyResult<&crate::scorecard::Player> {
        self.game
            .player(index)
            .ok_or_else(|| PyValueError::new_err(format!("no player at index {}", index)))
    }
}
