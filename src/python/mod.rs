//! Python bindings for the Yahtzee engine.
//!
//! A Python presentation layer forwards user actions as method calls and
//! re-reads state afterwards.
//!
//! # Quick Start
//!
//! ```python
//! import yahtzee_engine as yz
//!
//! game = yz.Yahtzee(player_count=2, seed=42)
//! game.roll_dice()
//! game.toggle_held(0)
//! game.roll_dice()
//! game.score(11)  # Chance
//! game.next_turn()
//! print(game.snapshot_json())
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// yahtzee_engine: Yahtzee rules engine.
#[pymodule]
fn yahtzee_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyYahtzee>()?;
    Ok(())
}
