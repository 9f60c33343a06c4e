//! Where the current player is within their turn.

use serde::{Deserialize, Serialize};

/// Turn state machine.
///
/// `Rolling` -> `Deciding` once the rolls run out, -> `TurnComplete` once a
/// category is written. Only `next_turn` leaves `TurnComplete`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Rolls left and no category chosen yet.
    Rolling,
    /// Out of rolls; a category must be scored or scratched.
    Deciding,
    /// A category was written; waiting for the turn to be handed over.
    TurnComplete,
}

impl std::fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TurnPhase::Rolling => "rolling",
            TurnPhase::Deciding => "deciding",
            TurnPhase::TurnComplete => "turn complete",
        };
        f.write_str(name)
    }
}
