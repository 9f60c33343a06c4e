//! What a scorecard slot currently holds.

use serde::{Deserialize, Serialize};

/// Contents of one scorecard slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreEntry {
    /// Nothing written yet.
    #[default]
    Unset,
    /// A numeric score.
    Points(u32),
    /// Used up with no score.
    Scratched,
}

impl ScoreEntry {
    /// The numeric score, if any.
    #[must_use]
    pub const fn points(self) -> Option<u32> {
        match self {
            ScoreEntry::Points(points) => Some(points),
            _ => None,
        }
    }

    /// Contribution to a sum: non-numeric entries count as 0.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            ScoreEntry::Points(points) => points,
            _ => 0,
        }
    }

    #[must_use]
    pub const fn is_unset(self) -> bool {
        matches!(self, ScoreEntry::Unset)
    }
}

impl std::fmt::Display for ScoreEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreEntry::Unset => f.write_str("--"),
            ScoreEntry::Points(points) => write!(f, "{}", points),
            ScoreEntry::Scratched => f.write_str("X"),
        }
    }
}
