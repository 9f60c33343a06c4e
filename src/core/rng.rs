//! Deterministic, injectable randomness for dice rolls.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical face sequence
//! - **Re-seedable**: A running game can be pointed at a new seed
//! - **Serializable**: O(1) state capture and restore
//! - **Injectable**: Dice roll through the `FaceSource` trait, so tests can
//!   script exact faces with `ScriptedFaces`
//!
//! ```
//! use yahtzee_engine::core::{FaceSource, GameRng, ScriptedFaces};
//!
//! let mut rng = GameRng::new(42);
//! let face = rng.next_face();
//! assert!((1..=6).contains(&face));
//!
//! let mut scripted = ScriptedFaces::new(vec![6, 6, 6, 6, 6]);
//! assert_eq!(scripted.next_face(), 6);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::dice::MAX_FACE;

/// Supplies die faces to roll.
///
/// Every value returned must be in `1..=MAX_FACE`.
pub trait FaceSource {
    /// Produce the next face value.
    fn next_face(&mut self) -> u8;
}

/// Deterministic RNG for dice.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restart the stream from a new seed.
    pub fn reseed(&mut self, seed: u64) {
        self.inner = ChaCha8Rng::seed_from_u64(seed);
        self.seed = seed;
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl FaceSource for GameRng {
    fn next_face(&mut self) -> u8 {
        self.inner.gen_range(1..=MAX_FACE)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many faces have been rolled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// A fixed face sequence, replayed in order and then from the start again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedFaces {
    faces: Vec<u8>,
    cursor: usize,
}

impl ScriptedFaces {
    /// Create a scripted source.
    ///
    /// # Panics
    /// Panics if `faces` is empty or holds a value outside `1..=MAX_FACE`.
    pub fn new(faces: Vec<u8>) -> Self {
        assert!(!faces.is_empty(), "Scripted faces must not be empty");
        assert!(
            faces.iter().all(|f| (1..=MAX_FACE).contains(f)),
            "Scripted faces must be in 1..=6"
        );
        Self { faces, cursor: 0 }
    }

    /// Append more faces after the current script.
    pub fn extend(&mut self, faces: impl IntoIterator<Item = u8>) {
        for face in faces {
            assert!((1..=MAX_FACE).contains(&face), "Scripted faces must be in 1..=6");
            self.faces.push(face);
        }
    }

    /// Number of faces handed out so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl FaceSource for ScriptedFaces {
    fn next_face(&mut self) -> u8 {
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}
