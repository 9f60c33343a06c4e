//! A single die: face value, held flag, and per-turn roll counter.

use serde::{Deserialize, Serialize};

use crate::core::FaceSource;

/// Highest face on a die.
pub const MAX_FACE: u8 = 6;

/// One die slot on the table.
///
/// A value of 0 means the die has not been rolled this turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die {
    value: u8,
    held: bool,
    roll_count: u32,
}

impl Die {
    /// An unrolled, unheld die.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: 0,
            held: false,
            roll_count: 0,
        }
    }

    /// Current face, or 0 before the first roll of the turn.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    #[must_use]
    pub const fn is_held(&self) -> bool {
        self.held
    }

    /// Times this die was rolled this turn.
    #[must_use]
    pub const fn roll_count(&self) -> u32 {
        self.roll_count
    }

    /// Whether `toggle_held` would do anything.
    #[must_use]
    pub const fn can_toggle_held(&self) -> bool {
        self.roll_count > 0
    }

    /// Roll the die. A held die keeps its face.
    pub fn roll<R: FaceSource + ?Sized>(&mut self, source: &mut R) {
        if !self.held {
            self.value = source.next_face();
        }
        self.roll_count += 1;
    }

    /// Flip the held flag. An unrolled die cannot be held.
    pub fn toggle_held(&mut self) {
        if self.can_toggle_held() {
            self.held = !self.held;
        }
    }

    /// Clear value, hold, and roll counter for a new turn.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedFaces;

    #[test]
    fn test_new_die_is_blank() {
        let die = Die::new();
        assert_eq!(die.value(), 0);
        assert!(!die.is_held());
        assert_eq!(die.roll_count(), 0);
        assert_eq!(die, Die::default());
    }

    #[test]
    fn test_roll_sets_value_and_counts() {
        let mut faces = ScriptedFaces::new(vec![4, 2]);
        let mut die = Die::new();

        die.roll(&mut faces);
        assert_eq!(die.value(), 4);
        assert_eq!(die.roll_count(), 1);

        die.roll(&mut faces);
        assert_eq!(die.value(), 2);
        assert_eq!(die.roll_count(), 2);
    }

    #[test]
    fn test_cannot_hold_before_rolling() {
        let mut die = Die::new();
        die.toggle_held();
        assert!(!die.is_held());
    }

    #[test]
    fn test_toggle_after_roll() {
        let mut faces = ScriptedFaces::new(vec![3]);
        let mut die = Die::new();
        die.roll(&mut faces);

        die.toggle_held();
        assert!(die.is_held());
        die.toggle_held();
        assert!(!die.is_held());
    }

    #[test]
    fn test_held_die_keeps_face() {
        let mut faces = ScriptedFaces::new(vec![5, 1]);
        let mut die = Die::new();
        die.roll(&mut faces);
        die.toggle_held();

        die.roll(&mut faces);
        assert_eq!(die.value(), 5);
        assert_eq!(faces.consumed(), 1);
    }

    #[test]
    fn test_reset() {
        let mut faces = ScriptedFaces::new(vec![6]);
        let mut die = Die::new();
        die.roll(&mut faces);
        die.toggle_held();

        die.reset();
        assert_eq!(die, Die::new());
    }
}
