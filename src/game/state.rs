//! Dice-state and hold-action value types
//!
//! Both are small sorted integer sequences with structural equality and
//! hashing, so they serve directly as keys in the policy and value maps.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical configuration of currently-showing die faces.
///
/// Faces are kept in non-decreasing order, so two rolls showing the same
/// multiset of faces compare equal regardless of the order the dice landed in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DiceState(Vec<i32>);

impl DiceState {
    /// Create a state from face values, sorting them into canonical order.
    pub fn new(mut faces: Vec<i32>) -> Self {
        faces.sort_unstable();
        DiceState(faces)
    }

    /// Face values in non-decreasing order.
    pub fn faces(&self) -> &[i32] {
        &self.0
    }

    /// Number of dice in the state.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all face values.
    pub fn sum(&self) -> i32 {
        self.0.iter().sum()
    }
}

impl fmt::Display for DiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, face) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{face}")?;
        }
        write!(f, "]")
    }
}

/// The subset of die indices held (not rerolled).
///
/// Holding every die is the unique terminal action: it ends the game and
/// banks the final score. Indices are kept sorted and distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action(Vec<usize>);

impl Action {
    /// Create an action from die indices, sorting and deduplicating them.
    pub fn new(mut held: Vec<usize>) -> Self {
        held.sort_unstable();
        held.dedup();
        Action(held)
    }

    /// The action that rerolls every die.
    pub fn hold_none() -> Self {
        Action(Vec::new())
    }

    /// The terminal action for a game with `dice` dice.
    pub fn hold_all(dice: usize) -> Self {
        Action((0..dice).collect())
    }

    /// Held die indices in ascending order.
    pub fn held(&self) -> &[usize] {
        &self.0
    }

    /// Number of dice held.
    pub fn hold_count(&self) -> usize {
        self.0.len()
    }

    /// True if this action holds the die at `index`.
    pub fn holds(&self, index: usize) -> bool {
        self.0.binary_search(&index).is_ok()
    }

    /// True if this action holds every one of `dice` dice.
    pub fn holds_all(&self, dice: usize) -> bool {
        self.0.len() == dice
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hold [")?;
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{index}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn states_canonicalize_to_sorted_order() {
        assert_eq!(DiceState::new(vec![5, 2, 2]), DiceState::new(vec![2, 5, 2]));
        assert_eq!(DiceState::new(vec![3, 1, 2]).faces(), &[1, 2, 3]);
    }

    #[test]
    fn states_work_as_map_keys() {
        let mut map = HashMap::new();
        map.insert(DiceState::new(vec![6, 1]), 1.5);
        assert_eq!(map.get(&DiceState::new(vec![1, 6])), Some(&1.5));
    }

    #[test]
    fn actions_canonicalize_and_answer_membership() {
        let action = Action::new(vec![2, 0, 2]);
        assert_eq!(action.held(), &[0, 2]);
        assert!(action.holds(0));
        assert!(!action.holds(1));
        assert!(action.holds(2));
    }

    #[test]
    fn hold_all_is_terminal_for_its_dice_count() {
        let action = Action::hold_all(3);
        assert_eq!(action.held(), &[0, 1, 2]);
        assert!(action.holds_all(3));
        assert!(!Action::new(vec![0, 1]).holds_all(3));
        assert!(!Action::hold_none().holds_all(1));
    }

    #[test]
    fn display_formats() {
        assert_eq!(DiceState::new(vec![2, 2, 5]).to_string(), "[2, 2, 5]");
        assert_eq!(Action::new(vec![0, 2]).to_string(), "hold [0, 2]");
        assert_eq!(Action::hold_none().to_string(), "hold []");
    }
}
