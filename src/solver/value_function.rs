//! State-value table with a monotonic update rule

use std::collections::HashMap;

use crate::game::DiceState;

/// The value function V(s): expected discounted return per state.
///
/// Values start at zero and are only ever *raised*: [`ValueFunction::raise`]
/// is a compare-and-replace that keeps the old value unless the candidate
/// strictly improves it. Values never decrease within a solve; the
/// improvement step relies on this when comparing candidate actions against
/// V(s).
#[derive(Debug, Clone, PartialEq)]
pub struct ValueFunction {
    values: HashMap<DiceState, f64>,
}

impl ValueFunction {
    /// A value function assigning 0 to every state.
    pub fn zeroed(states: &[DiceState]) -> Self {
        Self {
            values: states.iter().map(|s| (s.clone(), 0.0)).collect(),
        }
    }

    /// Current value of a state (0 for states never raised).
    pub fn get(&self, state: &DiceState) -> f64 {
        self.values.get(state).copied().unwrap_or(0.0)
    }

    /// Monotonic compare-and-replace: adopt `candidate` only if it strictly
    /// exceeds the current value. Returns the absolute change (0 when the
    /// candidate does not improve).
    pub fn raise(&mut self, state: &DiceState, candidate: f64) -> f64 {
        let value = self.values.entry(state.clone()).or_insert(0.0);
        if candidate > *value {
            let delta = candidate - *value;
            *value = candidate;
            delta
        } else {
            0.0
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> DiceState {
        DiceState::new(vec![1, 2, 3])
    }

    #[test]
    fn starts_at_zero() {
        let v = ValueFunction::zeroed(&[state()]);
        assert_eq!(v.get(&state()), 0.0);
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn raise_adopts_strictly_better_candidates() {
        let mut v = ValueFunction::zeroed(&[state()]);
        assert_eq!(v.raise(&state(), 2.5), 2.5);
        assert_eq!(v.get(&state()), 2.5);
        assert_eq!(v.raise(&state(), 4.0), 1.5);
        assert_eq!(v.get(&state()), 4.0);
    }

    #[test]
    fn raise_never_lowers_a_value() {
        let mut v = ValueFunction::zeroed(&[state()]);
        v.raise(&state(), 3.0);
        assert_eq!(v.raise(&state(), 1.0), 0.0);
        assert_eq!(v.raise(&state(), 3.0), 0.0);
        assert_eq!(v.get(&state()), 3.0);
    }
}
