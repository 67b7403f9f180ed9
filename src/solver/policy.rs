//! Total state → action policy map

use std::{collections::HashMap, fs::File, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    game::{Action, DiceState},
};

/// A policy: one assigned action for every state of the game.
#[derive(Debug, Clone, PartialEq)]
pub struct Policy {
    actions: HashMap<DiceState, Action>,
}

/// One (state, action) assignment, used for the JSON on-disk form, since
/// JSON objects cannot be keyed by structured states.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PolicyEntry {
    state: DiceState,
    action: Action,
}

impl Policy {
    /// A policy assigning the same action to every state.
    pub fn constant(states: &[DiceState], action: &Action) -> Self {
        Self {
            actions: states
                .iter()
                .map(|s| (s.clone(), action.clone()))
                .collect(),
        }
    }

    /// The action assigned to `state`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingPolicyEntry`] for a state outside the policy's
    /// domain; a policy built over a game's full state space is total.
    pub fn action(&self, state: &DiceState) -> Result<&Action> {
        self.actions.get(state).ok_or(Error::MissingPolicyEntry {
            state: state.to_string(),
        })
    }

    /// Assign `action` to `state`. Returns true if the assignment differs
    /// from the previous one.
    pub fn assign(&mut self, state: DiceState, action: Action) -> bool {
        match self.actions.insert(state, action.clone()) {
            Some(previous) => previous != action,
            None => true,
        }
    }

    /// True if `state` has an assigned action.
    pub fn contains(&self, state: &DiceState) -> bool {
        self.actions.contains_key(state)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// All assignments, sorted by state for stable iteration and output.
    pub fn entries_sorted(&self) -> Vec<(&DiceState, &Action)> {
        let mut entries: Vec<_> = self.actions.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Save the policy to a JSON file as a sorted list of entries.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let entries: Vec<PolicyEntry> = self
            .entries_sorted()
            .into_iter()
            .map(|(state, action)| PolicyEntry {
                state: state.clone(),
                action: action.clone(),
            })
            .collect();
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, &entries)?;
        Ok(())
    }

    /// Load a policy from a JSON file written by [`Policy::save`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let entries: Vec<PolicyEntry> = serde_json::from_reader(file)?;
        Ok(Self {
            actions: entries
                .into_iter()
                .map(|entry| (entry.state, entry.action))
                .collect(),
        })
    }
}
