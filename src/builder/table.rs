//! Builder for state tables.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::core::{StateDescriptor, StateTable};
use std::collections::HashSet;

/// Builder for an ordered state table.
///
/// States receive their identity from insertion order: the first `state`
/// call builds the state at index 0, the second at index 1, and so on.
/// Validation happens at [`build`](StateTableBuilder::build): the table
/// must hold at least one state and names must be unique.
pub struct StateTableBuilder<C, P = ()> {
    states: Vec<StateDescriptor<C, P>>,
}

impl<C, P> StateTableBuilder<C, P> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Append a state. Its id is the number of states added before it.
    pub fn state(mut self, state: StateBuilder<C, P>) -> Self {
        self.states.push(state.build());
        self
    }

    /// Build the table.
    pub fn build(self) -> Result<StateTable<C, P>, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::EmptyTable);
        }

        let mut seen = HashSet::new();
        for descriptor in &self.states {
            if !seen.insert(descriptor.name()) {
                return Err(BuildError::DuplicateState {
                    name: descriptor.name().to_string(),
                });
            }
        }

        Ok(StateTable {
            states: self.states,
        })
    }
}

impl<C, P> Default for StateTableBuilder<C, P> {
    fn default() -> Self {
        Self::new()
    }
}
