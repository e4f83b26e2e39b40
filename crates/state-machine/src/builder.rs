//! Validated construction of state tables.

use std::fmt::Display;

use crate::TableError;
use crate::table::{GuardedActions, StateTable, Weights};

/// Accumulates states in declaration order and validates them on [`build`](Self::build).
///
/// # Example
///
/// ```rust,ignore
/// let table = StateTableBuilder::new("zombie")
///     .state("passive", true, vec![], vec![])
///     .state("active", false, vec![(TargetClose(400.0), 1)], vec![(Pursue, Always)])
///     .build()?;
/// ```
pub struct StateTableBuilder<S, G, A> {
    name: String,
    default_state: Option<S>,
    states: Vec<StateEntry<S, G, A>>,
}

struct StateEntry<S, G, A> {
    state: S,
    is_default: bool,
    weights: Weights<G>,
    actions: GuardedActions<A, G>,
}

impl<S, G, A> StateTableBuilder<S, G, A>
where
    S: Clone + PartialEq + Display,
{
    /// Starts a table; `name` only appears in error messages.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_state: None,
            states: Vec::new(),
        }
    }

    /// Declares a state.
    ///
    /// `weights` are ignored for selection when `is_default` is set, and
    /// declaring both is rejected by [`build`](Self::build).
    pub fn state(
        mut self,
        state: S,
        is_default: bool,
        weights: Vec<(G, u32)>,
        actions: Vec<(A, G)>,
    ) -> Self {
        self.states.push(StateEntry {
            state,
            is_default,
            weights,
            actions,
        });
        self
    }

    /// Validates the declared states and produces the table.
    ///
    /// # Errors
    ///
    /// - [`TableError::NoDefaultState`] if no state is marked default
    /// - [`TableError::MultipleDefaultStates`] if more than one is
    /// - [`TableError::DuplicateState`] if a label repeats
    /// - [`TableError::WeightedDefault`] if the default carries weights
    pub fn build(mut self) -> Result<StateTable<S, G, A>, TableError> {
        let mut weighted = Vec::new();
        let mut effects: Vec<(S, GuardedActions<A, G>)> = Vec::new();

        for entry in std::mem::take(&mut self.states) {
            if effects.iter().any(|(s, _)| *s == entry.state) {
                return Err(TableError::DuplicateState {
                    table: self.name,
                    state: entry.state.to_string(),
                });
            }

            if entry.is_default {
                if let Some(first) = &self.default_state {
                    return Err(TableError::MultipleDefaultStates {
                        table: self.name.clone(),
                        first: first.to_string(),
                        second: entry.state.to_string(),
                    });
                }
                if !entry.weights.is_empty() {
                    return Err(TableError::WeightedDefault {
                        table: self.name,
                        state: entry.state.to_string(),
                    });
                }
                self.default_state = Some(entry.state.clone());
            } else {
                weighted.push((entry.state.clone(), entry.weights));
            }

            effects.push((entry.state, entry.actions));
        }

        let default_state = self
            .default_state
            .ok_or(TableError::NoDefaultState { table: self.name })?;

        Ok(StateTable {
            default_state,
            weighted,
            effects,
        })
    }
}
