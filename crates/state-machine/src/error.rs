//! Construction errors for state tables.

/// Errors raised while building a [`StateTable`](crate::StateTable).
///
/// All of these indicate malformed source data. They are reported once, at
/// build time; a built table never fails during evaluation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("table '{table}' declares no default state")]
    NoDefaultState { table: String },

    #[error("table '{table}' declares both '{first}' and '{second}' as default")]
    MultipleDefaultStates {
        table: String,
        first: String,
        second: String,
    },

    #[error("table '{table}' declares state '{state}' more than once")]
    DuplicateState { table: String, state: String },

    #[error("table '{table}': default state '{state}' must not carry priority conditions")]
    WeightedDefault { table: String, state: String },
}
