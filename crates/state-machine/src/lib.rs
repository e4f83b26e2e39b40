//! Priority-weighted state machine library for frame-stepped games.
//!
//! A [`StateTable`] maps designer-authored states to two kinds of rules:
//!
//! - **Priority conditions**: every non-default state carries a list of
//!   `(guard, weight)` pairs. Each tick the weights of the satisfied guards
//!   are summed and the state with the highest total wins.
//! - **Guarded effects**: every state carries a list of `(action, guard)`
//!   pairs. While the state is active, each action whose guard holds fires.
//!
//! Selection and execution are separate passes. A state is a coarse label;
//! the effects inside it keep their own fine-grained triggers.
//!
//! # Architecture
//!
//! - [`Guard`]: boolean predicate over a context
//! - [`Action`]: unconditional side effect over a context
//! - [`StateTable`]: immutable, order-preserving table
//! - [`StateTableBuilder`]: validated construction
//!
//! The library is generic over the context type `C`; it knows nothing about
//! actors, worlds, or clocks.

pub mod builder;
pub mod error;
pub mod guard;
pub mod table;

// Re-export core types for ergonomic API
pub use builder::StateTableBuilder;
pub use error::TableError;
pub use guard::{Action, Guard};
pub use table::StateTable;
